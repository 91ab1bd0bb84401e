use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use vrpt_cli::commands::{run_categories, run_convert, run_inspect};
use vrpt_cli::summary::{categories_table, container_table, format_outline};
use vrpt_output::OutputFormat;
use vrpt_standards::default_schema_map_path;

const REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wwPDB-validation-information>
  <Entry pdbid="2xyz" PDB-resolution="2.10" />
  <ModelledSubgroup chain="A" ent="1" model="1" resname="GLY" resnum="5" said="A" seq="5" icode=" ">
    <clash atom="CA" cid="1" clashmag="0.40" dist="2.20" />
  </ModelledSubgroup>
  <programs>
    <program name="molprobity" version="4.02b-467" properties="clashscore" />
  </programs>
</wwPDB-validation-information>
"#;

fn write_report(dir: &Path) -> PathBuf {
    let path = dir.join("2xyz_validation.xml");
    fs::write(&path, REPORT).unwrap();
    path
}

fn schema_map() -> PathBuf {
    default_schema_map_path()
}

#[test]
fn convert_writes_mmcif_and_reports_categories() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path());
    let output = dir.path().join("2xyz_vrpt.cif");

    let outcome = run_convert(&input, &output, Some(&schema_map()), None).unwrap();

    assert!(outcome.written);
    assert_eq!(outcome.format, OutputFormat::Cif);
    assert!(outcome.schema_sha256.is_some());
    assert_eq!(
        outcome.container.category_names(),
        vec![
            "pdbx_vrpt_summary",
            "pdbx_vrpt_model_instance",
            "pdbx_vrpt_clashes",
            "pdbx_vrpt_software",
        ]
    );
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("_pdbx_vrpt_software.details"));
    assert!(text.contains("'MolProbity clashscore'"));

    let summary = container_table(&outcome.container).to_string();
    assert!(summary.contains("pdbx_vrpt_clashes"));
    assert!(summary.contains("TOTAL"));
}

#[test]
fn json_output_from_extension_or_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path());

    let by_extension = dir.path().join("out.json");
    let outcome = run_convert(&input, &by_extension, Some(&schema_map()), None).unwrap();
    assert_eq!(outcome.format, OutputFormat::Json);

    let by_flag = dir.path().join("out.txt");
    let outcome =
        run_convert(&input, &by_flag, Some(&schema_map()), Some(OutputFormat::Json)).unwrap();
    assert_eq!(outcome.format, OutputFormat::Json);
    assert!(fs::read_to_string(&by_flag).unwrap().starts_with('{'));
}

#[test]
fn missing_schema_map_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path());
    let err = run_convert(
        &input,
        &dir.path().join("out.cif"),
        Some(&dir.path().join("nope.json")),
        None,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("load schema map"));
}

#[test]
fn inspect_prints_outline() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path());

    let entries = run_inspect(&input, 1).unwrap();
    insta::assert_snapshot!(format_outline(&entries), @r#"
    Entry PDB-resolution="2.10" pdbid="2xyz"
    ModelledSubgroup chain="A" ent="1" icode=" " model="1" resname="GLY" resnum="5" said="A" seq="5"
    programs
    "#);

    let deeper = run_inspect(&input, 2).unwrap();
    assert_eq!(deeper.len(), 5);
    assert_eq!(deeper[2].tag, "clash");
    assert_eq!(deeper[2].depth, 2);
}

#[test]
fn categories_lists_translations() {
    let catalog = run_categories(Some(&schema_map())).unwrap();
    let table = categories_table(&catalog).to_string();
    assert!(table.contains("ModelledSubgroup"));
    assert!(table.contains("pdbx_vrpt_model_instance"));
    assert!(table.contains("pdbx_vrpt_software"));
}
