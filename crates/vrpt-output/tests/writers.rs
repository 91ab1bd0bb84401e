use std::fs;
use std::path::Path;

use tempfile::TempDir;

use vrpt_model::{Category, DataContainer, Row};
use vrpt_output::{
    CifWriter, ContainerWriter, JsonWriter, OutputFormat, render_cif, render_json, writer_for,
};

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn sample_container() -> DataContainer {
    let mut container = DataContainer::default();

    let mut summary = Category::new(
        "Entry",
        columns(&["pdbid", "PDB-resolution"]),
        vec![row(&[("pdbid", "1abc"), ("PDB-resolution", "1.80")])],
    );
    summary.set_name("pdbx_vrpt_summary");
    summary.columns[0].name = "entry_id".to_string();
    summary.columns[1].name = "PDB_resolution".to_string();
    container.push(summary);

    container.push(Category::new(
        "clash",
        columns(&["ordinal", "atom", "dist"]),
        vec![
            row(&[("ordinal", "1"), ("atom", "CA"), ("dist", "2.15")]),
            row(&[("ordinal", "2"), ("atom", "O 1")]),
        ],
    ));

    let mut program = Category::new(
        "program",
        columns(&["name", "properties"]),
        vec![row(&[
            ("name", "molprobity"),
            ("properties", "line one\nline two"),
        ])],
    );
    program.columns[1].name = "details".to_string();
    container.push(program);

    container
}

#[test]
fn renders_mmcif_blocks() {
    let text = render_cif(&[sample_container()]).unwrap();
    insta::assert_snapshot!(text, @r"
    data_vrpt
    #
    _pdbx_vrpt_summary.entry_id       1abc
    _pdbx_vrpt_summary.PDB_resolution 1.80
    #
    loop_
    _clash.ordinal
    _clash.atom
    _clash.dist
    1 CA 2.15
    2 'O 1' ?
    #
    _program.name    molprobity
    _program.details
    ;line one
    line two
    ;
    #
    ");
}

#[test]
fn empty_categories_are_not_written() {
    let mut container = DataContainer::new("vrpt");
    container.push(Category::new("clash", columns(&["atom"]), Vec::new()));
    assert_eq!(render_cif(&[container]).unwrap(), "data_vrpt\n#\n");
}

#[test]
fn text_field_inside_loop_breaks_the_line() {
    let mut container = DataContainer::new("vrpt");
    container.push(Category::new(
        "note",
        columns(&["id", "text"]),
        vec![
            row(&[("id", "1"), ("text", "a\nb")]),
            row(&[("id", "2"), ("text", "c")]),
        ],
    ));
    let text = render_cif(&[container]).unwrap();
    assert!(text.contains("1\n;a\nb\n;\n2 c\n"), "{text}");
}

#[test]
fn semicolon_led_line_cannot_be_a_text_field() {
    let mut container = DataContainer::new("vrpt");
    container.push(Category::new(
        "note",
        columns(&["text"]),
        vec![row(&[("text", "one\n;two")])],
    ));

    let err = render_cif(std::slice::from_ref(&container)).unwrap_err();
    assert!(err.to_string().contains("_note.text"), "{err}");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("note.cif");
    assert!(CifWriter.write_containers(&path, &[container]).is_err());
    assert!(!path.exists());

    // a leading semicolon on the first line is still fine
    let mut container = DataContainer::new("vrpt");
    container.push(Category::new(
        "note",
        columns(&["text"]),
        vec![row(&[("text", ";one\ntwo")])],
    ));
    assert!(
        render_cif(&[container])
            .unwrap()
            .contains("_note.text\n;;one\ntwo\n;\n")
    );
}

#[test]
fn json_keeps_column_order_and_nulls() {
    let value = render_json(&[sample_container()]).unwrap();
    let clash = &value["containers"][0]["categories"][1];
    assert_eq!(clash["name"], "clash");
    assert_eq!(clash["columns"], serde_json::json!(["ordinal", "atom", "dist"]));
    assert_eq!(clash["rows"][1], serde_json::json!(["2", "O 1", null]));
    let summary = &value["containers"][0]["categories"][0];
    assert_eq!(summary["source"], "Entry");
    assert_eq!(
        summary["columns"],
        serde_json::json!(["entry_id", "PDB_resolution"])
    );
}

#[test]
fn writers_create_parent_directories() {
    let dir = TempDir::new().unwrap();
    let cif_path = dir.path().join("out/nested/1abc_vrpt.cif");
    let json_path = dir.path().join("out/1abc_vrpt.json");
    let containers = [sample_container()];

    CifWriter.write_containers(&cif_path, &containers).unwrap();
    JsonWriter.write_containers(&json_path, &containers).unwrap();

    let cif = fs::read_to_string(&cif_path).unwrap();
    assert!(cif.starts_with("data_vrpt\n"));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["containers"][0]["name"], "vrpt");
}

#[test]
fn format_inference_and_writer_selection() {
    assert_eq!(
        OutputFormat::from_path(Path::new("out.json")),
        OutputFormat::Json
    );
    assert_eq!(
        OutputFormat::from_path(Path::new("out.cif")),
        OutputFormat::Cif
    );
    assert_eq!(OutputFormat::from_path(Path::new("out")), OutputFormat::Cif);
    assert_eq!(writer_for(OutputFormat::Json).format(), OutputFormat::Json);
    assert_eq!(OutputFormat::Cif.to_string(), "mmcif");
}
