//! mmCIF text output.
//!
//! One `data_` block per container. Single-row categories are written as
//! key/value pairs, multi-row categories as a `loop_`. A missing cell is `?`
//! and an empty string is `.`. A multi-line value with a line starting in
//! `;` cannot be delimited in CIF 1.1, so rendering it fails.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use tracing::debug;

use vrpt_model::{Category, DataContainer};

use crate::common::ensure_parent_dir;
use crate::{ContainerWriter, OutputFormat};

const RESERVED_PREFIXES: [&str; 5] = ["data_", "save_", "loop_", "stop_", "global_"];

/// Writes containers as mmCIF text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CifWriter;

impl ContainerWriter for CifWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Cif
    }

    fn write_containers(&self, path: &Path, containers: &[DataContainer]) -> Result<()> {
        ensure_parent_dir(path)?;
        let text = render_cif(containers)?;
        fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), containers = containers.len(), "wrote mmCIF");
        Ok(())
    }
}

/// A rendered cell: inline token or a `;`-delimited text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CifToken {
    Inline(String),
    TextField(String),
}

/// Render containers to mmCIF text.
pub fn render_cif(containers: &[DataContainer]) -> Result<String> {
    let mut out = String::new();
    for container in containers {
        let _ = writeln!(out, "data_{}", container.name);
        out.push_str("#\n");
        for category in container.categories() {
            if category.columns.is_empty() || category.rows.is_empty() {
                continue;
            }
            if category.row_count() == 1 {
                write_pairs(&mut out, category)?;
            } else {
                write_loop(&mut out, category)?;
            }
            out.push_str("#\n");
        }
    }
    Ok(out)
}

fn write_pairs(out: &mut String, category: &Category) -> Result<()> {
    let names: Vec<String> = category
        .columns
        .iter()
        .map(|column| item_name(&category.name, &column.name))
        .collect();
    let width = names.iter().map(String::len).max().unwrap_or(0);
    for (name, value) in names.iter().zip(category.row_values(0)) {
        match format_value(value) {
            CifToken::Inline(token) => {
                let _ = writeln!(out, "{name:<width$} {token}");
            }
            CifToken::TextField(text) => {
                let _ = writeln!(out, "{name}");
                write_text_field(out, name, &text)?;
            }
        }
    }
    Ok(())
}

fn write_loop(out: &mut String, category: &Category) -> Result<()> {
    out.push_str("loop_\n");
    for column in &category.columns {
        let _ = writeln!(out, "{}", item_name(&category.name, &column.name));
    }
    for row in 0..category.row_count() {
        let mut line = String::new();
        for (column, value) in category.columns.iter().zip(category.row_values(row)) {
            match format_value(value) {
                CifToken::Inline(token) => {
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(&token);
                }
                CifToken::TextField(text) => {
                    if !line.is_empty() {
                        out.push_str(&line);
                        out.push('\n');
                        line.clear();
                    }
                    write_text_field(out, &item_name(&category.name, &column.name), &text)?;
                }
            }
        }
        if !line.is_empty() {
            out.push_str(&line);
            out.push('\n');
        }
    }
    Ok(())
}

fn write_text_field(out: &mut String, item: &str, text: &str) -> Result<()> {
    ensure!(
        !text.contains("\n;"),
        "value of {item} has a line starting with ';' and cannot be written as a text field"
    );
    out.push(';');
    out.push_str(text);
    out.push_str("\n;\n");
    Ok(())
}

fn item_name(category: &str, attribute: &str) -> String {
    format!("_{category}.{attribute}")
}

/// Choose the mmCIF representation for one cell.
pub fn format_value(value: Option<&str>) -> CifToken {
    let Some(value) = value else {
        return CifToken::Inline("?".to_string());
    };
    if value.is_empty() {
        return CifToken::Inline(".".to_string());
    }
    if value.contains('\n') {
        return CifToken::TextField(value.to_string());
    }
    if !needs_quotes(value) {
        return CifToken::Inline(value.to_string());
    }
    if !value.contains('\'') {
        CifToken::Inline(format!("'{value}'"))
    } else if !value.contains('"') {
        CifToken::Inline(format!("\"{value}\""))
    } else {
        CifToken::TextField(value.to_string())
    }
}

fn needs_quotes(value: &str) -> bool {
    if value == "?" || value == "." {
        return true;
    }
    if value.chars().any(char::is_whitespace) {
        return true;
    }
    if value.starts_with(['_', '#', '$', '\'', '"', '[', ']', ';']) {
        return true;
    }
    let lower = value.to_ascii_lowercase();
    RESERVED_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}
