use std::collections::BTreeSet;
use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vrpt_ingest::OutlineEntry;
use vrpt_model::DataContainer;
use vrpt_standards::SchemaCatalog;

use crate::commands::ConvertOutcome;

pub fn print_convert_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Output: {} ({})", outcome.output.display(), outcome.format);
    match &outcome.schema_sha256 {
        Some(digest) => println!("Schema map: {} [{digest}]", outcome.schema_map.display()),
        None => println!("Schema map: {}", outcome.schema_map.display()),
    }
    println!("{}", container_table(&outcome.container));
}

/// One row per category plus a total row.
pub fn container_table(container: &DataContainer) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Source element"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_rows = 0usize;
    for category in container.categories() {
        total_rows += category.row_count();
        let source = if category.source_name == category.name {
            dim_cell(&category.source_name)
        } else {
            Cell::new(&category.source_name)
        };
        table.add_row(vec![
            Cell::new(&category.name).add_attribute(Attribute::Bold),
            source,
            Cell::new(category.row_count()),
            Cell::new(category.columns.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("data_{}", container.name)).fg(Color::Cyan),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn print_categories(catalog: &SchemaCatalog) {
    if let Some(path) = &catalog.source {
        println!("Schema map: {}", path.display());
    }
    println!("{}", categories_table(catalog));
}

/// Source category, canonical name and registered attribute count.
pub fn categories_table(catalog: &SchemaCatalog) -> Table {
    let schema = &catalog.schema_map;
    let sources: BTreeSet<&str> = schema
        .category_translations()
        .map(|(source, _)| source)
        .chain(schema.registered_categories())
        .collect();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Category"),
        header_cell("Attributes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for source in sources {
        let attributes = schema.registered_attributes(source).map_or(0, <[String]>::len);
        let count = if attributes == 0 {
            dim_cell("-")
        } else {
            Cell::new(attributes)
        };
        table.add_row(vec![
            Cell::new(source),
            Cell::new(schema.category_name(source)),
            count,
        ]);
    }
    table
}

/// Indented tree text, one element per line.
pub fn format_outline(entries: &[OutlineEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let indent = "  ".repeat(entry.depth.saturating_sub(1));
        let _ = write!(out, "{indent}{}", entry.tag);
        for (name, value) in &entry.attributes {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        if let Some(text) = &entry.text {
            let _ = write!(out, " : {text}");
        }
        out.push('\n');
    }
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
