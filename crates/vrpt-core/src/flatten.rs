//! Three-level flattening of a report tree into per-tag row tables.
//!
//! Top-level elements and grandchildren contribute their attributes
//! verbatim. Children of a cardinal element additionally carry the parent's
//! residue-identifying attributes, with the parent value winning on conflict.
//! Nothing below the grandchild level is visited.

use tracing::debug;

use vrpt_model::{Document, ElementNode, FlattenedReport, Row};

use crate::rules::FlattenRules;

pub fn flatten_document(document: &Document, rules: &FlattenRules) -> FlattenedReport {
    let mut report = FlattenedReport::new();

    for element in document.top_level() {
        debug!(
            level = 1,
            tag = %element.tag,
            attributes = element.attributes.len(),
            children = element.children().len(),
            "flatten element"
        );
        report.push_row(&element.tag, element.attributes.clone());

        let carried = carried_attributes(element, rules);
        for child in element.children() {
            debug!(
                level = 2,
                tag = %child.tag,
                attributes = child.attributes.len(),
                carried = carried.len(),
                "flatten element"
            );
            let mut row: Row = child.attributes.clone();
            for (name, value) in &carried {
                row.insert((*name).to_string(), (*value).to_string());
            }
            report.push_row(&child.tag, row);

            for grandchild in child.children() {
                debug!(
                    level = 3,
                    tag = %grandchild.tag,
                    attributes = grandchild.attributes.len(),
                    "flatten element"
                );
                report.push_row(&grandchild.tag, grandchild.attributes.clone());
            }
        }
    }

    debug!(
        tables = report.len(),
        rows = report.row_count(),
        "flattened report"
    );
    report
}

/// Cardinal attributes present on `element`, empty unless it is the cardinal kind.
fn carried_attributes<'a>(
    element: &'a ElementNode,
    rules: &'a FlattenRules,
) -> Vec<(&'a str, &'a str)> {
    if !rules.is_cardinal(&element.tag) {
        return Vec::new();
    }
    rules
        .cardinal_attributes
        .iter()
        .filter_map(|name| element.attribute(name).map(|value| (name.as_str(), value)))
        .collect()
}
