//! Depth-limited walk over a parsed report for diagnostics.

use tracing::debug;

use vrpt_model::{Attributes, Document, ElementNode};

/// Levels below the root visited by default.
pub const DEFAULT_OUTLINE_DEPTH: usize = 5;

/// One visited element. `depth` is 1 for top-level elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub depth: usize,
    pub tag: String,
    pub attributes: Attributes,
    pub text: Option<String>,
}

/// Visit every element up to `max_depth` levels below the root, in document
/// order, and log each one at debug level.
pub fn outline(document: &Document, max_depth: usize) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    for element in document.top_level() {
        visit(element, 1, max_depth, &mut entries);
    }
    entries
}

fn visit(element: &ElementNode, depth: usize, max_depth: usize, out: &mut Vec<OutlineEntry>) {
    if depth > max_depth {
        return;
    }
    debug!(
        "{} {} {:?}",
        "-- ".repeat(depth).trim_end(),
        element.tag,
        element.attributes
    );
    out.push(OutlineEntry {
        depth,
        tag: element.tag.clone(),
        attributes: element.attributes.clone(),
        text: element.text.clone().filter(|text| !text.is_empty()),
    });
    for child in element.children() {
        visit(child, depth + 1, max_depth, out);
    }
}
