#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute bag of a single element, keyed by local attribute name.
pub type Attributes = BTreeMap<String, String>;

/// A parsed XML element with its attributes and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Local tag name (namespace prefix stripped).
    pub tag: String,
    pub attributes: Attributes,
    /// Trimmed character data, when the element carries any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder helper used heavily by tests and tooling.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[ElementNode] {
        &self.children
    }
}

/// A parsed report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub root: ElementNode,
    /// Where the document came from (file path or an in-memory label).
    pub source: String,
}

impl Document {
    pub fn new(root: ElementNode, source: impl Into<String>) -> Self {
        Self {
            root,
            source: source.into(),
        }
    }

    /// Top-level elements directly below the root.
    pub fn top_level(&self) -> &[ElementNode] {
        &self.root.children
    }
}
