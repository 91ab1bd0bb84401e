//! Schema lookup tables: category/attribute translation, column ranks and
//! provenance token decoding.
//!
//! All translations fall back to the input name when no entry exists, so
//! reports produced by newer tooling still convert with their native names.
//! The one strict table is [`AttributeOrder`]: a column without a rank is an
//! error for the caller to raise.

use std::collections::BTreeMap;

/// Source-to-canonical name translation for categories and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMap {
    categories: BTreeMap<String, String>,
    attributes: BTreeMap<String, BTreeMap<String, String>>,
    /// Attribute names registered per source category, in schema order.
    registered: BTreeMap<String, Vec<String>>,
}

impl SchemaMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_category(&mut self, source: impl Into<String>, canonical: impl Into<String>) {
        self.categories.insert(source.into(), canonical.into());
    }

    /// Register an attribute translation.
    ///
    /// Returns `false` (and leaves the map untouched) if the pair is already
    /// registered.
    pub fn insert_attribute(
        &mut self,
        category: impl Into<String>,
        attribute: impl Into<String>,
        canonical: impl Into<String>,
    ) -> bool {
        let category = category.into();
        let attribute = attribute.into();
        let names = self.attributes.entry(category.clone()).or_default();
        if names.contains_key(&attribute) {
            return false;
        }
        names.insert(attribute.clone(), canonical.into());
        self.registered.entry(category).or_default().push(attribute);
        true
    }

    /// Canonical category name, or `source` itself when unmapped.
    pub fn category_name<'a>(&'a self, source: &'a str) -> &'a str {
        self.categories
            .get(source)
            .map(String::as_str)
            .unwrap_or(source)
    }

    /// Canonical attribute name for a source (category, attribute) pair, or
    /// `attribute` itself when unmapped.
    pub fn attribute_name<'a>(&'a self, category: &str, attribute: &'a str) -> &'a str {
        self.attributes
            .get(category)
            .and_then(|names| names.get(attribute))
            .map(String::as_str)
            .unwrap_or(attribute)
    }

    /// Attribute names registered for a source category.
    pub fn registered_attributes(&self, category: &str) -> Option<&[String]> {
        self.registered.get(category).map(Vec::as_slice)
    }

    pub fn is_registered(&self, category: &str, attribute: &str) -> bool {
        self.attributes
            .get(category)
            .is_some_and(|names| names.contains_key(attribute))
    }

    /// Source to canonical category translations.
    pub fn category_translations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .map(|(source, canonical)| (source.as_str(), canonical.as_str()))
    }

    /// Every source category with registered attributes.
    pub fn registered_categories(&self) -> impl Iterator<Item = &str> {
        self.registered.keys().map(String::as_str)
    }

    pub fn attribute_count(&self) -> usize {
        self.registered.values().map(Vec::len).sum()
    }
}

/// Global attribute display order: attribute name to rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeOrder {
    ranks: BTreeMap<String, u32>,
}

impl AttributeOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attribute: impl Into<String>, rank: u32) {
        self.ranks.insert(attribute.into(), rank);
    }

    pub fn rank(&self, attribute: &str) -> Option<u32> {
        self.ranks.get(attribute).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for AttributeOrder {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            ranks: iter
                .into_iter()
                .map(|(name, rank)| (name.into(), rank))
                .collect(),
        }
    }
}

/// Decode table for provenance property tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDecode {
    tokens: BTreeMap<String, String>,
}

impl PropertyDecode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, decoded: impl Into<String>) {
        self.tokens.insert(token.into(), decoded.into());
    }

    pub fn decode<'a>(&'a self, token: &'a str) -> &'a str {
        self.tokens.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyDecode {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(token, decoded)| (token.into(), decoded.into()))
                .collect(),
        }
    }
}
