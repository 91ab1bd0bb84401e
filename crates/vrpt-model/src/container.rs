#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Default data block name for converted validation reports.
pub const DEFAULT_CONTAINER_NAME: &str = "vrpt";

/// A named data block holding categories in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataContainer {
    pub name: String,
    categories: Vec<Category>,
}

impl DataContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
        }
    }

    /// Append a category. Names are not checked here; assembly decides how
    /// collisions are resolved before calling this.
    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.name == name)
    }

    /// First category built from the `source` element tag.
    pub fn get_by_source_mut(&mut self, source: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.source_name == source)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for DataContainer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_NAME)
    }
}
