#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// One flattened element: attribute name to value.
///
/// Keys vary per row; a key missing from a row is a null for that column.
pub type Row = BTreeMap<String, String>;

/// Rows collected for one element tag, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub tag: String,
    pub rows: Vec<Row>,
}

impl CategoryTable {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Union of the keys present in any row.
    pub fn column_set(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }
}

/// Category tables keyed by tag, iterated in first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct FlattenedReport {
    tables: Vec<CategoryTable>,
    index: HashMap<String, usize>,
}

impl FlattenedReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the table for `tag`, creating the table on first use.
    pub fn push_row(&mut self, tag: &str, row: Row) {
        let slot = match self.index.get(tag) {
            Some(slot) => *slot,
            None => {
                self.tables.push(CategoryTable::new(tag));
                let slot = self.tables.len() - 1;
                self.index.insert(tag.to_string(), slot);
                slot
            }
        };
        self.tables[slot].push_row(row);
    }

    pub fn get(&self, tag: &str) -> Option<&CategoryTable> {
        self.index.get(tag).map(|slot| &self.tables[*slot])
    }

    pub fn tags(&self) -> Vec<&str> {
        self.tables.iter().map(|table| table.tag.as_str()).collect()
    }

    pub fn tables(&self) -> &[CategoryTable] {
        &self.tables
    }

    pub fn into_tables(self) -> Vec<CategoryTable> {
        self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(CategoryTable::len).sum()
    }
}
