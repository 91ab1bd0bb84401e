#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::table::Row;

/// An output column: canonical name plus the source key rows are stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub source: String,
}

impl Column {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// A finished category: canonical name, ordered columns and row data.
///
/// Rows keep their source attribute keys; callers address values through
/// canonical column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Element tag the rows were collected from.
    pub source_name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Category {
    /// Create a category whose canonical names equal its source names.
    pub fn new(source_name: impl Into<String>, columns: Vec<String>, rows: Vec<Row>) -> Self {
        let source_name = source_name.into();
        Self {
            name: source_name.clone(),
            source_name,
            columns: columns
                .into_iter()
                .map(|column| Column::new(column.clone(), column))
                .collect(),
            rows,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Value of `column` (canonical name) in `row`; `None` for a null cell or
    /// an unknown column.
    pub fn value(&self, column: &str, row: usize) -> Option<&str> {
        let source = &self.column(column)?.source;
        self.rows.get(row)?.get(source).map(String::as_str)
    }

    pub fn set_value(&mut self, column: &str, row: usize, value: impl Into<String>) -> Result<()> {
        let source = self
            .column(column)
            .map(|column| column.source.clone())
            .ok_or_else(|| ModelError::UnknownColumn {
                category: self.name.clone(),
                column: column.to_string(),
            })?;
        let row_count = self.rows.len();
        let target = self.rows.get_mut(row).ok_or_else(|| ModelError::RowOutOfRange {
            category: self.name.clone(),
            row,
            row_count,
        })?;
        target.insert(source, value.into());
        Ok(())
    }

    /// Values of one row in column order.
    pub fn row_values(&self, row: usize) -> Vec<Option<&str>> {
        let Some(data) = self.rows.get(row) else {
            return Vec::new();
        };
        self.columns
            .iter()
            .map(|column| data.get(&column.source).map(String::as_str))
            .collect()
    }
}
