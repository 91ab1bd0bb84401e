//! Turns one flattened table into a named, ordered category.

use std::collections::BTreeSet;

use tracing::debug;

use vrpt_model::{AttributeOrder, Category, CategoryTable, Row, SchemaMap};

use crate::error::{ConvertError, Result};
use crate::rules::CategoryRules;

/// Why a table produced no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    Unregistered,
    Excluded,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Empty => "no rows",
            SkipReason::Unregistered => "not in schema map",
            SkipReason::Excluded => "grouping element",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    Built(Category),
    Skipped(SkipReason),
}

/// Normalize rows, order the columns by rank and apply canonical names.
///
/// Fails with [`ConvertError::MissingAttributeRank`] when an extracted
/// attribute has no rank.
pub fn build_category(
    table: CategoryTable,
    schema: &SchemaMap,
    order: &AttributeOrder,
    rules: &CategoryRules,
) -> Result<CategoryOutcome> {
    let CategoryTable { tag, mut rows } = table;

    if rows.is_empty() {
        return Ok(skip(&tag, SkipReason::Empty));
    }
    let Some(registered) = schema.registered_attributes(&tag) else {
        return Ok(skip(&tag, SkipReason::Unregistered));
    };
    if rules.is_excluded(&tag) {
        return Ok(skip(&tag, SkipReason::Excluded));
    }

    let with_ordinal = registered
        .iter()
        .any(|attribute| *attribute == rules.ordinal_column);
    normalize_rows(&mut rows, with_ordinal, rules);

    let columns = ordered_columns(&tag, &rows, order)?;
    let mut category = Category::new(tag, columns, rows);
    apply_canonical_names(&mut category, schema);

    debug!(
        source = %category.source_name,
        category = %category.name,
        rows = category.row_count(),
        columns = category.columns.len(),
        "built category"
    );
    Ok(CategoryOutcome::Built(category))
}

fn skip(tag: &str, reason: SkipReason) -> CategoryOutcome {
    debug!(source = %tag, reason = reason.as_str(), "skipped category");
    CategoryOutcome::Skipped(reason)
}

fn normalize_rows(rows: &mut [Row], with_ordinal: bool, rules: &CategoryRules) {
    for (index, row) in rows.iter_mut().enumerate() {
        if with_ordinal {
            row.insert(rules.ordinal_column.clone(), (index + 1).to_string());
        }
        for column in &rules.trimmed_columns {
            if let Some(value) = row.get_mut(column) {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    *value = trimmed.to_string();
                }
            }
        }
    }
}

/// Union of row keys sorted by ascending rank, then by name.
pub fn ordered_columns(category: &str, rows: &[Row], order: &AttributeOrder) -> Result<Vec<String>> {
    let names: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut ranked = Vec::with_capacity(names.len());
    for name in names {
        let rank = order
            .rank(name)
            .ok_or_else(|| ConvertError::MissingAttributeRank {
                category: category.to_string(),
                attribute: name.to_string(),
            })?;
        ranked.push((rank, name));
    }
    ranked.sort_unstable();

    Ok(ranked.into_iter().map(|(_, name)| name.to_string()).collect())
}

/// Translate columns by (source category, source column), then the category.
/// Always resolved from source names so nothing is translated twice.
pub fn apply_canonical_names(category: &mut Category, schema: &SchemaMap) {
    for column in &mut category.columns {
        column.name = schema
            .attribute_name(&category.source_name, &column.source)
            .to_string();
    }
    let name = schema.category_name(&category.source_name).to_string();
    category.set_name(name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn table(tag: &str, rows: Vec<Row>) -> CategoryTable {
        CategoryTable {
            tag: tag.to_string(),
            rows,
        }
    }

    fn schema() -> SchemaMap {
        let mut schema = SchemaMap::new();
        schema.insert_category("clash", "pdbx_vrpt_clash");
        schema.insert_attribute("clash", "ordinal", "ordinal");
        schema.insert_attribute("clash", "atom", "label_atom_id");
        schema.insert_attribute("clash", "icode", "PDB_ins_code");
        schema.insert_attribute("programs", "name", "name");
        schema.insert_attribute("Entry", "pdbid", "entry_id");
        schema
    }

    fn order() -> AttributeOrder {
        [("ordinal", 1), ("atom", 2), ("icode", 3), ("dist", 4), ("pdbid", 1)]
            .into_iter()
            .collect()
    }

    fn built(outcome: CategoryOutcome) -> Category {
        match outcome {
            CategoryOutcome::Built(category) => category,
            CategoryOutcome::Skipped(reason) => panic!("skipped: {reason:?}"),
        }
    }

    #[test]
    fn skips_empty_unregistered_and_grouping_tables() {
        let rules = CategoryRules::default();
        let cases = [
            (table("clash", Vec::new()), SkipReason::Empty),
            (table("unknown", vec![row(&[("a", "1")])]), SkipReason::Unregistered),
            (table("programs", vec![row(&[("name", "x")])]), SkipReason::Excluded),
        ];
        for (input, reason) in cases {
            let outcome = build_category(input, &schema(), &order(), &rules).unwrap();
            assert_eq!(outcome, CategoryOutcome::Skipped(reason));
        }
    }

    #[test]
    fn assigns_ordinals_and_trims_codes() {
        let rows = vec![
            row(&[("atom", "CA"), ("icode", " A ")]),
            row(&[("atom", "CB"), ("icode", " ")]),
        ];
        let category = built(
            build_category(table("clash", rows), &schema(), &order(), &CategoryRules::default())
                .unwrap(),
        );

        assert_eq!(category.name, "pdbx_vrpt_clash");
        assert_eq!(
            category.column_names(),
            vec!["ordinal", "label_atom_id", "PDB_ins_code"]
        );
        assert_eq!(category.value("ordinal", 0), Some("1"));
        assert_eq!(category.value("ordinal", 1), Some("2"));
        assert_eq!(category.value("PDB_ins_code", 0), Some("A"));
        assert_eq!(category.value("PDB_ins_code", 1), Some(""));
    }

    #[test]
    fn no_ordinal_without_registration() {
        let category = built(
            build_category(
                table("Entry", vec![row(&[("pdbid", "1abc")])]),
                &schema(),
                &order(),
                &CategoryRules::default(),
            )
            .unwrap(),
        );
        assert_eq!(category.column_names(), vec!["entry_id"]);
        assert_eq!(category.name, "Entry");
    }

    #[test]
    fn unranked_attribute_is_an_error() {
        let rows = vec![row(&[("atom", "CA"), ("mystery", "1")])];
        let err = build_category(table("clash", rows), &schema(), &order(), &CategoryRules::default())
            .unwrap_err();
        match err {
            ConvertError::MissingAttributeRank { category, attribute } => {
                assert_eq!(category, "clash");
                assert_eq!(attribute, "mystery");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn equal_ranks_fall_back_to_name() {
        let order: AttributeOrder = [("b", 1), ("a", 1), ("c", 0)].into_iter().collect();
        let rows = vec![row(&[("a", "1"), ("b", "2"), ("c", "3")])];
        assert_eq!(ordered_columns("t", &rows, &order).unwrap(), vec!["c", "a", "b"]);
    }

    #[test]
    fn renaming_reads_source_names_only_once() {
        // "atom" maps to "dist" and "dist" maps to "atom"; a second pass would swap back.
        let mut schema = SchemaMap::new();
        schema.insert_attribute("clash", "atom", "dist");
        schema.insert_attribute("clash", "dist", "atom");
        let rows = vec![row(&[("atom", "CA"), ("dist", "2.1")])];
        let category = built(
            build_category(table("clash", rows), &schema, &order(), &CategoryRules::default())
                .unwrap(),
        );
        assert_eq!(category.column_names(), vec!["dist", "atom"]);
        assert_eq!(category.value("dist", 0), Some("CA"));
        assert_eq!(category.value("atom", 0), Some("2.1"));
    }
}
