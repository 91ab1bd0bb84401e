//! Decoding of the comma-separated property tokens on program rows.

use tracing::debug;

use vrpt_model::{DataContainer, PropertyDecode, SchemaMap};

use crate::error::Result;
use crate::rules::ProvenanceRules;

/// Rewrite every property value of the provenance category in place.
///
/// The category is found by its source element, so a disambiguated name does
/// not hide it; the column by the canonical name of the configured source
/// column. Returns the number of rows rewritten; zero when either is absent.
pub fn resolve_provenance(
    container: &mut DataContainer,
    schema: &SchemaMap,
    decode: &PropertyDecode,
    rules: &ProvenanceRules,
) -> Result<usize> {
    let column_name = schema.attribute_name(&rules.category, &rules.column);

    let Some(category) = container.get_by_source_mut(&rules.category) else {
        debug!(source = %rules.category, "no provenance category");
        return Ok(0);
    };
    let category_name = category.name.clone();
    if !category.has_column(column_name) {
        debug!(category = %category_name, column = %column_name, "no provenance column");
        return Ok(0);
    }

    let mut rewritten = 0;
    for row in 0..category.row_count() {
        let Some(value) = category.value(column_name, row) else {
            continue;
        };
        let decoded = decode_properties(value, decode, rules.separator);
        category.set_value(column_name, row, decoded)?;
        rewritten += 1;
    }
    debug!(category = %category_name, rows = rewritten, "decoded provenance properties");
    Ok(rewritten)
}

/// Split on `separator`, trim, decode each token and rejoin.
pub fn decode_properties(value: &str, decode: &PropertyDecode, separator: char) -> String {
    let mut out = String::with_capacity(value.len());
    for (index, token) in value.split(separator).enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(decode.decode(token.trim()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrpt_model::{Category, Row};

    fn decode_table() -> PropertyDecode {
        [("cs", "clashscore"), ("rama", "ramachandran")]
            .into_iter()
            .collect()
    }

    fn program(values: &[Option<&str>]) -> Category {
        let rows = values
            .iter()
            .map(|value| {
                let mut row = Row::new();
                row.insert("name".to_string(), "molprobity".to_string());
                if let Some(value) = value {
                    row.insert("properties".to_string(), (*value).to_string());
                }
                row
            })
            .collect();
        Category::new(
            "program",
            vec!["name".to_string(), "properties".to_string()],
            rows,
        )
    }

    #[test]
    fn decodes_trimmed_tokens() {
        assert_eq!(
            decode_properties("cs, rama ,other", &decode_table(), ','),
            "clashscore,ramachandran,other"
        );
    }

    #[test]
    fn empty_value_stays_empty() {
        assert_eq!(decode_properties("", &decode_table(), ','), "");
    }

    #[test]
    fn rewrites_rows_with_values_only() {
        let mut container = DataContainer::default();
        container.push(program(&[Some("cs, rama"), None, Some("")]));

        let rewritten = resolve_provenance(
            &mut container,
            &SchemaMap::new(),
            &decode_table(),
            &ProvenanceRules::default(),
        )
        .unwrap();

        assert_eq!(rewritten, 2);
        let category = container.get("program").unwrap();
        assert_eq!(category.value("properties", 0), Some("clashscore,ramachandran"));
        assert_eq!(category.value("properties", 1), None);
        assert_eq!(category.value("properties", 2), Some(""));
    }

    #[test]
    fn follows_canonical_names() {
        let mut schema = SchemaMap::new();
        schema.insert_category("program", "pdbx_vrpt_software");
        schema.insert_attribute("program", "properties", "details");

        let mut category = program(&[Some("cs")]);
        category.set_name("pdbx_vrpt_software");
        category.columns[1].name = "details".to_string();
        let mut container = DataContainer::default();
        container.push(category);

        let rules = ProvenanceRules::default();
        assert_eq!(
            resolve_provenance(&mut container, &schema, &decode_table(), &rules).unwrap(),
            1
        );
        assert_eq!(
            container.get("pdbx_vrpt_software").unwrap().value("details", 0),
            Some("clashscore")
        );
    }

    #[test]
    fn found_by_source_after_disambiguation() {
        let mut schema = SchemaMap::new();
        schema.insert_category("program", "pdbx_vrpt_software");
        schema.insert_category("tool", "pdbx_vrpt_software");

        let mut tool = Category::new("tool", vec!["properties".to_string()], vec![{
            let mut row = Row::new();
            row.insert("properties".to_string(), "cs".to_string());
            row
        }]);
        tool.set_name("pdbx_vrpt_software");
        let mut category = program(&[Some("cs, rama")]);
        category.set_name("pdbx_vrpt_software_2");
        let mut container = DataContainer::default();
        container.push(tool);
        container.push(category);

        let rewritten = resolve_provenance(
            &mut container,
            &schema,
            &decode_table(),
            &ProvenanceRules::default(),
        )
        .unwrap();

        assert_eq!(rewritten, 1);
        assert_eq!(
            container
                .get("pdbx_vrpt_software_2")
                .unwrap()
                .value("properties", 0),
            Some("clashscore,ramachandran")
        );
        assert_eq!(
            container
                .get("pdbx_vrpt_software")
                .unwrap()
                .value("properties", 0),
            Some("cs")
        );
    }

    #[test]
    fn absent_category_is_a_no_op() {
        let mut container = DataContainer::default();
        let rewritten = resolve_provenance(
            &mut container,
            &SchemaMap::new(),
            &decode_table(),
            &ProvenanceRules::default(),
        )
        .unwrap();
        assert_eq!(rewritten, 0);
        assert!(container.is_empty());
    }
}
