//! Structural rules for the validation report layout.
//!
//! The defaults describe the wwPDB validation report; every field can be
//! overridden through [`crate::ValidationReportReader::with_rules`].

/// Element kind whose residue-identifying attributes are copied onto children.
pub const CARDINAL_ELEMENT: &str = "ModelledSubgroup";

/// Residue-identifying attributes carried from a cardinal element.
pub const CARDINAL_ATTRIBUTES: [&str; 8] = [
    "altcode", "chain", "ent", "model", "resname", "resnum", "said", "seq",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenRules {
    pub cardinal_element: String,
    pub cardinal_attributes: Vec<String>,
}

impl Default for FlattenRules {
    fn default() -> Self {
        Self {
            cardinal_element: CARDINAL_ELEMENT.to_string(),
            cardinal_attributes: CARDINAL_ATTRIBUTES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl FlattenRules {
    pub fn is_cardinal(&self, tag: &str) -> bool {
        self.cardinal_element == tag
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    /// Grouping elements that never become categories of their own.
    pub excluded: Vec<String>,
    /// Synthesized 1-based row number column.
    pub ordinal_column: String,
    /// Columns whose values are whitespace-trimmed.
    pub trimmed_columns: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            excluded: vec!["programs".to_string()],
            ordinal_column: "ordinal".to_string(),
            trimmed_columns: vec!["icode".to_string(), "altcode".to_string()],
        }
    }
}

impl CategoryRules {
    pub fn is_excluded(&self, tag: &str) -> bool {
        self.excluded.iter().any(|excluded| excluded == tag)
    }
}

/// Where the encoded program properties live, by source names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceRules {
    pub category: String,
    pub column: String,
    pub separator: char,
}

impl Default for ProvenanceRules {
    fn default() -> Self {
        Self {
            category: "program".to_string(),
            column: "properties".to_string(),
            separator: ',',
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRules {
    pub flatten: FlattenRules,
    pub category: CategoryRules,
    pub provenance: ProvenanceRules,
}
