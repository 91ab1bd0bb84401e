//! Validation report conversion pipeline.
//!
//! [`ValidationReportReader`] drives the stages:
//! [`flatten`] turns the element tree into per-tag row tables,
//! [`category`] orders and renames each table,
//! [`assembly`] collects the results into a container and
//! [`provenance`] decodes the program property tokens.

pub mod assembly;
pub mod category;
pub mod error;
pub mod flatten;
pub mod provenance;
pub mod reader;
pub mod rules;

pub use assembly::assemble_container;
pub use category::{
    CategoryOutcome, SkipReason, apply_canonical_names, build_category, ordered_columns,
};
pub use error::{ConvertError, Result};
pub use flatten::flatten_document;
pub use provenance::{decode_properties, resolve_provenance};
pub use reader::ValidationReportReader;
pub use rules::{
    CARDINAL_ATTRIBUTES, CARDINAL_ELEMENT, CategoryRules, ConversionRules, FlattenRules,
    ProvenanceRules,
};
