pub mod category;
pub mod container;
pub mod error;
pub mod node;
pub mod schema;
pub mod table;

pub use category::{Category, Column};
pub use container::{DEFAULT_CONTAINER_NAME, DataContainer};
pub use error::{ModelError, Result};
pub use node::{Attributes, Document, ElementNode};
pub use schema::{AttributeOrder, PropertyDecode, SchemaMap};
pub use table::{CategoryTable, FlattenedReport, Row};
