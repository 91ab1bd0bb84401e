pub mod error;
pub mod outline;
pub mod parser;

pub use error::{IngestError, Result};
pub use outline::{DEFAULT_OUTLINE_DEPTH, OutlineEntry, outline};
pub use parser::{
    DocumentParser, XmlDocumentParser, is_gzip_path, parse_file, parse_reader, parse_str,
};
