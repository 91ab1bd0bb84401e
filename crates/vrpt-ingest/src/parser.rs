//! XML report parsing into a generic element tree.
//!
//! Inputs whose path ends in `.gz` are decompressed on the fly. Tag and
//! attribute names keep only their local part; namespace declarations are
//! dropped. Attribute values are whitespace-normalized as XML 1.0 requires
//! and element text is trimmed once the element closes.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use flate2::read::GzDecoder;
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::debug;

use vrpt_model::{Document, ElementNode};

use crate::error::{IngestError, Result};

/// Source of parsed report trees.
pub trait DocumentParser: Send + Sync {
    /// Parse the document stored at `path`.
    fn parse(&self, path: &Path) -> Result<Document>;
}

/// Default parser backed by `quick-xml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDocumentParser;

impl DocumentParser for XmlDocumentParser {
    fn parse(&self, path: &Path) -> Result<Document> {
        parse_file(path)
    }
}

/// Returns true when the path carries the literal `.gz` suffix.
pub fn is_gzip_path(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(".gz")
}

/// Parse a plain or gzip-compressed XML file.
pub fn parse_file(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let gzip = is_gzip_path(path);
    debug!(path = %path.display(), gzip, "parsing report");
    let start = Instant::now();
    let document = if gzip {
        parse_reader(BufReader::new(GzDecoder::new(file)), path)?
    } else {
        parse_reader(BufReader::new(file), path)?
    };
    debug!(
        path = %path.display(),
        top_level = document.top_level().len(),
        duration_ms = start.elapsed().as_millis(),
        "parsed report"
    );
    Ok(document)
}

/// Parse XML held in memory. `source` labels the document in errors.
pub fn parse_str(text: &str, source: &str) -> Result<Document> {
    parse_reader(text.as_bytes(), Path::new(source))
}

/// Parse XML from any buffered reader.
pub fn parse_reader<R: BufRead>(input: R, path: &Path) -> Result<Document> {
    let mut reader = Reader::from_reader(input);

    let mut buf = Vec::new();
    let mut stack: Vec<ElementNode> = Vec::new();
    let mut root: Option<ElementNode> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                let node = element_from(&start, reader.decoder(), path)?;
                stack.push(node);
            }
            Ok(Event::Empty(start)) => {
                let node = element_from(&start, reader.decoder(), path)?;
                attach(&mut stack, &mut root, node, path)?;
            }
            Ok(Event::End(_)) => {
                if let Some(mut node) = stack.pop() {
                    finish_text(&mut node);
                    attach(&mut stack, &mut root, node, path)?;
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(current) = stack.last_mut() {
                    append_text(current, &String::from_utf8_lossy(&text));
                }
            }
            Ok(Event::GeneralRef(reference)) => {
                if let Some(current) = stack.last_mut() {
                    let resolved = resolve_reference(&reference, path)?;
                    append_text(current, &resolved);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = stack.last_mut() {
                    append_text(current, &String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(quick_xml::Error::Io(source)) => {
                return Err(IngestError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(error) => {
                return Err(IngestError::Xml {
                    path: path.to_path_buf(),
                    message: format!("{error} (at byte {})", reader.buffer_position()),
                });
            }
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(IngestError::UnclosedElement {
            path: path.to_path_buf(),
            tag: open.tag.clone(),
        });
    }
    let root = root.ok_or_else(|| IngestError::EmptyDocument {
        path: path.to_path_buf(),
    })?;
    Ok(Document::new(root, path.display().to_string()))
}

fn element_from(start: &BytesStart<'_>, decoder: Decoder, path: &Path) -> Result<ElementNode> {
    let mut node = ElementNode::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|error| xml_error(path, error))?;
        let key = attribute.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let name = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let raw = decoder
            .decode(&attribute.value)
            .map_err(|error| xml_error(path, error))?;
        let normalized = normalize_attribute_whitespace(&raw);
        let value = unescape(&normalized).map_err(|error| xml_error(path, error))?;
        node.attributes.insert(name, value.into_owned());
    }
    Ok(node)
}

fn attach(
    stack: &mut [ElementNode],
    root: &mut Option<ElementNode>,
    node: ElementNode,
    path: &Path,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(IngestError::Xml {
            path: path.to_path_buf(),
            message: format!("second root element <{}>", node.tag),
        });
    }
    *root = Some(node);
    Ok(())
}

/// Literal tab, newline and carriage return become a space; `\r\n` counts
/// once. Runs on the raw value so character references like `&#10;` survive.
fn normalize_attribute_whitespace(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\n', '\r']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", " ").replace(['\t', '\n', '\r'], " "))
}

fn resolve_reference(reference: &BytesRef<'_>, path: &Path) -> Result<String> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|error| xml_error(path, error))?
    {
        return Ok(ch.to_string());
    }
    let name = reference.decode().map_err(|error| xml_error(path, error))?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| xml_error(path, format!("unknown entity &{name};")))
}

fn append_text(node: &mut ElementNode, text: &str) {
    match &mut node.text {
        Some(existing) => existing.push_str(text),
        // leading whitespace is trimmed at close anyway
        None if text.trim().is_empty() => {}
        None => node.text = Some(text.to_string()),
    }
}

fn finish_text(node: &mut ElementNode) {
    node.text = node
        .text
        .take()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
}

fn xml_error(path: &Path, error: impl std::fmt::Display) -> IngestError {
    IngestError::Xml {
        path: PathBuf::from(path),
        message: error.to_string(),
    }
}
