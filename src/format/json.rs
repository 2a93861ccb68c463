//! JSON encoding of annotation documents.
//!
//! Decoding is lenient at the record level: each entry of the `annotations`
//! array is decoded on its own, and an entry that does not fit the record
//! shape is skipped with a [`FormatWarning`] instead of failing the whole
//! document. Only a broken document structure is an error.

use std::path::Path;

use serde_json::Value;

use super::error::FormatError;
use super::record::{AnnotationDocument, AnnotationRecord, SHAPE_POLYGON};
use super::warning::{FormatWarning, WarningSeverity};

/// A decoded document together with the warnings produced while decoding it.
#[derive(Debug, Clone, Default)]
pub struct DecodedDocument {
    pub document: AnnotationDocument,
    pub warnings: Vec<FormatWarning>,
    /// Position of each decoded record in the source `annotations` array.
    pub source_positions: Vec<usize>,
}

impl DecodedDocument {
    /// Map an index into `document.annotations` back to the source array.
    pub fn source_position(&self, index: usize) -> usize {
        self.source_positions.get(index).copied().unwrap_or(index)
    }
}

/// Decode a document from a JSON string.
pub fn decode_document(json: &str) -> Result<DecodedDocument, FormatError> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(value)
}

/// Decode a document from an already parsed JSON value.
pub fn decode_value(value: Value) -> Result<DecodedDocument, FormatError> {
    let mut root = match value {
        Value::Object(root) => root,
        other => {
            return Err(FormatError::invalid_format(format!(
                "expected an object at the top level, found {}",
                value_kind(&other)
            )));
        }
    };

    let entries = match root.remove("annotations") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(FormatError::invalid_format(format!(
                "`annotations` must be an array, found {}",
                value_kind(&other)
            )));
        }
        None => return Err(FormatError::missing_field("annotations")),
    };

    let mut decoded = DecodedDocument::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let shape = entry
            .get("shape")
            .and_then(Value::as_str)
            .map(str::to_owned);

        match serde_json::from_value::<AnnotationRecord>(entry) {
            Ok(record) => {
                decoded.document.annotations.push(record);
                decoded.source_positions.push(index);
            }
            Err(e) => {
                let warning = match shape.as_deref() {
                    Some(shape) if shape != SHAPE_POLYGON => FormatWarning::info(format!(
                        "ignored '{}' record that does not fit the record shape: {}",
                        shape, e
                    )),
                    _ => FormatWarning::warning(format!("skipped malformed record: {}", e)),
                }
                .with_record(index);

                match warning.severity {
                    WarningSeverity::Info => log::info!("{}", warning),
                    WarningSeverity::Warning => log::warn!("{}", warning),
                }
                decoded.warnings.push(warning);
            }
        }
    }

    log::debug!(
        "Decoded {} records ({} skipped)",
        decoded.document.len(),
        decoded.warnings.len()
    );
    Ok(decoded)
}

/// Encode a document as pretty-printed JSON.
pub fn encode_document(document: &AnnotationDocument) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Read and decode a document from a file.
pub fn read_document(path: &Path) -> Result<DecodedDocument, FormatError> {
    log::info!("Importing annotations from {:?}", path);

    let json = std::fs::read_to_string(path)?;
    let decoded = decode_document(&json)?;

    log::info!(
        "Imported {} records from {:?} ({} warnings)",
        decoded.document.len(),
        path,
        decoded.warnings.len()
    );
    Ok(decoded)
}

/// Encode and write a document to a file, returning the number of records written.
pub fn write_document(path: &Path, document: &AnnotationDocument) -> Result<usize, FormatError> {
    log::info!("Exporting annotations to {:?}", path);

    let json = encode_document(document)?;
    std::fs::write(path, json)?;

    log::info!("Exported {} records", document.len());
    Ok(document.len())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
