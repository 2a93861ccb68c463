//! Annotation record import/export.
//!
//! Documents have a single shape:
//!
//! ```json
//! { "annotations": [ { "id": 1, "shape": "polygon", "category_id": 205340,
//!                      "location": [ { "x": 0.0, "y": 0.0, "z": 0.0 } ] } ] }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pvat::format;
//!
//! let decoded = format::read_document(path)?;
//! let summary = manager.load_from_annotations(&decoded.document.annotations);
//! format::write_document(out_path, &manager.get_annotations())?;
//! ```

mod error;
mod json;
mod record;
mod warning;

pub use error::FormatError;
pub use json::{
    DecodedDocument, decode_document, decode_value, encode_document, read_document,
    write_document,
};
pub use record::{AnnotationDocument, AnnotationRecord, SHAPE_POLYGON};
pub use warning::{FormatWarning, WarningSeverity};
