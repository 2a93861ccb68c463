//! Annotation record shapes exchanged with hosts and files.
//!
//! ```json
//! { "annotations": [ { "id": 1, "shape": "polygon", "category_id": 205340,
//!                      "location": [ { "x": 0.0, "y": 0.0, "z": 0.0 }, ... ] } ] }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::Point3;

/// Shape tag of polygon records. Other tags are valid input but not edited here.
pub const SHAPE_POLYGON: &str = "polygon";

/// A complete annotation document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDocument {
    pub annotations: Vec<AnnotationRecord>,
}

impl AnnotationDocument {
    pub fn new(annotations: Vec<AnnotationRecord>) -> Self {
        Self { annotations }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Records tagged as polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &AnnotationRecord> {
        self.annotations.iter().filter(|record| record.is_polygon())
    }
}

/// A single annotation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Sequential id, assigned at export time.
    ///
    /// Ignored on import: any JSON value is accepted, and anything that is not
    /// a non-negative integer reads as 0.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    /// Shape tag, e.g. `"polygon"`.
    pub shape: String,
    /// Category this annotation belongs to.
    pub category_id: u32,
    /// Ordered vertex list. A missing `z` reads as 0.
    pub location: Vec<Point3>,
}

impl AnnotationRecord {
    /// Create a polygon record.
    pub fn polygon(id: u64, category_id: u32, location: Vec<Point3>) -> Self {
        Self {
            id,
            shape: SHAPE_POLYGON.to_string(),
            category_id,
            location,
        }
    }

    pub fn is_polygon(&self) -> bool {
        self.shape == SHAPE_POLYGON
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_u64).unwrap_or(0))
}
