//! Errors returned by editor operations that the caller must act on.

use thiserror::Error;

use crate::model::PolygonId;

/// Rejected editor operations.
///
/// Most editing operations silently ignore unmet preconditions. These are the
/// cases where doing nothing would hide a caller bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// `start` was called while another polygon is being drawn
    #[error("Polygon {current} is still being drawn")]
    AlreadyDrawing { current: PolygonId },

    /// The category list must contain at least one entry
    #[error("Category list must not be empty")]
    EmptyCategoryList,
}
