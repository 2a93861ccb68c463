//! Polygon annotation model.

use std::fmt;

use pvat_scene::PrimitiveId;

use super::point::Point3;
use crate::constants::MIN_POLYGON_VERTICES;

/// Manager-assigned polygon identifier. Never reused within one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub u64);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A polygon being drawn or already closed.
///
/// `points[i]` and `handles[i]` describe the same vertex: the stored position
/// and the marker drawn for it. The two are separate copies kept in sync by
/// the manager.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub(crate) id: PolygonId,
    pub(crate) points: Vec<Point3>,
    pub(crate) handles: Vec<PrimitiveId>,
    pub(crate) line: Option<PrimitiveId>,
    pub(crate) closed: bool,
    pub(crate) category_id: u32,
}

impl Polygon {
    /// An empty, open polygon.
    pub(crate) fn new(id: PolygonId, category_id: u32) -> Self {
        Self {
            id,
            points: Vec::new(),
            handles: Vec::new(),
            line: None,
            closed: false,
            category_id,
        }
    }

    pub fn id(&self) -> PolygonId {
        self.id
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn handles(&self) -> &[PrimitiveId] {
        &self.handles
    }

    pub fn line(&self) -> Option<PrimitiveId> {
        self.line
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn category_id(&self) -> u32 {
        self.category_id
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polygon has enough vertices to be closed.
    pub fn can_close(&self) -> bool {
        self.points.len() >= MIN_POLYGON_VERTICES
    }

    /// Every primitive this polygon owns on the surface.
    pub(crate) fn primitives(&self) -> impl Iterator<Item = PrimitiveId> + '_ {
        self.handles.iter().copied().chain(self.line)
    }
}
