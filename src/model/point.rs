//! Vertex positions.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A vertex position in world space.
///
/// `z` is normally 0; small non-zero values only serve draw-order layering.
///
/// Coordinates are kept in double precision so imported values are exported
/// unchanged. The scene works in `f32`, see the [`Vec3`] conversions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The same point projected onto z = 0.
    pub fn flattened(&self) -> Point3 {
        Point3::new(self.x, self.y, 0.0)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y), f64::from(v.z))
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x as f32, p.y as f32, p.z as f32)
    }
}
