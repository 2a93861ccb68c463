//! Data models for the PVAT editor.

mod category;
mod point;
mod polygon;

pub use category::{Category, default_categories, pack_rgb24, unpack_rgb24};
pub use point::Point3;
pub use polygon::{Polygon, PolygonId};
