//! Drawable primitives the editor places on a scene surface.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Render order for vertex handles, drawn above lines.
pub const HANDLE_RENDER_ORDER: i32 = 3000;

/// Render order for polygon outlines.
pub const LINE_RENDER_ORDER: i32 = 2900;

/// Opaque identifier for a primitive living on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u64);

/// A draggable vertex marker.
///
/// `radius` is a world-space size the host keeps constant on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleMarker {
    pub position: Vec3,
    pub color: [u8; 3],
    pub radius: f32,
    pub opacity: f32,
    pub render_order: i32,
    pub depth_test: bool,
    pub visible: bool,
}

impl HandleMarker {
    /// Create a visible handle with the default render order.
    pub fn new(position: Vec3, color: [u8; 3], radius: f32) -> Self {
        Self {
            position,
            color,
            radius,
            opacity: 0.8,
            render_order: HANDLE_RENDER_ORDER,
            depth_test: false,
            visible: true,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Whether a line strip is left open or joins its last point back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineShape {
    OpenPath,
    ClosedLoop,
}

impl LineShape {
    pub fn from_closed(closed: bool) -> Self {
        if closed {
            LineShape::ClosedLoop
        } else {
            LineShape::OpenPath
        }
    }

    /// Number of segments drawn for `point_count` points.
    pub fn segment_count(&self, point_count: usize) -> usize {
        match (self, point_count) {
            (_, 0 | 1) => 0,
            (LineShape::OpenPath, n) => n - 1,
            (LineShape::ClosedLoop, n) => n,
        }
    }
}

/// A polyline connecting polygon vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStrip {
    pub points: Vec<Vec3>,
    pub shape: LineShape,
    pub color: [u8; 3],
    pub width: f32,
    pub render_order: i32,
    pub depth_test: bool,
}

impl LineStrip {
    pub fn new(points: Vec<Vec3>, shape: LineShape, color: [u8; 3], width: f32) -> Self {
        Self {
            points,
            shape,
            color,
            width,
            render_order: LINE_RENDER_ORDER,
            depth_test: false,
        }
    }

    /// Segment endpoints in draw order, including the closing segment of a loop.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let count = self.shape.segment_count(self.points.len());
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % self.points.len()]))
    }
}

/// Anything the editor can place on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Handle(HandleMarker),
    Line(LineStrip),
}

impl Drawable {
    pub fn as_handle(&self) -> Option<&HandleMarker> {
        match self {
            Drawable::Handle(handle) => Some(handle),
            Drawable::Line(_) => None,
        }
    }

    pub fn as_handle_mut(&mut self) -> Option<&mut HandleMarker> {
        match self {
            Drawable::Handle(handle) => Some(handle),
            Drawable::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineStrip> {
        match self {
            Drawable::Line(line) => Some(line),
            Drawable::Handle(_) => None,
        }
    }

    pub fn render_order(&self) -> i32 {
        match self {
            Drawable::Handle(handle) => handle.render_order,
            Drawable::Line(line) => line.render_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_segment_counts() {
        assert_eq!(LineShape::OpenPath.segment_count(4), 3);
        assert_eq!(LineShape::ClosedLoop.segment_count(4), 4);
        assert_eq!(LineShape::ClosedLoop.segment_count(1), 0);
        assert_eq!(LineShape::OpenPath.segment_count(0), 0);
    }

    #[test]
    fn test_closed_loop_returns_to_start() {
        let line = LineStrip::new(square(), LineShape::ClosedLoop, [255, 0, 0], 1.0);
        let segments: Vec<_> = line.segments().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[3], (Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO));
    }

    #[test]
    fn test_open_path_has_no_closing_segment() {
        let line = LineStrip::new(square(), LineShape::OpenPath, [255, 0, 0], 1.0);
        let last = line.segments().last().unwrap();
        assert_eq!(last.1, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_render_order_puts_handles_above_lines() {
        let handle = Drawable::Handle(HandleMarker::new(Vec3::ZERO, [0, 0, 0], 0.2));
        let line = Drawable::Line(LineStrip::new(square(), LineShape::OpenPath, [0, 0, 0], 1.0));
        assert!(handle.render_order() > line.render_order());
    }
}
