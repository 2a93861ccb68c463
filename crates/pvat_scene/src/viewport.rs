//! Viewport rectangle and pixel → normalized device coordinate mapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Bounding rectangle of the drawing surface in client (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting rectangles without a positive finite area.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self> {
        let viewport = Self {
            left,
            top,
            width,
            height,
        };
        if !viewport.has_area() {
            return Err(SceneError::DegenerateViewport { width, height });
        }
        Ok(viewport)
    }

    /// Create a viewport anchored at the client origin.
    pub fn from_size(width: f32, height: f32) -> Result<Self> {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width divided by height, used as the camera aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Convert a client-space pointer position to normalized device coordinates.
    ///
    /// Both axes map onto `[-1, 1]` across the rectangle. Y is inverted since
    /// pixel rows grow downward while device Y grows upward. Returns `None`
    /// for a rectangle without area.
    pub fn to_ndc(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
        if !self.has_area() {
            return None;
        }
        let x = ((client_x - self.left) / self.width) * 2.0 - 1.0;
        let y = -((client_y - self.top) / self.height) * 2.0 + 1.0;
        Some(Vec2::new(x, y))
    }

    /// Inverse of [`Viewport::to_ndc`].
    pub fn to_client(&self, ndc: Vec2) -> (f32, f32) {
        let x = self.left + (ndc.x + 1.0) * 0.5 * self.width;
        let y = self.top + (1.0 - ndc.y) * 0.5 * self.height;
        (x, y)
    }
}
