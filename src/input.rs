//! Pointer input delivered by the host.

use pvat_scene::{Vec2, Viewport};
use serde::{Deserialize, Serialize};

/// Mouse button or touch contact that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Left mouse button, primary touch or pen contact
    #[default]
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Map a DOM-style button index (0 = primary, 1 = middle, 2 = secondary).
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// A pointer event in client pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
    pub button: PointerButton,
    /// Bounding rectangle of the element the scene is drawn into.
    pub viewport: Viewport,
}

impl PointerEvent {
    /// A primary-button event.
    pub fn new(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            client_x,
            client_y,
            button: PointerButton::Primary,
            viewport,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Normalized device coordinates of the event, or `None` for a degenerate viewport.
    pub fn ndc(&self) -> Option<Vec2> {
        self.viewport.to_ndc(self.client_x, self.client_y)
    }
}
