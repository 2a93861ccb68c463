//! Global constants for the PVAT editor

/// Minimum number of vertices for a polygon to be closed.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// World-space radius of a vertex handle.
pub const DEFAULT_HANDLE_RADIUS: f32 = 0.2;

/// Extra slack added to the handle radius when picking, so thin markers stay easy to grab.
pub const DEFAULT_PICK_THRESHOLD: f32 = 0.15;

/// Display z for handles in flatten mode, and for handles whose stored z is 0.
pub const HANDLE_LAYER_Z: f32 = 0.1;

/// Handle opacity.
pub const HANDLE_OPACITY: f32 = 0.8;

/// Outline width of unselected polygons.
pub const LINE_WIDTH: f32 = 1.0;

/// Outline width of the selected polygon.
pub const SELECTED_LINE_WIDTH: f32 = 3.0;

/// Color used when a polygon references a category that is not in the list.
pub const FALLBACK_COLOR: [u8; 3] = [0xff, 0x00, 0x00];

/// Default viewport size used by session replay when a script does not set one
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;

/// Default viewport height
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;
