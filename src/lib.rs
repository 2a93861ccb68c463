//! PVAT - Polygon Viewport Annotation Tool
//!
//! The editing core of a polygon annotation tool for images and video frames
//! shown in a 3D viewport. [`PolygonManager`] turns pointer and keyboard events
//! into polygons on the z = 0 working plane, draws them through a
//! [`scene::SceneSurface`] and exchanges them as annotation records.

pub mod config;
pub mod constants;
pub mod format;
pub mod input;
pub mod keybindings;
pub mod manager;
pub mod model;
pub mod session;

pub use pvat_scene as scene;

pub use config::{AppConfig, EditorConfig};
pub use input::{PointerButton, PointerEvent};
pub use keybindings::{KeyBindings, KeyCode};
pub use manager::{
    DragGesture, DrawingSession, EditError, EditorCommand, FinishOutcome, HandleOwner,
    ImportSummary, PolygonManager,
};
pub use model::{Category, Point3, Polygon, PolygonId};
