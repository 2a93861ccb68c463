//! Scene surface contract for the PVAT polygon editor.
//!
//! The editor core never talks to a renderer directly. It adds, restyles and
//! removes [`Drawable`] primitives through the [`SceneSurface`] trait and asks
//! the surface to turn a pointer position into a world-space [`Ray`].
//!
//! [`RetainedScene`] is an in-memory surface that keeps every live primitive
//! in insertion order. Hosts can render from it directly, and tests use it to
//! check that no primitive outlives the polygon that created it.

pub mod camera;
pub mod error;
pub mod primitive;
pub mod ray;
pub mod retained;
pub mod surface;
pub mod viewport;

pub use camera::Camera;
pub use error::{Result, SceneError};
pub use primitive::{
    Drawable, HANDLE_RENDER_ORDER, HandleMarker, LINE_RENDER_ORDER, LineShape, LineStrip,
    PrimitiveId,
};
pub use ray::{Plane, Ray};
pub use retained::{RetainedScene, SceneSummary};
pub use surface::SceneSurface;
pub use viewport::Viewport;

pub use glam::{Vec2, Vec3};
