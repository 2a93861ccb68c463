//! The drawing surface contract consumed by the editor.

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::primitive::{Drawable, PrimitiveId};
use crate::ray::{Plane, Ray};

/// A scene the editor can draw into and cast rays against.
///
/// Every primitive returned by [`SceneSurface::add_primitive`] stays alive
/// until it is passed to [`SceneSurface::remove_primitive`]. The editor is the
/// only writer.
pub trait SceneSurface {
    /// Add a primitive and return the id it is known by from now on.
    fn add_primitive(&mut self, drawable: Drawable) -> PrimitiveId;

    /// Remove a primitive, returning it if it was still alive.
    fn remove_primitive(&mut self, id: PrimitiveId) -> Option<Drawable>;

    /// Mutable access to a live primitive for in-place restyling.
    fn primitive_mut(&mut self, id: PrimitiveId) -> Option<&mut Drawable>;

    /// Cast a ray from `camera` through a point in normalized device coordinates.
    fn cast_ray(&self, ndc: Vec2, camera: &Camera) -> Ray {
        camera.ray_through(ndc)
    }

    /// Intersect a ray with a plane.
    fn intersect_plane(&self, ray: &Ray, plane: &Plane) -> Option<Vec3> {
        ray.intersect_plane(plane)
    }
}
