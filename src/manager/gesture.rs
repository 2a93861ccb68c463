//! Pointer handling: point placement, handle picking and dragging.
//!
//! Placement and dragging share [`PolygonManager::resolve_world_point`], so a
//! dragged vertex lands exactly where a new vertex would have been placed for
//! the same pointer position.

use pvat_scene::{Camera, Drawable, Plane, PrimitiveId, Ray, SceneSurface};

use super::PolygonManager;
use crate::input::PointerEvent;
use crate::model::{Point3, PolygonId};

/// An active handle drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub polygon: PolygonId,
    pub vertex: usize,
    pub handle: PrimitiveId,
}

impl<S: SceneSurface> PolygonManager<S> {
    /// Resolve a pointer position to a point on the z = 0 working plane.
    ///
    /// Returns `None` for a degenerate viewport, or when the pointer ray runs
    /// parallel to the plane or points away from it.
    pub fn resolve_world_point(&self, event: &PointerEvent, camera: &Camera) -> Option<Point3> {
        let ndc = event.ndc()?;
        let ray = self.surface.cast_ray(ndc, camera);
        let hit = self.surface.intersect_plane(&ray, &Plane::GROUND);
        log::trace!(
            "pointer ({}, {}) -> ndc {:?} -> {:?}",
            event.client_x,
            event.client_y,
            ndc,
            hit
        );
        hit.map(Point3::from)
    }

    /// Append a vertex to the polygon being drawn.
    ///
    /// Ignored when not drawing, for non-primary buttons, and when the pointer
    /// does not resolve to a point on the plane.
    pub fn add_point(&mut self, event: &PointerEvent, camera: &Camera) -> Option<Point3> {
        let current = self.current()?;
        if !event.button.is_primary() {
            log::trace!("Ignoring {:?} button for point placement", event.button);
            return None;
        }
        let point = self.resolve_world_point(event, camera)?;

        let vertex = {
            let polygon = self.polygons.get_mut(&current)?;
            polygon.points.push(point);
            polygon.points.len() - 1
        };
        match self.create_handle(current, vertex) {
            Some(handle) => {
                if let Some(polygon) = self.polygons.get_mut(&current) {
                    polygon.handles.push(handle);
                }
            }
            None => {
                // Keep points and handles the same length.
                if let Some(polygon) = self.polygons.get_mut(&current) {
                    polygon.points.pop();
                }
                return None;
            }
        }
        self.redraw(current);

        log::debug!(
            "Polygon {}: vertex {} at ({:.3}, {:.3}, {:.3})",
            current,
            vertex,
            point.x,
            point.y,
            point.z
        );
        Some(point)
    }

    /// Hit-test every handle of every polygon and start dragging the nearest.
    ///
    /// Hidden handles take part too. The hit selects the owning polygon. A
    /// miss leaves the selection untouched and returns `None`.
    pub fn pointer_down(&mut self, event: &PointerEvent, camera: &Camera) -> Option<DragGesture> {
        let ndc = event.ndc()?;
        let ray = self.surface.cast_ray(ndc, camera);
        let handle = self.pick_handle(&ray)?;
        self.grab_handle(handle)
    }

    /// Nearest handle along the ray, ties going to the earliest polygon and vertex.
    fn pick_handle(&self, ray: &Ray) -> Option<PrimitiveId> {
        let radius = self.settings.handle_radius + self.settings.pick_threshold;
        let mut nearest: Option<(f32, PrimitiveId)> = None;

        for polygon in self.polygons.values() {
            for (point, handle) in polygon.points.iter().zip(&polygon.handles) {
                let center = self.handle_position(*point);
                let Some(distance) = ray.intersect_sphere(center, radius) else {
                    continue;
                };
                if nearest.is_none_or(|(best, _)| distance < best) {
                    nearest = Some((distance, *handle));
                }
            }
        }
        nearest.map(|(_, handle)| handle)
    }

    /// Start dragging a handle primitive, selecting its polygon.
    ///
    /// An active gesture is ended first. Returns `None` if the primitive is
    /// not a handle owned by this manager.
    pub fn grab_handle(&mut self, handle: PrimitiveId) -> Option<DragGesture> {
        let owner = self.handle_owner(handle)?;

        if let Some(previous) = self.gesture.take() {
            log::warn!(
                "Starting new drag while previous drag on {} vertex {} still active - forcing end",
                previous.polygon,
                previous.vertex
            );
        }

        self.select(owner.polygon);
        let gesture = DragGesture {
            polygon: owner.polygon,
            vertex: owner.vertex,
            handle,
        };
        self.gesture = Some(gesture);
        log::debug!("Dragging {} vertex {}", owner.polygon, owner.vertex);
        Some(gesture)
    }

    /// Move the dragged vertex to the pointer position.
    ///
    /// If the pointer does not resolve to a point, nothing changes.
    pub fn on_drag(&mut self, event: &PointerEvent, camera: &Camera) -> Option<Point3> {
        let gesture = self.gesture?;
        let point = self.resolve_world_point(event, camera)?;
        let position = self.handle_position(point);

        let slot = self
            .polygons
            .get_mut(&gesture.polygon)?
            .points
            .get_mut(gesture.vertex)?;
        *slot = point;

        if let Some(marker) = self
            .surface
            .primitive_mut(gesture.handle)
            .and_then(Drawable::as_handle_mut)
        {
            marker.position = position;
        }
        self.redraw(gesture.polygon);
        Some(point)
    }

    /// End the active drag, if any. Calling it again has no effect.
    pub fn on_drag_end(&mut self) -> Option<DragGesture> {
        let ended = self.gesture.take();
        if let Some(gesture) = ended {
            log::debug!("Drag on {} vertex {} ended", gesture.polygon, gesture.vertex);
        }
        ended
    }
}
