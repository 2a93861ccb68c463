//! Scenario tests for the polygon editor.
//!
//! Every scenario runs against a [`RetainedScene`] seen through a top-down
//! orthographic camera: a 200x200 pixel viewport shows the world window
//! `[-10, 10] x [-10, 10]`, so one world unit is 10 pixels.

mod command_tests;
mod flatten_tests;
mod import_export_tests;

use pvat_scene::{Camera, Drawable, HandleMarker, LineStrip, RetainedScene, Vec3, Viewport};

use super::PolygonManager;
use crate::format::AnnotationRecord;
use crate::input::PointerEvent;
use crate::model::{Point3, PolygonId};

pub(super) const EPSILON: f32 = 1e-3;

pub(super) fn viewport() -> Viewport {
    Viewport::from_size(200.0, 200.0).unwrap()
}

pub(super) fn top_down_camera() -> Camera {
    Camera::orthographic(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::ZERO,
        Vec3::Y,
        20.0,
        20.0,
        0.1,
        100.0,
    )
    .unwrap()
}

/// A camera looking along +x, so rays through the upper half of the
/// viewport run parallel to the working plane above it.
pub(super) fn side_camera() -> Camera {
    Camera::orthographic(
        Vec3::new(-10.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::Z,
        20.0,
        20.0,
        0.1,
        100.0,
    )
    .unwrap()
}

/// A pointer event over world position `(x, y)` under [`top_down_camera`].
pub(super) fn event_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new((x + 10.0) * 10.0, (10.0 - y) * 10.0, viewport())
}

/// A pointer event whose ray misses the plane under [`side_camera`].
pub(super) fn parallel_event() -> PointerEvent {
    PointerEvent::new(100.0, 50.0, viewport())
}

pub(super) fn manager() -> PolygonManager<RetainedScene> {
    PolygonManager::new(RetainedScene::new())
}

/// Draw a polygon through `points`, finishing it if `finish` is set.
pub(super) fn draw(
    manager: &mut PolygonManager<RetainedScene>,
    points: &[(f32, f32)],
    finish: bool,
) -> PolygonId {
    let camera = top_down_camera();
    let id = manager.start().unwrap();
    for (x, y) in points {
        assert!(manager.add_point(&event_at(*x, *y), &camera).is_some());
    }
    if finish {
        manager.finish();
    }
    id
}

pub(super) const TRIANGLE: [(f32, f32); 3] = [(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
pub(super) const SQUARE: [(f32, f32); 4] = [(5.0, 5.0), (8.0, 5.0), (8.0, 8.0), (5.0, 8.0)];

pub(super) fn polygon_record(category_id: u32, points: &[(f64, f64, f64)]) -> AnnotationRecord {
    AnnotationRecord::polygon(
        0,
        category_id,
        points
            .iter()
            .map(|(x, y, z)| Point3::new(*x, *y, *z))
            .collect(),
    )
}

pub(super) fn handle(manager: &PolygonManager<RetainedScene>, id: PolygonId, vertex: usize) -> &HandleMarker {
    let handle = manager.polygon(id).unwrap().handles()[vertex];
    manager
        .surface()
        .get(handle)
        .and_then(Drawable::as_handle)
        .unwrap()
}

pub(super) fn line(manager: &PolygonManager<RetainedScene>, id: PolygonId) -> Option<&LineStrip> {
    let line = manager.polygon(id)?.line()?;
    manager.surface().get(line).and_then(Drawable::as_line)
}

/// Visibility of every handle of a polygon.
pub(super) fn handle_visibility(manager: &PolygonManager<RetainedScene>, id: PolygonId) -> Vec<bool> {
    let polygon = manager.polygon(id).unwrap();
    (0..polygon.len())
        .map(|vertex| handle(manager, id, vertex).visible)
        .collect()
}

pub(super) fn assert_close(point: Point3, x: f32, y: f32) {
    assert!(
        (point.x - f64::from(x)).abs() < f64::from(EPSILON)
            && (point.y - f64::from(y)).abs() < f64::from(EPSILON),
        "expected ({}, {}), got {:?}",
        x,
        y,
        point
    );
}

/// Check the structural invariants that must hold after every operation.
pub(super) fn assert_consistent(manager: &PolygonManager<RetainedScene>) {
    let mut owned = 0;
    for polygon in manager.polygons() {
        assert_eq!(
            polygon.points().len(),
            polygon.handles().len(),
            "points and handles out of sync on {}",
            polygon.id()
        );
        if polygon.is_closed() {
            assert!(polygon.len() >= 3, "closed polygon {} has {} vertices", polygon.id(), polygon.len());
        }
        assert_eq!(polygon.line().is_some(), polygon.len() >= 2);

        for (vertex, handle) in polygon.handles().iter().enumerate() {
            assert!(manager.surface().contains(*handle));
            let owner = manager.handle_owner(*handle).unwrap();
            assert_eq!(owner.polygon, polygon.id());
            assert_eq!(owner.vertex, vertex);
        }
        if let Some(line) = polygon.line() {
            assert!(manager.surface().contains(line));
        }
        owned += polygon.primitives().count();
    }

    assert_eq!(manager.surface().len(), owned, "scene holds primitives no polygon owns");
    assert_eq!(manager.handle_owners.len(), manager.surface().summary().handles);

    if let Some(current) = manager.current() {
        assert!(manager.polygon(current).is_some());
    }
    if let Some(selected) = manager.selected() {
        assert!(manager.polygon(selected).is_some());
    }
}
