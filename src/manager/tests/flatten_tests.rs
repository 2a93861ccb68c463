//! Tests for flatten mode.

use super::*;

fn raised_polygon(manager: &mut PolygonManager<RetainedScene>) -> PolygonId {
    manager.load_from_annotations(&[polygon_record(
        1,
        &[(0.0, 0.0, 2.0), (2.0, 0.0, 0.5), (0.0, 2.0, 0.0)],
    )]);
    manager.polygons().next().unwrap().id()
}

#[test]
fn test_handles_show_stored_z_without_flatten() {
    let mut manager = manager();
    let id = raised_polygon(&mut manager);

    assert_eq!(handle(&manager, id, 0).position.z, 2.0);
    assert_eq!(handle(&manager, id, 1).position.z, 0.5);
    // On-plane vertices are lifted to the handle layer.
    assert_eq!(handle(&manager, id, 2).position.z, 0.1);

    let strip = line(&manager, id).unwrap();
    assert_eq!(strip.points[0].z, 2.0);
    assert_eq!(strip.points[2].z, 0.0);
}

#[test]
fn test_flatten_pins_handles_and_projects_line() {
    let mut manager = manager();
    let id = raised_polygon(&mut manager);

    manager.set_flatten(true);
    assert!(manager.is_flatten());

    for vertex in 0..3 {
        assert_eq!(handle(&manager, id, vertex).position.z, 0.1);
    }
    let strip = line(&manager, id).unwrap();
    assert!(strip.points.iter().all(|point| point.z == 0.0));
    assert_consistent(&manager);
}

#[test]
fn test_flatten_never_touches_stored_points() {
    let mut manager = manager();
    let id = raised_polygon(&mut manager);
    let stored = manager.polygon(id).unwrap().points().to_vec();

    manager.set_flatten(true);
    assert_eq!(manager.polygon(id).unwrap().points(), stored.as_slice());
    assert_eq!(manager.get_annotations().annotations[0].location, stored);

    manager.set_flatten(false);
    assert_eq!(manager.polygon(id).unwrap().points(), stored.as_slice());
    assert_eq!(handle(&manager, id, 0).position.z, 2.0);
    assert_eq!(line(&manager, id).unwrap().points[0].z, 2.0);
}

#[test]
fn test_flatten_applies_to_new_handles() {
    let mut manager = manager();
    manager.set_flatten(true);
    let id = draw(&mut manager, &TRIANGLE, false);

    for vertex in 0..3 {
        assert_eq!(handle(&manager, id, vertex).position.z, 0.1);
    }
}

#[test]
fn test_flatten_keeps_visibility_and_selection() {
    let mut manager = manager();
    let a = draw(&mut manager, &TRIANGLE, true);
    let b = draw(&mut manager, &SQUARE, true);

    manager.set_flatten(true);

    assert_eq!(manager.selected(), Some(b));
    assert_eq!(handle_visibility(&manager, a), vec![false; 3]);
    assert_eq!(handle_visibility(&manager, b), vec![true; 4]);
    assert_eq!(line(&manager, b).unwrap().width, 3.0);
}

#[test]
fn test_flatten_picking_uses_displayed_handles() {
    let mut manager = manager();
    let id = raised_polygon(&mut manager);
    manager.set_flatten(true);

    let gesture = manager
        .pointer_down(&event_at(2.0, 0.0), &top_down_camera())
        .unwrap();
    assert_eq!(gesture.polygon, id);
    assert_eq!(gesture.vertex, 1);
}
