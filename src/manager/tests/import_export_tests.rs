//! Tests for loading and exporting annotation records.

use pvat_scene::LineShape;

use super::*;
use crate::format::{self, AnnotationRecord, WarningSeverity};

fn sample_records() -> Vec<AnnotationRecord> {
    vec![
        polygon_record(205341, &[(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 3.0, 0.0)]),
        polygon_record(
            205343,
            &[(5.0, 5.0, 0.0), (8.0, 5.0, 0.25), (8.0, 8.0, 0.0), (5.0, 8.0, 0.0)],
        ),
        polygon_record(205340, &[(-1.5, -1.5, 0.0), (-4.0, -2.0, 0.0), (-3.0, -6.0, 0.0)]),
    ]
}

#[test]
fn test_export_after_load_reproduces_records() {
    let mut manager = manager();
    let records = sample_records();

    let summary = manager.load_from_annotations(&records);
    assert_eq!(summary.loaded, 3);
    assert!(summary.warnings.is_empty());

    let exported = manager.get_annotations();
    assert_eq!(exported.len(), records.len());
    for (index, (out, original)) in exported.annotations.iter().zip(&records).enumerate() {
        assert_eq!(out.id, index as u64 + 1);
        assert!(out.is_polygon());
        assert_eq!(out.category_id, original.category_id);
        assert_eq!(out.location, original.location);
    }
}

#[test]
fn test_loaded_polygons_are_closed_and_unselected() {
    let mut manager = manager();
    manager.load_from_annotations(&sample_records());

    assert!(!manager.is_drawing());
    assert_eq!(manager.selected(), None);
    for polygon in manager.polygons() {
        assert!(polygon.is_closed());
        assert_eq!(line(&manager, polygon.id()).unwrap().shape, LineShape::ClosedLoop);
        assert!(handle_visibility(&manager, polygon.id()).iter().all(|v| !v));
    }
    assert_eq!(manager.surface().len(), 3 + 4 + 3 + 3);
    assert_consistent(&manager);
}

#[test]
fn test_load_replaces_existing_state() {
    let mut manager = manager();
    draw(&mut manager, &TRIANGLE, true);
    draw(&mut manager, &SQUARE, false);
    manager
        .pointer_down(&event_at(0.0, 0.0), &top_down_camera())
        .unwrap();

    manager.load_from_annotations(&sample_records()[..1]);

    assert_eq!(manager.polygon_count(), 1);
    assert!(!manager.is_drawing());
    assert_eq!(manager.selected(), None);
    assert!(manager.gesture().is_none());
    assert_eq!(manager.surface().len(), 4);
    assert_consistent(&manager);

    // Ids keep counting after a reload.
    let next = manager.start().unwrap();
    assert_eq!(next, PolygonId(4));
}

#[test]
fn test_load_empty_clears_everything() {
    let mut manager = manager();
    manager.load_from_annotations(&sample_records());

    let summary = manager.load_from_annotations(&[]);
    assert_eq!(summary.loaded, 0);
    assert_eq!(manager.polygon_count(), 0);
    assert!(manager.surface().is_empty());
    assert_eq!(manager.surface().summary().removed, manager.surface().summary().added);
}

#[test]
fn test_other_shapes_are_ignored() {
    let mut manager = manager();
    let mut records = sample_records();
    records.insert(
        1,
        AnnotationRecord {
            id: 7,
            shape: "bbox".to_string(),
            category_id: 205340,
            location: vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)],
        },
    );

    let summary = manager.load_from_annotations(&records);
    assert_eq!(summary.loaded, 3);
    assert_eq!(summary.ignored, 1);
    assert!(summary.warnings.is_empty());
    assert_eq!(manager.get_annotations().len(), 3);
}

#[test]
fn test_short_polygon_records_are_skipped() {
    let mut manager = manager();
    let mut records = sample_records();
    records.insert(0, polygon_record(205340, &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]));

    let summary = manager.load_from_annotations(&records);

    assert_eq!(summary.loaded, 3);
    assert_eq!(summary.warnings.len(), 1);
    assert_eq!(summary.warnings[0].record_index, Some(0));
    assert_eq!(summary.warnings[0].severity, WarningSeverity::Warning);
    assert!(manager.polygons().all(|polygon| polygon.len() >= 3));
    assert_consistent(&manager);
}

#[test]
fn test_export_skips_open_polygon() {
    let mut manager = manager();
    draw(&mut manager, &TRIANGLE, true);
    draw(&mut manager, &SQUARE, false);

    let exported = manager.get_annotations();
    assert_eq!(exported.len(), 1);
    assert_eq!(exported.annotations[0].location.len(), 3);
}

#[test]
fn test_export_ids_are_sequential() {
    let mut manager = manager();
    manager.load_from_annotations(&sample_records());
    let second = manager.polygons().nth(1).unwrap().id();
    manager.select(second);
    manager.delete_selected();

    let exported = manager.get_annotations();
    let ids: Vec<u64> = exported.annotations.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(exported.annotations[1].category_id, 205340);
}

#[test]
fn test_drawn_polygon_exports_resolved_points() {
    let mut manager = manager();
    draw(&mut manager, &TRIANGLE, true);

    let exported = manager.get_annotations();
    let record = &exported.annotations[0];
    assert_eq!(record.category_id, 205340);
    for (point, (x, y)) in record.location.iter().zip(TRIANGLE) {
        assert_close(*point, x, y);
    }
}

#[test]
fn test_load_document_from_json() {
    let json = r#"{
        "annotations": [
            { "id": 1, "shape": "polygon", "category_id": 205342,
              "location": [ {"x": 0, "y": 0}, {"x": 2, "y": 0}, {"x": 2, "y": 2} ] },
            { "id": 2, "shape": "polygon", "category_id": 205342 },
            { "id": 3, "shape": "polygon", "category_id": 205342,
              "location": [ {"x": 0, "y": 0} ] },
            { "id": 4, "shape": "point", "category_id": 205342,
              "location": [ {"x": 5, "y": 5} ] }
        ]
    }"#;
    let decoded = format::decode_document(json).unwrap();

    let mut manager = manager();
    let summary = manager.load_document(&decoded);

    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.ignored, 1);
    let indices: Vec<Option<usize>> = summary.warnings.iter().map(|w| w.record_index).collect();
    assert_eq!(indices, vec![Some(1), Some(2)]);

    // Missing z reads as 0.
    let polygon = manager.polygons().next().unwrap();
    assert!(polygon.points().iter().all(|point| point.z == 0.0));

    let encoded = format::encode_document(&manager.get_annotations()).unwrap();
    let reparsed = format::decode_document(&encoded).unwrap();
    assert_eq!(reparsed.document.annotations[0].location, polygon.points());
}

#[test]
fn test_record_ids_do_not_affect_loading() {
    let json = r#"{
        "annotations": [
            { "id": -1, "shape": "polygon", "category_id": 205340,
              "location": [ {"x": 0, "y": 0}, {"x": 2, "y": 0}, {"x": 2, "y": 2} ] },
            { "id": "a7", "shape": "polygon", "category_id": 205341,
              "location": [ {"x": 1, "y": 1}, {"x": 3, "y": 1}, {"x": 3, "y": 3} ] }
        ]
    }"#;
    let decoded = format::decode_document(json).unwrap();

    let mut manager = manager();
    let summary = manager.load_document(&decoded);
    assert_eq!(summary.loaded, 2);
    assert!(summary.warnings.is_empty());

    let ids: Vec<u64> = manager.get_annotations().annotations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_file_level_roundtrip_keeps_authored_coordinates() {
    let json = r#"{
        "annotations": [
            { "id": 1, "shape": "polygon", "category_id": 205340,
              "location": [ {"x": 1234.56789, "y": 0.123456789},
                            {"x": -98.7654321, "y": 17.0000001, "z": 0.00012345},
                            {"x": 3.14159265358979, "y": 2.71828182845904} ] }
        ]
    }"#;
    let decoded = format::decode_document(json).unwrap();

    let mut manager = manager();
    manager.load_document(&decoded);
    let encoded = format::encode_document(&manager.get_annotations()).unwrap();
    let reparsed = format::decode_document(&encoded).unwrap();

    assert_eq!(reparsed.document, decoded.document);
    let first = reparsed.document.annotations[0].location[0];
    assert_eq!(first.x, 1234.56789);
    assert_eq!(first.y, 0.123456789);
    assert!(encoded.contains("1234.56789"));
}
