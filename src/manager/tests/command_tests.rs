//! Tests for keyboard-level commands.

use super::*;
use crate::keybindings::{KeyBindings, KeyCode};
use crate::manager::EditorCommand;
use crate::model::default_categories;

#[test]
fn test_command_sequence_draws_and_edits() {
    let mut manager = manager();
    let camera = top_down_camera();

    assert!(manager.apply_command(EditorCommand::StartPolygon));
    assert!(!manager.apply_command(EditorCommand::StartPolygon));
    for (x, y) in TRIANGLE {
        manager.add_point(&event_at(x, y), &camera);
    }
    assert!(manager.apply_command(EditorCommand::FinishPolygon));
    assert!(!manager.apply_command(EditorCommand::FinishPolygon));

    assert!(manager.apply_command(EditorCommand::PreviousCategory));
    let id = manager.selected().unwrap();
    assert_eq!(
        manager.polygon(id).unwrap().category_id(),
        default_categories()[3].id
    );
    assert!(manager.apply_command(EditorCommand::NextCategory));
    assert_eq!(
        manager.polygon(id).unwrap().category_id(),
        default_categories()[0].id
    );

    assert!(manager.apply_command(EditorCommand::ToggleFlatten));
    assert!(manager.is_flatten());
    assert!(manager.apply_command(EditorCommand::ToggleFlatten));
    assert!(!manager.is_flatten());

    assert!(manager.apply_command(EditorCommand::ClearSelection));
    assert!(!manager.apply_command(EditorCommand::ClearSelection));
    assert!(!manager.apply_command(EditorCommand::DeleteSelected));
    assert!(!manager.apply_command(EditorCommand::NextCategory));

    manager.select(id);
    assert!(manager.apply_command(EditorCommand::DeleteSelected));
    assert_eq!(manager.polygon_count(), 0);
    assert!(manager.surface().is_empty());
}

#[test]
fn test_key_presses_map_through_bindings() {
    let mut manager = manager();
    let bindings = KeyBindings::default();

    let command = bindings.command_for_key(KeyCode::N).unwrap();
    assert!(manager.apply_command(command));
    assert!(manager.is_drawing());

    let command = bindings.command_for_key(KeyCode::Escape).unwrap();
    assert!(manager.apply_command(command));
    assert_eq!(manager.selected(), None);
    // Deselecting does not end the drawing session.
    assert!(manager.is_drawing());
}
