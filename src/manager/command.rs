//! Keyboard-level editor commands.

use pvat_scene::SceneSurface;
use serde::{Deserialize, Serialize};

use super::PolygonManager;

/// An editor action that does not need a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorCommand {
    StartPolygon,
    FinishPolygon,
    DeleteSelected,
    NextCategory,
    PreviousCategory,
    ToggleFlatten,
    ClearSelection,
}

impl EditorCommand {
    /// Get all commands, in binding lookup order.
    pub fn all() -> &'static [EditorCommand] {
        &[
            EditorCommand::StartPolygon,
            EditorCommand::FinishPolygon,
            EditorCommand::DeleteSelected,
            EditorCommand::NextCategory,
            EditorCommand::PreviousCategory,
            EditorCommand::ToggleFlatten,
            EditorCommand::ClearSelection,
        ]
    }

    /// Get the display name for this command.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::StartPolygon => "Start polygon",
            EditorCommand::FinishPolygon => "Finish polygon",
            EditorCommand::DeleteSelected => "Delete selected",
            EditorCommand::NextCategory => "Next category",
            EditorCommand::PreviousCategory => "Previous category",
            EditorCommand::ToggleFlatten => "Toggle flatten",
            EditorCommand::ClearSelection => "Clear selection",
        }
    }
}

impl<S: SceneSurface> PolygonManager<S> {
    /// Apply a command. Returns `true` if it changed anything.
    pub fn apply_command(&mut self, command: EditorCommand) -> bool {
        log::debug!("Command: {}", command.name());
        match command {
            EditorCommand::StartPolygon => self.start().is_ok(),
            EditorCommand::FinishPolygon => self.finish().is_some(),
            EditorCommand::DeleteSelected => self.delete_selected().is_some(),
            EditorCommand::NextCategory => self.cycle_category(1).is_some(),
            EditorCommand::PreviousCategory => self.cycle_category(-1).is_some(),
            EditorCommand::ToggleFlatten => {
                self.set_flatten(!self.flatten);
                true
            }
            EditorCommand::ClearSelection => {
                let had_selection = self.selected.is_some();
                if had_selection {
                    self.clear_selection();
                }
                had_selection
            }
        }
    }
}
