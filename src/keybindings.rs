//! Customizable keybindings for PVAT.
//!
//! Maps host key presses to [`EditorCommand`]s. Keybindings are part of the
//! configuration file, so they serialize as plain key names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::manager::EditorCommand;

/// Keys the editor can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    Enter,
    Escape,
    Tab,
    Delete,
    Backspace,
    Space,
}

/// Keybinding configuration for the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Begin drawing a new polygon
    pub start_polygon: KeyCode,
    /// Close (or discard) the polygon being drawn
    pub finish_polygon: KeyCode,
    /// Delete the selected polygon
    pub delete_selected: KeyCode,
    /// Move the selected polygon to the next category
    pub next_category: KeyCode,
    /// Move the selected polygon to the previous category
    pub previous_category: KeyCode,
    /// Toggle flatten mode
    pub toggle_flatten: KeyCode,
    /// Deselect
    pub clear_selection: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            start_polygon: KeyCode::N,
            finish_polygon: KeyCode::Enter,
            delete_selected: KeyCode::Delete,
            next_category: KeyCode::Tab,
            previous_category: KeyCode::Q,
            toggle_flatten: KeyCode::F,
            clear_selection: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the command that corresponds to a key press, if any.
    ///
    /// When a key is bound twice, the first command in [`EditorCommand::all`] wins.
    pub fn command_for_key(&self, key: KeyCode) -> Option<EditorCommand> {
        EditorCommand::all()
            .iter()
            .copied()
            .find(|command| self.key_for_command(*command) == key)
    }

    /// Get the hotkey for a specific command.
    pub fn key_for_command(&self, command: EditorCommand) -> KeyCode {
        match command {
            EditorCommand::StartPolygon => self.start_polygon,
            EditorCommand::FinishPolygon => self.finish_polygon,
            EditorCommand::DeleteSelected => self.delete_selected,
            EditorCommand::NextCategory => self.next_category,
            EditorCommand::PreviousCategory => self.previous_category,
            EditorCommand::ToggleFlatten => self.toggle_flatten,
            EditorCommand::ClearSelection => self.clear_selection,
        }
    }

    /// Set the hotkey for a command.
    pub fn set_key(&mut self, command: EditorCommand, key: KeyCode) {
        match command {
            EditorCommand::StartPolygon => self.start_polygon = key,
            EditorCommand::FinishPolygon => self.finish_polygon = key,
            EditorCommand::DeleteSelected => self.delete_selected = key,
            EditorCommand::NextCategory => self.next_category = key,
            EditorCommand::PreviousCategory => self.previous_category = key,
            EditorCommand::ToggleFlatten => self.toggle_flatten = key,
            EditorCommand::ClearSelection => self.clear_selection = key,
        }
    }

    /// Check if a key is already used by any binding.
    /// Returns the command it is bound to, ignoring `exclude`.
    pub fn key_conflict(
        &self,
        key: KeyCode,
        exclude: Option<EditorCommand>,
    ) -> Option<EditorCommand> {
        EditorCommand::all()
            .iter()
            .copied()
            .filter(|command| Some(*command) != exclude)
            .find(|command| self.key_for_command(*command) == key)
    }
}

/// Convert a KeyCode to a display string.
pub fn key_to_string(key: KeyCode) -> &'static str {
    match key {
        KeyCode::A => "A",
        KeyCode::B => "B",
        KeyCode::C => "C",
        KeyCode::D => "D",
        KeyCode::E => "E",
        KeyCode::F => "F",
        KeyCode::G => "G",
        KeyCode::H => "H",
        KeyCode::I => "I",
        KeyCode::J => "J",
        KeyCode::K => "K",
        KeyCode::L => "L",
        KeyCode::M => "M",
        KeyCode::N => "N",
        KeyCode::O => "O",
        KeyCode::P => "P",
        KeyCode::Q => "Q",
        KeyCode::R => "R",
        KeyCode::S => "S",
        KeyCode::T => "T",
        KeyCode::U => "U",
        KeyCode::V => "V",
        KeyCode::W => "W",
        KeyCode::X => "X",
        KeyCode::Y => "Y",
        KeyCode::Z => "Z",
        KeyCode::Key0 => "0",
        KeyCode::Key1 => "1",
        KeyCode::Key2 => "2",
        KeyCode::Key3 => "3",
        KeyCode::Key4 => "4",
        KeyCode::Key5 => "5",
        KeyCode::Key6 => "6",
        KeyCode::Key7 => "7",
        KeyCode::Key8 => "8",
        KeyCode::Key9 => "9",
        KeyCode::Enter => "Enter",
        KeyCode::Escape => "Esc",
        KeyCode::Tab => "Tab",
        KeyCode::Delete => "Del",
        KeyCode::Backspace => "Backspace",
        KeyCode::Space => "Space",
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(key_to_string(*self))
    }
}
