//! Scripted editing sessions.
//!
//! A session script is a recorded sequence of host events replayed against a
//! [`PolygonManager`]. The command-line front end uses it to drive the editor
//! without a window, and it doubles as a compact way to describe editing
//! scenarios.
//!
//! ```json
//! { "viewport": { "width": 1280, "height": 720 },
//!   "steps": [ { "op": "command", "command": "start_polygon" },
//!              { "op": "click", "x": 640, "y": 360 },
//!              { "op": "key", "key": "Enter" } ] }
//! ```

use std::path::Path;

use pvat_scene::{Camera, SceneSurface, Viewport};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::format::FormatError;
use crate::input::{PointerButton, PointerEvent};
use crate::keybindings::{KeyBindings, KeyCode};
use crate::manager::{EditorCommand, PolygonManager};

/// A recorded sequence of host events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    /// Bounding rectangle pointer coordinates are relative to
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    pub steps: Vec<SessionStep>,
}

fn default_viewport() -> Viewport {
    Viewport {
        left: 0.0,
        top: 0.0,
        width: DEFAULT_VIEWPORT_WIDTH,
        height: DEFAULT_VIEWPORT_HEIGHT,
    }
}

/// One host event. Pointer positions are client pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionStep {
    /// Hit-test handles and start a drag
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
    },
    /// Continue the active drag
    PointerMove { x: f32, y: f32 },
    /// End the active drag
    PointerUp,
    /// Place a vertex while drawing, otherwise hit-test without dragging
    Click {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
    },
    /// A key press, looked up in the keybindings
    Key { key: KeyCode },
    /// An editor command
    Command { command: EditorCommand },
    /// Set flatten mode
    Flatten { enabled: bool },
}

impl SessionScript {
    pub fn new(viewport: Viewport, steps: Vec<SessionStep>) -> Self {
        Self { viewport, steps }
    }

    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a script from a file.
    pub fn load(path: &Path) -> Result<Self, FormatError> {
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded session script with {} steps from {:?}", script.steps.len(), path);
        Ok(script)
    }
}

/// What a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Steps processed
    pub steps: usize,
    /// Vertices placed
    pub points_added: usize,
    /// Drags started
    pub drags: usize,
    /// Commands that changed the editor
    pub commands_applied: usize,
    /// Steps that had no effect
    pub no_ops: usize,
}

/// Replay a script against a manager.
pub fn replay<S: SceneSurface>(
    manager: &mut PolygonManager<S>,
    script: &SessionScript,
    camera: &Camera,
    bindings: &KeyBindings,
) -> ReplayReport {
    let mut report = ReplayReport::default();
    let event_at = |x: f32, y: f32, button: PointerButton| {
        PointerEvent::new(x, y, script.viewport).with_button(button)
    };

    for (index, step) in script.steps.iter().enumerate() {
        report.steps += 1;
        let effective = match step {
            SessionStep::PointerDown { x, y, button } => {
                let started = manager.pointer_down(&event_at(*x, *y, *button), camera);
                if started.is_some() {
                    report.drags += 1;
                }
                started.is_some()
            }
            SessionStep::PointerMove { x, y } => manager
                .on_drag(&event_at(*x, *y, PointerButton::Primary), camera)
                .is_some(),
            SessionStep::PointerUp => manager.on_drag_end().is_some(),
            SessionStep::Click { x, y, button } => {
                let event = event_at(*x, *y, *button);
                if manager.is_drawing() {
                    let placed = manager.add_point(&event, camera);
                    if placed.is_some() {
                        report.points_added += 1;
                    }
                    placed.is_some()
                } else {
                    let hit = manager.pointer_down(&event, camera);
                    manager.on_drag_end();
                    hit.is_some()
                }
            }
            SessionStep::Key { key } => match bindings.command_for_key(*key) {
                Some(command) => apply(manager, command, &mut report),
                None => {
                    log::debug!("Step {}: key {} is not bound", index, key);
                    false
                }
            },
            SessionStep::Command { command } => apply(manager, *command, &mut report),
            SessionStep::Flatten { enabled } => {
                manager.set_flatten(*enabled);
                true
            }
        };

        if !effective {
            log::debug!("Step {} ({:?}) had no effect", index, step);
            report.no_ops += 1;
        }
    }

    log::info!(
        "Replayed {} steps: {} vertices placed, {} drags, {} commands, {} no-ops",
        report.steps,
        report.points_added,
        report.drags,
        report.commands_applied,
        report.no_ops
    );
    report
}

fn apply<S: SceneSurface>(
    manager: &mut PolygonManager<S>,
    command: EditorCommand,
    report: &mut ReplayReport,
) -> bool {
    let applied = manager.apply_command(command);
    if applied {
        report.commands_applied += 1;
    }
    applied
}
