//! The polygon annotation editor.
//!
//! [`PolygonManager`] owns every polygon, the drawing session, the selection
//! and the active drag gesture. It draws through a [`SceneSurface`] and keeps
//! exactly one primitive on the surface per handle plus at most one line per
//! polygon; removing a polygon always removes its primitives.
//!
//! ## Drawing session
//!
//! ```text
//! Idle --start--> Drawing --finish--> Closed (>= 3 vertices) --> Idle
//!                                 \-> Discarded (< 3 vertices) --> Idle
//! ```
//!
//! ## Handle visibility
//!
//! A polygon's handles are visible iff it is the polygon being drawn, or it
//! is selected. Visibility is recomputed after every change to either.

mod command;
mod error;
mod gesture;
mod io;
mod render;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use indexmap::IndexMap;
use pvat_scene::{PrimitiveId, SceneSurface};

pub use command::EditorCommand;
pub use error::EditError;
pub use gesture::DragGesture;
pub use io::ImportSummary;

use crate::config::{AppConfig, EditorConfig};
use crate::model::{Category, Polygon, PolygonId, default_categories};

/// State of the drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingSession {
    #[default]
    Idle,
    /// `current` is receiving points.
    Drawing { current: PolygonId },
}

impl DrawingSession {
    pub fn current(&self) -> Option<PolygonId> {
        match self {
            DrawingSession::Idle => None,
            DrawingSession::Drawing { current } => Some(*current),
        }
    }
}

/// How a drawing session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The polygon had enough vertices and is now closed.
    Closed(PolygonId),
    /// The polygon had fewer than three vertices and was removed.
    Discarded(PolygonId),
}

/// Which polygon vertex a handle primitive draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleOwner {
    pub polygon: PolygonId,
    pub vertex: usize,
}

/// Polygon annotation editor drawing into a scene surface `S`.
pub struct PolygonManager<S: SceneSurface> {
    surface: S,
    settings: EditorConfig,
    /// Never empty.
    categories: Vec<Category>,
    polygons: IndexMap<PolygonId, Polygon>,
    /// Back-references from handle primitives to their vertex.
    handle_owners: HashMap<PrimitiveId, HandleOwner>,
    session: DrawingSession,
    selected: Option<PolygonId>,
    gesture: Option<DragGesture>,
    flatten: bool,
    next_polygon_id: u64,
}

impl<S: SceneSurface> PolygonManager<S> {
    /// Create a manager with default settings and the default category list.
    pub fn new(surface: S) -> Self {
        Self::with_settings(surface, EditorConfig::default())
    }

    pub fn with_settings(surface: S, settings: EditorConfig) -> Self {
        Self {
            surface,
            settings,
            categories: default_categories(),
            polygons: IndexMap::new(),
            handle_owners: HashMap::new(),
            session: DrawingSession::Idle,
            selected: None,
            gesture: None,
            flatten: false,
            next_polygon_id: 1,
        }
    }

    /// Create a manager from an application configuration.
    ///
    /// An empty category list in the configuration falls back to the defaults.
    pub fn from_config(surface: S, config: &AppConfig) -> Self {
        let mut manager = Self::with_settings(surface, config.editor.clone());
        if config.categories.is_empty() {
            log::warn!("Configuration has no categories, using the default list");
        } else {
            manager.categories = config.categories.clone();
        }
        manager.flatten = config.preferences.flatten;
        manager
    }

    // --- accessors ---

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to clear a host-side dirty flag.
    ///
    /// Primitives created by the manager must not be removed through this.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &EditorConfig {
        &self.settings
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Polygons in creation order.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.values()
    }

    pub fn polygon(&self, id: PolygonId) -> Option<&Polygon> {
        self.polygons.get(&id)
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn session(&self) -> DrawingSession {
        self.session
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.session, DrawingSession::Drawing { .. })
    }

    /// The polygon being drawn.
    pub fn current(&self) -> Option<PolygonId> {
        self.session.current()
    }

    pub fn selected(&self) -> Option<PolygonId> {
        self.selected
    }

    pub fn gesture(&self) -> Option<DragGesture> {
        self.gesture
    }

    pub fn is_flatten(&self) -> bool {
        self.flatten
    }

    /// The vertex a handle primitive belongs to.
    pub fn handle_owner(&self, handle: PrimitiveId) -> Option<HandleOwner> {
        self.handle_owners.get(&handle).copied()
    }

    /// Whether the handles of `id` should currently be shown.
    pub fn handles_visible(&self, id: PolygonId) -> bool {
        self.current() == Some(id) || self.selected == Some(id)
    }

    // --- drawing session ---

    /// Begin drawing a new polygon.
    ///
    /// The polygon takes the first category, becomes both current and
    /// selected, and is appended after every existing polygon.
    pub fn start(&mut self) -> Result<PolygonId, EditError> {
        if let DrawingSession::Drawing { current } = self.session {
            log::warn!("Cannot start a polygon while {} is being drawn", current);
            return Err(EditError::AlreadyDrawing { current });
        }

        let id = self.allocate_id();
        let category_id = self.default_category_id();
        self.polygons.insert(id, Polygon::new(id, category_id));
        self.session = DrawingSession::Drawing { current: id };
        self.selected = Some(id);
        self.selection_changed();

        log::debug!("Started polygon {} (category {})", id, category_id);
        Ok(id)
    }

    /// End the drawing session.
    ///
    /// A polygon with at least three vertices is closed; anything smaller is
    /// discarded with its primitives. Returns `None` when nothing is being drawn.
    pub fn finish(&mut self) -> Option<FinishOutcome> {
        let current = self.session.current()?;
        self.session = DrawingSession::Idle;

        let can_close = self.polygons.get(&current).is_some_and(Polygon::can_close);
        let outcome = if can_close {
            if let Some(polygon) = self.polygons.get_mut(&current) {
                polygon.closed = true;
            }
            self.redraw(current);
            log::info!(
                "Closed polygon {} with {} vertices",
                current,
                self.polygons.get(&current).map_or(0, Polygon::len)
            );
            FinishOutcome::Closed(current)
        } else {
            self.remove_polygon(current);
            log::info!("Discarded polygon {}: fewer than 3 vertices", current);
            FinishOutcome::Discarded(current)
        };

        self.refresh_visibility();
        Some(outcome)
    }

    // --- selection ---

    /// Select a polygon. Returns `false` for an unknown id.
    pub fn select(&mut self, id: PolygonId) -> bool {
        if !self.polygons.contains_key(&id) {
            log::debug!("Ignoring selection of unknown polygon {}", id);
            return false;
        }
        self.selected = Some(id);
        self.selection_changed();
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.selection_changed();
    }

    /// Delete the selected polygon and its primitives.
    ///
    /// Deleting always leaves the editor idle: if a different polygon was
    /// being drawn, that session is finished first.
    pub fn delete_selected(&mut self) -> Option<PolygonId> {
        let selected = self.selected?;

        if self.current().is_some_and(|current| current != selected) {
            self.finish();
        }

        self.remove_polygon(selected);
        self.session = DrawingSession::Idle;
        self.selection_changed();

        log::info!("Deleted polygon {}", selected);
        Some(selected)
    }

    // --- categories ---

    /// Move the selected polygon `direction` steps through the category list,
    /// wrapping at both ends. Returns the new category id.
    ///
    /// A polygon whose category is not in the list moves to the first entry
    /// when cycling forward and to the last when cycling backward.
    pub fn cycle_category(&mut self, direction: i32) -> Option<u32> {
        let selected = self.selected?;
        if direction == 0 {
            return None;
        }

        let polygon = self.polygons.get(&selected)?;
        let len = self.categories.len() as i64;
        let position = match self
            .categories
            .iter()
            .position(|category| category.id == polygon.category_id)
        {
            Some(index) => index as i64,
            None if direction > 0 => -1,
            None => len,
        };
        let next = (position + i64::from(direction)).rem_euclid(len) as usize;
        let category_id = self.categories.get(next)?.id;

        if let Some(polygon) = self.polygons.get_mut(&selected) {
            polygon.category_id = category_id;
        }
        self.restyle_handles(selected);
        self.redraw(selected);

        log::debug!("Polygon {} moved to category {}", selected, category_id);
        Some(category_id)
    }

    /// Replace the category list. Polygons keep their category ids and are
    /// recolored from the new list.
    pub fn set_categories(&mut self, categories: Vec<Category>) -> Result<(), EditError> {
        if categories.is_empty() {
            return Err(EditError::EmptyCategoryList);
        }
        self.categories = categories;
        self.restyle_all();
        log::info!("Category list replaced ({} entries)", self.categories.len());
        Ok(())
    }

    // --- display ---

    /// Toggle flatten mode. Only the displayed geometry changes.
    pub fn set_flatten(&mut self, enabled: bool) {
        self.flatten = enabled;
        self.restyle_all();
        log::debug!("Flatten mode {}", if enabled { "on" } else { "off" });
    }

    // --- internals ---

    fn allocate_id(&mut self) -> PolygonId {
        let id = PolygonId(self.next_polygon_id);
        self.next_polygon_id += 1;
        id
    }

    fn default_category_id(&self) -> u32 {
        self.categories.first().map_or(0, |category| category.id)
    }

    /// Redraw every line (selection changes line width) and recompute visibility.
    fn selection_changed(&mut self) {
        self.redraw_all();
        self.refresh_visibility();
    }

    /// Remove a polygon and everything that refers to it.
    fn remove_polygon(&mut self, id: PolygonId) -> Option<Polygon> {
        let polygon = self.polygons.shift_remove(&id)?;
        self.release_primitives(&polygon);

        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.current() == Some(id) {
            self.session = DrawingSession::Idle;
        }
        if self.gesture.is_some_and(|gesture| gesture.polygon == id) {
            log::debug!("Dropping drag gesture on removed polygon {}", id);
            self.gesture = None;
        }
        Some(polygon)
    }
}
