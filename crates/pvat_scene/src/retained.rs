//! In-memory scene surface.

use std::collections::BTreeMap;
use std::fmt;

use crate::primitive::{Drawable, HandleMarker, LineStrip, PrimitiveId};
use crate::surface::SceneSurface;

/// A retained-mode scene holding every live primitive in insertion order.
///
/// Ids are allocated from a monotonic counter and never reused, so a stale id
/// can never alias a newer primitive.
#[derive(Debug, Default)]
pub struct RetainedScene {
    primitives: BTreeMap<PrimitiveId, Drawable>,
    next_id: u64,
    added: u64,
    removed: u64,
    /// Set whenever a primitive is added, removed or handed out mutably.
    dirty: bool,
}

impl RetainedScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Drawable> {
        self.primitives.get(&id)
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.primitives.contains_key(&id)
    }

    /// Live primitives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Drawable)> {
        self.primitives.iter().map(|(id, drawable)| (*id, drawable))
    }

    pub fn handles(&self) -> impl Iterator<Item = (PrimitiveId, &HandleMarker)> {
        self.iter()
            .filter_map(|(id, drawable)| drawable.as_handle().map(|handle| (id, handle)))
    }

    pub fn lines(&self) -> impl Iterator<Item = (PrimitiveId, &LineStrip)> {
        self.iter()
            .filter_map(|(id, drawable)| drawable.as_line().map(|line| (id, line)))
    }

    /// Primitives sorted the way a renderer would draw them (render order, then insertion).
    pub fn draw_list(&self) -> Vec<(PrimitiveId, &Drawable)> {
        let mut list: Vec<_> = self.iter().collect();
        list.sort_by_key(|(id, drawable)| (drawable.render_order(), *id));
        list
    }

    /// Remove every primitive.
    pub fn clear(&mut self) {
        self.removed += self.primitives.len() as u64;
        if !self.primitives.is_empty() {
            self.dirty = true;
        }
        self.primitives.clear();
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag. Call after the host has redrawn.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn summary(&self) -> SceneSummary {
        let mut summary = SceneSummary {
            added: self.added,
            removed: self.removed,
            ..SceneSummary::default()
        };
        for (_, drawable) in self.iter() {
            match drawable {
                Drawable::Handle(handle) => {
                    summary.handles += 1;
                    if handle.visible {
                        summary.visible_handles += 1;
                    }
                }
                Drawable::Line(_) => summary.lines += 1,
            }
        }
        summary
    }
}

impl SceneSurface for RetainedScene {
    fn add_primitive(&mut self, drawable: Drawable) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.added += 1;
        self.primitives.insert(id, drawable);
        self.dirty = true;
        log::trace!("scene: added primitive {:?}", id);
        id
    }

    fn remove_primitive(&mut self, id: PrimitiveId) -> Option<Drawable> {
        let removed = self.primitives.remove(&id);
        if removed.is_some() {
            self.removed += 1;
            self.dirty = true;
            log::trace!("scene: removed primitive {:?}", id);
        } else {
            log::warn!("scene: attempted to remove unknown primitive {:?}", id);
        }
        removed
    }

    fn primitive_mut(&mut self, id: PrimitiveId) -> Option<&mut Drawable> {
        let drawable = self.primitives.get_mut(&id);
        if drawable.is_some() {
            self.dirty = true;
        }
        drawable
    }
}

/// Counts describing the current scene contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneSummary {
    pub handles: usize,
    pub visible_handles: usize,
    pub lines: usize,
    /// Primitives added over the scene's lifetime.
    pub added: u64,
    /// Primitives removed over the scene's lifetime.
    pub removed: u64,
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} handles ({} visible), {} lines; {} added / {} removed",
            self.handles, self.visible_handles, self.lines, self.added, self.removed
        )
    }
}
