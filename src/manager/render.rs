//! Keeping surface primitives in sync with polygon state.

use pvat_scene::{Drawable, HandleMarker, LineShape, LineStrip, PrimitiveId, SceneSurface, Vec3};

use super::{HandleOwner, PolygonManager};
use crate::model::{Point3, Polygon, PolygonId};

impl<S: SceneSurface> PolygonManager<S> {
    /// Color of a category, or the fallback color for an unknown id.
    pub fn category_color(&self, category_id: u32) -> [u8; 3] {
        self.category(category_id)
            .map_or(self.settings.fallback_color, |category| category.color)
    }

    /// Where the handle for a stored point is displayed.
    ///
    /// Handles are pinned to the layer z in flatten mode, and points lying on
    /// the plane are lifted to it so they draw above the scene.
    pub(super) fn handle_position(&self, point: Point3) -> Vec3 {
        let position = Vec3::from(point);
        if self.flatten || point.z == 0.0 {
            position.with_z(self.settings.flatten_z)
        } else {
            position
        }
    }

    /// Add a handle primitive for vertex `vertex` of polygon `id`.
    pub(super) fn create_handle(&mut self, id: PolygonId, vertex: usize) -> Option<PrimitiveId> {
        let polygon = self.polygons.get(&id)?;
        let point = *polygon.points.get(vertex)?;
        let marker = HandleMarker::new(
            self.handle_position(point),
            self.category_color(polygon.category_id),
            self.settings.handle_radius,
        )
        .with_opacity(self.settings.handle_opacity)
        .with_visible(self.handles_visible(id));

        let handle = self.surface.add_primitive(Drawable::Handle(marker));
        self.handle_owners.insert(handle, HandleOwner { polygon: id, vertex });
        Some(handle)
    }

    fn build_line(&self, polygon: &Polygon) -> LineStrip {
        let points = polygon
            .points
            .iter()
            .map(|point| {
                if self.flatten {
                    Vec3::from(point.flattened())
                } else {
                    Vec3::from(*point)
                }
            })
            .collect();
        let width = if self.selected == Some(polygon.id) {
            self.settings.selected_line_width
        } else {
            self.settings.line_width
        };
        LineStrip::new(
            points,
            LineShape::from_closed(polygon.closed),
            self.category_color(polygon.category_id),
            width,
        )
    }

    /// Replace the polygon's line. Fewer than two points means no line.
    pub(super) fn redraw(&mut self, id: PolygonId) {
        let Some(polygon) = self.polygons.get(&id) else {
            return;
        };
        let old_line = polygon.line;
        let line = (polygon.points.len() >= 2).then(|| self.build_line(polygon));

        if let Some(old_line) = old_line {
            self.surface.remove_primitive(old_line);
        }
        let new_line = line.map(|line| self.surface.add_primitive(Drawable::Line(line)));

        if let Some(polygon) = self.polygons.get_mut(&id) {
            polygon.line = new_line;
        }
    }

    pub(super) fn redraw_all(&mut self) {
        let ids: Vec<PolygonId> = self.polygons.keys().copied().collect();
        for id in ids {
            self.redraw(id);
        }
    }

    /// Reposition, recolor and re-show every handle of a polygon in place.
    pub(super) fn restyle_handles(&mut self, id: PolygonId) {
        let Some(polygon) = self.polygons.get(&id) else {
            return;
        };
        let color = self.category_color(polygon.category_id);
        let visible = self.handles_visible(id);
        let updates: Vec<(PrimitiveId, Vec3)> = polygon
            .handles
            .iter()
            .zip(&polygon.points)
            .map(|(handle, point)| (*handle, self.handle_position(*point)))
            .collect();

        for (handle, position) in updates {
            if let Some(marker) = self
                .surface
                .primitive_mut(handle)
                .and_then(Drawable::as_handle_mut)
            {
                marker.position = position;
                marker.color = color;
                marker.visible = visible;
            }
        }
    }

    /// Restyle every handle and redraw every line.
    pub(super) fn restyle_all(&mut self) {
        let ids: Vec<PolygonId> = self.polygons.keys().copied().collect();
        for id in ids {
            self.restyle_handles(id);
            self.redraw(id);
        }
    }

    /// Apply the visibility rule to every handle.
    pub(super) fn refresh_visibility(&mut self) {
        let updates: Vec<(PrimitiveId, bool)> = self
            .polygons
            .values()
            .flat_map(|polygon| {
                let visible = self.handles_visible(polygon.id);
                polygon.handles.iter().map(move |handle| (*handle, visible))
            })
            .collect();

        for (handle, visible) in updates {
            if let Some(marker) = self
                .surface
                .primitive_mut(handle)
                .and_then(Drawable::as_handle_mut)
            {
                marker.visible = visible;
            }
        }
    }

    /// Remove every primitive of a polygon from the surface.
    pub(super) fn release_primitives(&mut self, polygon: &Polygon) {
        for primitive in polygon.primitives() {
            self.handle_owners.remove(&primitive);
            self.surface.remove_primitive(primitive);
        }
    }
}
