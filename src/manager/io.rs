//! Loading and exporting annotation records.

use pvat_scene::SceneSurface;

use super::{DrawingSession, PolygonManager};
use crate::constants::MIN_POLYGON_VERTICES;
use crate::format::{AnnotationDocument, AnnotationRecord, DecodedDocument, FormatWarning};
use crate::model::{Polygon, PolygonId};

/// Result of loading annotation records.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Polygons created
    pub loaded: usize,
    /// Records with a shape other than polygon
    pub ignored: usize,
    /// Records that were skipped, with the reason
    pub warnings: Vec<FormatWarning>,
}

impl<S: SceneSurface> PolygonManager<S> {
    /// Replace every polygon with the polygon records in `records`.
    ///
    /// Loaded polygons are closed and nothing is selected afterwards. Records
    /// with other shapes are ignored, and polygon records with fewer than
    /// three locations are skipped with a warning.
    pub fn load_from_annotations(&mut self, records: &[AnnotationRecord]) -> ImportSummary {
        self.reset();

        let mut summary = ImportSummary::default();
        for (index, record) in records.iter().enumerate() {
            if !record.is_polygon() {
                log::debug!("Ignoring '{}' record {}", record.shape, index);
                summary.ignored += 1;
                continue;
            }
            if record.location.len() < MIN_POLYGON_VERTICES {
                let warning = FormatWarning::warning(format!(
                    "polygon has {} locations, at least {} are required",
                    record.location.len(),
                    MIN_POLYGON_VERTICES
                ))
                .with_record(index);
                log::warn!("{}", warning);
                summary.warnings.push(warning);
                continue;
            }

            self.insert_closed(record);
            summary.loaded += 1;
        }

        log::info!(
            "Loaded {} polygons ({} other records ignored, {} skipped)",
            summary.loaded,
            summary.ignored,
            summary.warnings.len()
        );
        summary
    }

    /// Load a decoded document, carrying its decode warnings into the summary.
    pub fn load_document(&mut self, decoded: &DecodedDocument) -> ImportSummary {
        let mut summary = self.load_from_annotations(&decoded.document.annotations);
        let mut warnings = decoded.warnings.clone();
        warnings.extend(summary.warnings.drain(..).map(|mut warning| {
            warning.record_index = warning
                .record_index
                .map(|index| decoded.source_position(index));
            warning
        }));
        warnings.sort_by_key(|warning| warning.record_index);
        summary.warnings = warnings;
        summary
    }

    /// Export closed polygons in order, numbered from 1.
    pub fn get_annotations(&self) -> AnnotationDocument {
        let annotations = self
            .polygons
            .values()
            .filter(|polygon| polygon.closed)
            .enumerate()
            .map(|(index, polygon)| {
                AnnotationRecord::polygon(
                    index as u64 + 1,
                    polygon.category_id,
                    polygon.points.clone(),
                )
            })
            .collect();
        AnnotationDocument::new(annotations)
    }

    fn insert_closed(&mut self, record: &AnnotationRecord) -> PolygonId {
        let id = self.allocate_id();
        let mut polygon = Polygon::new(id, record.category_id);
        polygon.points = record.location.clone();
        polygon.closed = true;
        self.polygons.insert(id, polygon);

        for vertex in 0..record.location.len() {
            if let Some(handle) = self.create_handle(id, vertex) {
                if let Some(polygon) = self.polygons.get_mut(&id) {
                    polygon.handles.push(handle);
                }
            }
        }
        self.redraw(id);
        id
    }

    /// Remove every polygon and primitive and return to idle.
    fn reset(&mut self) {
        let polygons: Vec<Polygon> = self.polygons.drain(..).map(|(_, polygon)| polygon).collect();
        for polygon in &polygons {
            self.release_primitives(polygon);
        }
        self.handle_owners.clear();
        self.session = DrawingSession::Idle;
        self.selected = None;
        self.gesture = None;
        if !polygons.is_empty() {
            log::debug!("Cleared {} polygons", polygons.len());
        }
    }
}
