//! DXF export
//!
//! Writes an AutoCAD R2000 drawing in millimeters with one LINE entity per
//! segment. Cut geometry and reference geometry live on separate layers so
//! laser software can assign them different operations.

use crate::error::ExportResult;
use crate::format::ExportFormat;
use crate::{ensure_parent_dir, PatternExporter};
use dxf::entities::{Entity, EntityType, Line, Text};
use dxf::enums::{AcadVersion, DrawingUnits, Units};
use dxf::tables::Layer as DxfLayer;
use dxf::{Color, Drawing, Point};
use kerfkit_core::{generate_outline, KerfParameters, Layer, LineSegment};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// ACI colour of the `cuts` layer (red).
pub const CUTS_COLOR_INDEX: u8 = 1;

/// ACI colour of the `outline` layer (blue).
pub const OUTLINE_COLOR_INDEX: u8 = 5;

/// Height of the annotation text (mm).
pub const ANNOTATION_HEIGHT: f64 = 3.0;

/// Distance of the annotation above the material (mm).
pub const ANNOTATION_GAP: f64 = 5.0;

#[derive(Debug, Clone, Copy)]
pub struct DxfExporter {
    /// Add the material boundary and the parameter annotation
    pub include_outline: bool,
}

impl Default for DxfExporter {
    fn default() -> Self {
        Self {
            include_outline: true,
        }
    }
}

impl DxfExporter {
    pub fn new(include_outline: bool) -> Self {
        Self { include_outline }
    }

    /// Build the drawing without writing it.
    pub fn build_drawing(&self, lines: &[LineSegment], params: &KerfParameters) -> Drawing {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2000;
        drawing.header.default_drawing_units = Units::Millimeters;
        drawing.header.drawing_units = DrawingUnits::Metric;

        for (layer, color) in [
            (Layer::Cuts, CUTS_COLOR_INDEX),
            (Layer::Outline, OUTLINE_COLOR_INDEX),
        ] {
            drawing.add_layer(DxfLayer {
                name: layer.as_str().to_string(),
                color: Color::from_index(color),
                ..Default::default()
            });
        }

        for segment in lines {
            add_line(&mut drawing, segment);
        }

        if self.include_outline {
            for segment in &generate_outline(params) {
                add_line(&mut drawing, segment);
            }

            let text = Text {
                location: Point::new(0.0, params.material_height() + ANNOTATION_GAP, 0.0),
                text_height: ANNOTATION_HEIGHT,
                value: annotation(params),
                ..Default::default()
            };
            let mut entity = Entity::new(EntityType::Text(text));
            entity.common.layer = Layer::Outline.as_str().to_string();
            drawing.add_entity(entity);
        }

        drawing
    }
}

fn add_line(drawing: &mut Drawing, segment: &LineSegment) {
    let line = Line::new(
        Point::new(segment.x1, segment.y1, 0.0),
        Point::new(segment.x2, segment.y2, 0.0),
    );
    let mut entity = Entity::new(EntityType::Line(line));
    entity.common.layer = segment.layer.as_str().to_string();
    drawing.add_entity(entity);
}

/// One-line description of the pattern placed above the material.
pub fn annotation(params: &KerfParameters) -> String {
    format!(
        "Kerf Pattern: {}mm spacing, {}mm cuts, {}mm kerf",
        params.cut_spacing(),
        params.cut_length(),
        params.kerf_width()
    )
}

impl PatternExporter for DxfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Dxf
    }

    fn export(&self, lines: &[LineSegment], params: &KerfParameters, path: &Path) -> ExportResult<()> {
        ensure_parent_dir(path)?;
        let drawing = self.build_drawing(lines, params);
        let mut writer = BufWriter::new(File::create(path)?);
        drawing.save(&mut writer)?;
        writer.flush()?;
        debug!("Wrote {} segments to {}", lines.len(), path.display());
        Ok(())
    }
}
