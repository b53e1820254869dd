//! SVG export
//!
//! The document is sized in millimeters with a viewBox equal to the material,
//! and all geometry sits in a group flipped to keep the pattern's y-up space.

use crate::error::ExportResult;
use crate::format::ExportFormat;
use crate::{ensure_parent_dir, PatternExporter};
use kerfkit_core::{generate_outline, KerfParameters, Layer, LineSegment};
use std::path::Path;
use tracing::debug;

/// Stroke width of every line (mm).
pub const STROKE_WIDTH: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
pub struct SvgExporter {
    pub include_outline: bool,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            include_outline: true,
        }
    }
}

fn layer_color(layer: Layer) -> &'static str {
    match layer {
        Layer::Cuts => "#ff0000",
        Layer::Outline => "#0000ff",
    }
}

impl SvgExporter {
    pub fn new(include_outline: bool) -> Self {
        Self { include_outline }
    }

    /// Render the document to a string.
    pub fn render(&self, lines: &[LineSegment], params: &KerfParameters) -> String {
        let width = params.material_width();
        let height = params.material_height();

        let mut all: Vec<LineSegment> = lines.to_vec();
        if self.include_outline {
            all.extend(generate_outline(params));
        }

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}mm\" height=\"{height}mm\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        svg.push_str(&format!(
            "  <g transform=\"translate(0 {height}) scale(1 -1)\" fill=\"none\" stroke-width=\"{STROKE_WIDTH}\" stroke-linecap=\"round\">\n"
        ));

        for layer in [Layer::Cuts, Layer::Outline] {
            let members: Vec<&LineSegment> = all.iter().filter(|l| l.layer == layer).collect();
            if members.is_empty() {
                continue;
            }

            svg.push_str(&format!(
                "    <g id=\"{}\" stroke=\"{}\">\n",
                layer,
                layer_color(layer)
            ));
            for line in members {
                svg.push_str(&format!(
                    "      <line x1=\"{:.4}\" y1=\"{:.4}\" x2=\"{:.4}\" y2=\"{:.4}\"/>\n",
                    line.x1, line.y1, line.x2, line.y2
                ));
            }
            svg.push_str("    </g>\n");
        }

        svg.push_str("  </g>\n");
        svg.push_str("</svg>\n");
        svg
    }
}

impl PatternExporter for SvgExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Svg
    }

    fn export(&self, lines: &[LineSegment], params: &KerfParameters, path: &Path) -> ExportResult<()> {
        ensure_parent_dir(path)?;
        std::fs::write(path, self.render(lines, params))?;
        debug!("Wrote {} segments to {}", lines.len(), path.display());
        Ok(())
    }
}
