//! PNG preview rendering
//!
//! Rasterizes the pattern with tiny-skia at a fixed resolution: white
//! background, an optional 10 mm grid, outline in blue and cuts in red.

use crate::error::{ExportError, ExportResult};
use crate::format::ExportFormat;
use crate::{ensure_parent_dir, PatternExporter};
use image::{ImageFormat, Rgb, RgbImage};
use kerfkit_core::{generate_outline, KerfParameters, Layer, LineSegment};
use std::path::Path;
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

pub const DEFAULT_DPI: u32 = 300;

/// Grid pitch (mm).
pub const GRID_SPACING: f64 = 10.0;

/// Border around the material as a fraction of its larger dimension.
pub const MARGIN_RATIO: f64 = 0.05;

const MM_PER_INCH: f64 = 25.4;

fn background_color() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}
fn grid_color() -> Color {
    Color::from_rgba8(210, 210, 210, 255)
}
fn cut_color() -> Color {
    Color::from_rgba8(220, 0, 0, 255)
}
fn outline_color() -> Color {
    Color::from_rgba8(0, 0, 220, 255)
}

#[derive(Debug, Clone, Copy)]
pub struct PngExporter {
    pub dpi: u32,
    pub show_grid: bool,
    pub include_outline: bool,
}

impl Default for PngExporter {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            show_grid: true,
            include_outline: true,
        }
    }
}

/// Material-to-pixel mapping for one preview.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Canvas {
    /// Pixels per millimeter
    scale: f64,
    /// Border around the material (mm)
    margin: f64,
    width_px: u32,
    height_px: u32,
}

impl Canvas {
    fn new(params: &KerfParameters, dpi: u32) -> Self {
        let scale = dpi as f64 / MM_PER_INCH;
        let margin = params.material_width().max(params.material_height()) * MARGIN_RATIO;
        let width_px = ((params.material_width() + 2.0 * margin) * scale).ceil() as u32;
        let height_px = ((params.material_height() + 2.0 * margin) * scale).ceil() as u32;
        Self {
            scale,
            margin,
            width_px,
            height_px,
        }
    }

    /// Material millimeters, y up, to pixels, y down.
    fn transform(&self, material_height: f64) -> Transform {
        let s = self.scale as f32;
        Transform::from_scale(s, -s).post_translate(
            (self.margin * self.scale) as f32,
            ((material_height + self.margin) * self.scale) as f32,
        )
    }

    /// Stroke of `pixels` on screen, given in millimeters since the
    /// transform scales stroke width as well.
    fn stroke(&self, pixels: f64) -> Stroke {
        Stroke {
            width: (pixels / self.scale) as f32,
            ..Default::default()
        }
    }
}

fn stroke_segments<'a>(
    pixmap: &mut Pixmap,
    segments: impl IntoIterator<Item = &'a LineSegment>,
    color: Color,
    stroke: &Stroke,
    transform: Transform,
) {
    let mut pb = PathBuilder::new();
    for segment in segments {
        pb.move_to(segment.x1 as f32, segment.y1 as f32);
        pb.line_to(segment.x2 as f32, segment.y2 as f32);
    }
    let Some(path) = pb.finish() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    pixmap.stroke_path(&path, &paint, stroke, transform, None);
}

fn grid_lines(width: f64, height: f64) -> Vec<LineSegment> {
    let mut grid = Vec::new();
    let mut x = 0.0;
    while x <= width {
        grid.push(LineSegment::new(x, 0.0, x, height));
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= height {
        grid.push(LineSegment::new(0.0, y, width, y));
        y += GRID_SPACING;
    }
    grid
}

impl PngExporter {
    pub fn new(dpi: u32, show_grid: bool, include_outline: bool) -> Self {
        Self {
            dpi,
            show_grid,
            include_outline,
        }
    }

    /// Rasterize the pattern.
    pub fn render(&self, lines: &[LineSegment], params: &KerfParameters) -> ExportResult<RgbImage> {
        if self.dpi == 0 {
            return Err(ExportError::Render("dpi must be positive".to_string()));
        }

        let canvas = Canvas::new(params, self.dpi);
        let Some(mut pixmap) = Pixmap::new(canvas.width_px, canvas.height_px) else {
            return Err(ExportError::Render(format!(
                "cannot allocate a {}×{} preview",
                canvas.width_px, canvas.height_px
            )));
        };
        pixmap.fill(background_color());

        let transform = canvas.transform(params.material_height());

        if self.show_grid {
            let grid = grid_lines(params.material_width(), params.material_height());
            stroke_segments(&mut pixmap, &grid, grid_color(), &canvas.stroke(1.0), transform);
        }

        let mut all: Vec<LineSegment> = lines.to_vec();
        if self.include_outline {
            all.extend(generate_outline(params));
        }

        // Outline first so cuts on shared edges stay visible
        stroke_segments(
            &mut pixmap,
            all.iter().filter(|l| l.layer == Layer::Outline),
            outline_color(),
            &canvas.stroke(2.0),
            transform,
        );
        stroke_segments(
            &mut pixmap,
            all.iter().filter(|l| l.layer == Layer::Cuts),
            cut_color(),
            &canvas.stroke(2.0),
            transform,
        );

        // Pixmap data is premultiplied RGBA; the background is opaque so
        // the color channels can be taken as is.
        let data = pixmap.data();
        let width = canvas.width_px;
        Ok(RgbImage::from_fn(width, canvas.height_px, |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        }))
    }
}

impl PatternExporter for PngExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }

    fn export(&self, lines: &[LineSegment], params: &KerfParameters, path: &Path) -> ExportResult<()> {
        ensure_parent_dir(path)?;
        let image = self.render(lines, params)?;
        image.save_with_format(path, ImageFormat::Png)?;
        debug!(
            "Wrote {}×{} preview to {}",
            image.width(),
            image.height(),
            path.display()
        );
        Ok(())
    }
}
