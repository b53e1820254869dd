//! # KerfKit Export
//!
//! Writes generated patterns to files: DXF for laser software, SVG for
//! vector editors and a PNG preview. Every exporter keeps each segment's
//! layer and writes coordinates in the pattern's own millimeter space.

pub mod dxf_writer;
pub mod error;
pub mod format;
pub mod png_preview;
pub mod svg_writer;

pub use dxf_writer::DxfExporter;
pub use error::{ExportError, ExportResult};
pub use format::ExportFormat;
pub use png_preview::PngExporter;
pub use svg_writer::SvgExporter;

use kerfkit_core::{KerfParameters, LineSegment};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes a pattern to a single file.
pub trait PatternExporter {
    fn format(&self) -> ExportFormat;

    /// Write `lines` generated from `params` to `path`, creating missing
    /// parent directories.
    fn export(&self, lines: &[LineSegment], params: &KerfParameters, path: &Path) -> ExportResult<()>;
}

/// Options shared by the exporters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Add the material boundary (and the DXF annotation)
    pub include_outline: bool,
    /// Preview resolution
    pub dpi: u32,
    /// Draw a 10 mm grid behind the preview
    pub show_grid: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_outline: true,
            dpi: png_preview::DEFAULT_DPI,
            show_grid: true,
        }
    }
}

/// Exporter for `format` configured from `options`.
pub fn exporter_for(format: ExportFormat, options: &ExportOptions) -> Box<dyn PatternExporter> {
    match format {
        ExportFormat::Dxf => Box::new(DxfExporter::new(options.include_outline)),
        ExportFormat::Svg => Box::new(SvgExporter::new(options.include_outline)),
        ExportFormat::Png => Box::new(PngExporter::new(
            options.dpi,
            options.show_grid,
            options.include_outline,
        )),
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write the pattern once per format as `directory/base_name.<ext>`.
///
/// Returns the written paths keyed by format. Stops at the first failure.
pub fn export_all(
    lines: &[LineSegment],
    params: &KerfParameters,
    directory: &Path,
    base_name: &str,
    formats: &[ExportFormat],
    options: &ExportOptions,
) -> ExportResult<BTreeMap<ExportFormat, PathBuf>> {
    std::fs::create_dir_all(directory)?;

    let mut written = BTreeMap::new();
    for &format in formats {
        let path = directory.join(format!("{}.{}", base_name, format.extension()));
        exporter_for(format, options).export(lines, params, &path)?;
        info!("Exported {} pattern to {}", format, path.display());
        written.insert(format, path);
    }
    Ok(written)
}
