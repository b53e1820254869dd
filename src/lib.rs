//! # KerfKit
//!
//! Living hinge kerf pattern generator for laser cutting.
//!
//! ## Architecture
//!
//! KerfKit is organized as a workspace with multiple crates:
//!
//! 1. **kerfkit-core** - Bend formulas, validated parameters, pattern generators, statistics
//! 2. **kerfkit-export** - DXF, SVG and PNG preview exporters
//! 3. **kerfkit-settings** - Job files and material presets
//! 4. **kerfkit** - Logging setup, the job runner and the command line binary
//!
//! ## Patterns
//!
//! - **Straight**: parallel cuts, horizontal or vertical
//! - **Diamond**: columns of elongated diamonds alternating with split diamonds
//! - **Oval**: the same layout with elliptical shapes
//!
//! Diamond and oval patterns on tall material are stacked into rows.

pub use kerfkit_core::{
    bend_radius, calibration_strips, generate_living_hinge, generate_outline, max_bend_angle,
    minimum_spacing, pattern_statistics, required_spacing, KerfError, KerfParameters,
    KerfSettings, Layer, LineSegment, PatternDirection, PatternReport, PatternType,
};
pub use kerfkit_export::{export_all, ExportError, ExportFormat, ExportOptions};
pub use kerfkit_settings::{JobConfig, MaterialLibrary, MaterialPreset, OutputSettings};

use anyhow::Context;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so reports printed on stdout stay clean. The filter
/// comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Result of running one job.
#[derive(Debug)]
pub struct JobOutcome {
    pub parameters: KerfParameters,
    pub lines: Vec<LineSegment>,
    pub report: PatternReport,
    /// Written files keyed by format
    pub files: BTreeMap<ExportFormat, PathBuf>,
}

/// Material presets: the built-ins plus the user's custom file, if any.
pub fn load_material_library() -> MaterialLibrary {
    let mut library = MaterialLibrary::standard();
    match kerfkit_settings::custom_materials_path() {
        Ok(path) => {
            if let Err(e) = library.merge_file(&path) {
                warn!("Ignoring custom materials in {}: {}", path.display(), e);
            }
        }
        Err(e) => debug!("No custom materials: {}", e),
    }
    library
}

/// Generate the job's pattern and write every requested format.
///
/// A `material` preset, if set, is applied before the parameters are built.
pub fn run_job(config: &JobConfig) -> anyhow::Result<JobOutcome> {
    let mut config = config.clone();
    if config.material.is_some() {
        config.resolve_material(&load_material_library())?;
    }

    let parameters = config.parameters().context("Invalid pattern settings")?;
    info!("Generating {}", parameters);

    let lines = generate_living_hinge(&parameters);
    let report = PatternReport::new(&parameters, &lines);
    info!(
        "Generated {} segments, {:.2} mm total cut length",
        report.statistics.num_cuts, report.statistics.total_cut_length
    );
    if lines.is_empty() {
        warn!("Pattern is empty: the margins leave no room for shapes");
    }

    let output = &config.output;
    let files = export_all(
        &lines,
        &parameters,
        &output.directory,
        &output.base_name,
        &output.formats,
        &output.export_options(),
    )
    .with_context(|| format!("Failed to export to {}", output.directory.display()))?;

    Ok(JobOutcome {
        parameters,
        lines,
        report,
        files,
    })
}
