//! Output file formats

use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File format a pattern can be written to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// AutoCAD R2000 drawing for laser cutter software
    Dxf,
    /// Millimeter-sized vector drawing
    Svg,
    /// Raster preview
    Png,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Dxf, ExportFormat::Svg, ExportFormat::Png];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Dxf => "dxf",
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "dxf" => Ok(ExportFormat::Dxf),
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
