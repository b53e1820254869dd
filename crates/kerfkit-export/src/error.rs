//! Error types for the export crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing pattern files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while creating directories or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The DXF drawing could not be written.
    #[error("DXF error: {0}")]
    Dxf(#[from] dxf::DxfError),

    /// The preview image could not be encoded or saved.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The preview could not be rasterized.
    #[error("Render error: {0}")]
    Render(String),

    /// The format name is not one of `dxf`, `svg` or `png`.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
