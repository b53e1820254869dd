//! # KerfKit Settings
//!
//! Job files describing a pattern request and its outputs, and the material
//! preset library.

pub mod config;
pub mod error;
pub mod materials;

pub use config::{custom_materials_path, default_config_dir, JobConfig, OutputSettings};
pub use error::{SettingsError, SettingsResult};
pub use materials::{MaterialLibrary, MaterialPreset};
