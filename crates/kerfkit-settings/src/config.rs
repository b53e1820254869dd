//! Job files
//!
//! A job file holds one pattern request plus the output settings for it, as
//! JSON or TOML. Every section and field is optional and falls back to the
//! defaults below.

use crate::error::{SettingsError, SettingsResult};
use crate::materials::{MaterialLibrary, MaterialPreset};
use kerfkit_core::{KerfParameters, KerfSettings};
use kerfkit_export::{ExportFormat, ExportOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where and how the pattern is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the files are written to, created if missing
    pub directory: PathBuf,
    /// File name without extension
    pub base_name: String,
    pub formats: Vec<ExportFormat>,
    /// Add the material boundary to the exports
    pub include_outline: bool,
    /// Preview resolution
    pub dpi: u32,
    /// Draw a 10 mm grid on the preview
    pub show_grid: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            base_name: "pattern".to_string(),
            formats: vec![ExportFormat::Dxf, ExportFormat::Png, ExportFormat::Svg],
            include_outline: true,
            dpi: 300,
            show_grid: true,
        }
    }
}

impl OutputSettings {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            include_outline: self.include_outline,
            dpi: self.dpi,
            show_grid: self.show_grid,
        }
    }
}

/// A complete pattern job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Preset id applied over `kerf` before the pattern is built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    pub kerf: KerfSettings,
    pub output: OutputSettings,
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> SettingsResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(FileFormat::Toml),
        _ => Err(SettingsError::UnsupportedFormat(format!(
            "{} (job files must be .json or .toml)",
            path.display()
        ))),
    }
}

impl JobConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        Ok(match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        })
    }

    /// Load a job file (JSON or TOML) and validate it.
    ///
    /// The `kerf` section is validated as written, before any `material`
    /// preset is applied. Use [`Self::load_with_materials`] for job files that
    /// leave thickness or kerf to the preset.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        debug!("Loaded job from {}", path.display());
        Ok(config)
    }

    /// Load a job file, apply its `material` preset from `library`, then validate.
    pub fn load_with_materials(path: &Path, library: &MaterialLibrary) -> SettingsResult<Self> {
        let mut config = Self::read_file(path)?;
        config.resolve_material(library)?;
        config.validate()?;
        debug!("Loaded job from {}", path.display());
        Ok(config)
    }

    /// Validate and save the job (JSON or TOML by extension).
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let format = file_format(path)?;
        self.validate()?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Check the output settings and that the pattern settings build valid parameters.
    ///
    /// The material preset is not resolved here; see [`Self::resolve_material`].
    pub fn validate(&self) -> SettingsResult<()> {
        if self.output.dpi == 0 {
            return Err(SettingsError::invalid("output.dpi", "must be > 0"));
        }

        let base = self.output.base_name.trim();
        if base.is_empty() {
            return Err(SettingsError::invalid("output.base_name", "must not be empty"));
        }
        if base.contains(['/', '\\']) {
            return Err(SettingsError::invalid(
                "output.base_name",
                "must be a file name, not a path",
            ));
        }

        self.parameters()?;
        Ok(())
    }

    /// Build validated pattern parameters from the `kerf` section.
    pub fn parameters(&self) -> SettingsResult<KerfParameters> {
        Ok(KerfParameters::new(self.kerf.clone())?)
    }

    /// Copy thickness, kerf width, recommended spacing and name from a preset.
    pub fn apply_material(&mut self, preset: &MaterialPreset) {
        self.kerf.material_thickness = preset.thickness;
        self.kerf.kerf_width = preset.kerf_width;
        self.kerf.cut_spacing = preset.recommended_spacing;
        self.kerf.material_name = Some(preset.name.clone());
    }

    /// Apply the preset named by `material`, if any.
    pub fn resolve_material(&mut self, library: &MaterialLibrary) -> SettingsResult<()> {
        let Some(id) = self.material.clone() else {
            return Ok(());
        };
        let preset = library
            .get(&id)
            .ok_or_else(|| SettingsError::invalid("material", format!("unknown preset '{id}'")))?;
        self.apply_material(preset);
        debug!("Applied material preset '{}'", id);
        Ok(())
    }
}

/// `<platform config dir>/kerfkit`, falling back to the home directory.
pub fn default_config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("kerfkit"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config or home directory available".to_string())
        })
}

/// Path of the user's custom material presets.
pub fn custom_materials_path() -> SettingsResult<PathBuf> {
    Ok(default_config_dir()?.join("materials.json"))
}
