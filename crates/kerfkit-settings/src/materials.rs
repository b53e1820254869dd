//! Material presets
//!
//! Thickness, kerf and a starting spacing for common laser stock. The
//! built-in values are starting points; run calibration strips to tune them.

use crate::error::SettingsResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A named stock with measured cutting properties (mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPreset {
    pub id: String,
    pub name: String,
    pub thickness: f64,
    pub kerf_width: f64,
    pub recommended_spacing: f64,
}

impl MaterialPreset {
    pub fn new(id: &str, name: &str, thickness: f64, kerf_width: f64, recommended_spacing: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            thickness,
            kerf_width,
            recommended_spacing,
        }
    }
}

/// Presets keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialLibrary {
    presets: BTreeMap<String, MaterialPreset>,
}

impl MaterialLibrary {
    /// Empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the built-in presets.
    pub fn standard() -> Self {
        let mut library = Self::new();
        library.add(MaterialPreset::new("plywood_3mm", "3mm Plywood", 3.0, 0.2, 5.0));
        library.add(MaterialPreset::new(
            "birch_plywood_3mm",
            "3mm Birch Plywood",
            3.0,
            0.2,
            6.0,
        ));
        library.add(MaterialPreset::new("acrylic_3mm", "3mm Acrylic", 3.0, 0.25, 4.0));
        library.add(MaterialPreset::new("mdf_6mm", "6mm MDF", 6.0, 0.3, 10.0));
        library
    }

    /// Add or replace a preset.
    pub fn add(&mut self, preset: MaterialPreset) {
        self.presets.insert(preset.id.clone(), preset);
    }

    pub fn get(&self, id: &str) -> Option<&MaterialPreset> {
        self.presets.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<MaterialPreset> {
        self.presets.remove(id)
    }

    /// All presets sorted by id.
    pub fn presets(&self) -> Vec<&MaterialPreset> {
        self.presets.values().collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Add presets from a JSON array, replacing built-ins with the same id.
    ///
    /// A missing file is not an error.
    pub fn merge_file(&mut self, path: &Path) -> SettingsResult<usize> {
        if !path.exists() {
            return Ok(0);
        }
        let content = std::fs::read_to_string(path)?;
        let custom: Vec<MaterialPreset> = serde_json::from_str(&content)?;
        let count = custom.len();
        for preset in custom {
            self.add(preset);
        }
        debug!("Loaded {} custom materials from {}", count, path.display());
        Ok(count)
    }
}
