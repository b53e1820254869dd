//! Kerf pattern parameters
//!
//! [`KerfSettings`] is the raw request as a user or a job file supplies it.
//! [`KerfParameters`] is the validated, read-only form the generators consume:
//! it can only be obtained through [`KerfParameters::new`], which rejects every
//! hard-invalid combination at once and keeps advisory warnings alongside.
//!
//! All dimensions are in millimeters.

use crate::error::{KerfError, KerfResult};
use crate::geometry::{
    bend_radius_formula, calculate_num_rows, estimate_number_of_cuts, estimate_shape_count,
    max_bend_angle_formula, validate_pattern_parameters, PatternKind,
    DEFAULT_ROW_HEIGHT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// Parallel straight cuts
    #[default]
    Straight,
    /// Columns of elongated diamonds alternating with split diamonds
    Diamond,
    /// Columns of elongated ovals alternating with split ovals
    Oval,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::Straight => "straight",
            PatternType::Diamond => "diamond",
            PatternType::Oval => "oval",
        }
    }

    /// Diamond and oval layouts stack rows and need cut top/bottom edges.
    pub fn is_shape_pattern(&self) -> bool {
        matches!(self, PatternType::Diamond | PatternType::Oval)
    }
}

impl From<PatternType> for PatternKind {
    fn from(value: PatternType) -> Self {
        match value {
            PatternType::Straight => PatternKind::Straight,
            PatternType::Diamond => PatternKind::Diamond,
            PatternType::Oval => PatternKind::Oval,
        }
    }
}

impl FromStr for PatternType {
    type Err = KerfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" => Ok(PatternType::Straight),
            "diamond" => Ok(PatternType::Diamond),
            "oval" => Ok(PatternType::Oval),
            _ => Err(KerfError::UnknownPatternType(s.to_string())),
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orientation of straight cuts. Diamond and oval patterns ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternDirection {
    /// Cuts run left-right and are spaced bottom to top
    #[default]
    Horizontal,
    /// Cuts run bottom-top and are spaced left to right
    Vertical,
}

impl PatternDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternDirection::Horizontal => "horizontal",
            PatternDirection::Vertical => "vertical",
        }
    }
}

impl FromStr for PatternDirection {
    type Err = KerfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(PatternDirection::Horizontal),
            "vertical" | "v" => Ok(PatternDirection::Vertical),
            _ => Err(KerfError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for PatternDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated pattern request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KerfSettings {
    /// Width of the material sheet
    pub material_width: f64,
    /// Height of the material sheet
    pub material_height: f64,
    /// Thickness of the material
    pub material_thickness: f64,
    /// Width of material removed by the laser
    pub kerf_width: f64,
    /// Distance between cuts (straight) or shape columns (diamond/oval)
    pub cut_spacing: f64,
    /// Length of each straight cut, or the size the shape width derives from
    pub cut_length: f64,
    /// Keep-out distance from the material edges
    pub cut_offset: f64,
    pub pattern_type: PatternType,
    /// Only used by straight patterns
    pub pattern_direction: PatternDirection,
    /// Explicit row count for diamond/oval; `None` picks it from the height
    pub num_vertical_rows: Option<u32>,
    pub material_name: Option<String>,
    pub notes: Option<String>,
}

impl Default for KerfSettings {
    fn default() -> Self {
        Self {
            material_width: 100.0,
            material_height: 200.0,
            material_thickness: 3.0,
            kerf_width: 0.2,
            cut_spacing: 5.0,
            cut_length: 80.0,
            cut_offset: 10.0,
            pattern_type: PatternType::Straight,
            pattern_direction: PatternDirection::Horizontal,
            num_vertical_rows: None,
            material_name: None,
            notes: None,
        }
    }
}

/// Validated, immutable pattern parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct KerfParameters {
    settings: KerfSettings,
    warnings: Vec<String>,
}

impl KerfParameters {
    /// Validate `settings`.
    ///
    /// Fails with [`KerfError::InvalidParameters`] listing every violated
    /// constraint. Advisory warnings are logged and kept in [`Self::warnings`].
    pub fn new(settings: KerfSettings) -> KerfResult<Self> {
        let report = validate_pattern_parameters(
            settings.material_width,
            settings.material_height,
            settings.material_thickness,
            settings.kerf_width,
            settings.cut_spacing,
            settings.cut_length,
            settings.cut_offset,
            settings.pattern_type.into(),
        );

        if !report.is_valid() {
            return Err(KerfError::InvalidParameters {
                violations: report.violations,
            });
        }

        let mut warnings = report.warnings;
        if settings.pattern_type.is_shape_pattern()
            && settings.pattern_direction != PatternDirection::Horizontal
        {
            warnings.push(format!(
                "Pattern direction is ignored for '{}' patterns (2D layouts have no direction)",
                settings.pattern_type
            ));
        }

        for warning in &warnings {
            warn!("{}", warning);
        }

        Ok(Self { settings, warnings })
    }

    /// The settings these parameters were built from.
    pub fn settings(&self) -> &KerfSettings {
        &self.settings
    }

    /// Advisory warnings raised during validation.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn material_width(&self) -> f64 {
        self.settings.material_width
    }

    pub fn material_height(&self) -> f64 {
        self.settings.material_height
    }

    pub fn material_thickness(&self) -> f64 {
        self.settings.material_thickness
    }

    pub fn kerf_width(&self) -> f64 {
        self.settings.kerf_width
    }

    pub fn cut_spacing(&self) -> f64 {
        self.settings.cut_spacing
    }

    pub fn cut_length(&self) -> f64 {
        self.settings.cut_length
    }

    pub fn cut_offset(&self) -> f64 {
        self.settings.cut_offset
    }

    pub fn pattern_type(&self) -> PatternType {
        self.settings.pattern_type
    }

    pub fn pattern_direction(&self) -> PatternDirection {
        self.settings.pattern_direction
    }

    pub fn num_vertical_rows(&self) -> Option<u32> {
        self.settings.num_vertical_rows
    }

    pub fn material_name(&self) -> Option<&str> {
        self.settings.material_name.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.settings.notes.as_deref()
    }

    /// Estimated bend radius (mm).
    pub fn bend_radius(&self) -> f64 {
        bend_radius_formula(
            self.material_thickness(),
            self.cut_spacing(),
            self.kerf_width(),
        )
    }

    /// Maximum practical bend angle (degrees).
    pub fn max_bend_angle(&self) -> f64 {
        max_bend_angle_formula(self.material_thickness(), self.cut_spacing())
    }

    /// Rows the diamond/oval layout stacks. Always 1 for straight cuts.
    pub fn effective_num_rows(&self) -> usize {
        if self.pattern_type() == PatternType::Straight {
            return 1;
        }
        match self.num_vertical_rows() {
            Some(rows) => (rows as usize).max(1),
            None => calculate_num_rows(self.material_height(), DEFAULT_ROW_HEIGHT_THRESHOLD),
        }
    }

    /// Estimated cut count (straight) or shape count (diamond/oval).
    pub fn num_cuts(&self) -> usize {
        match self.pattern_type() {
            PatternType::Straight => {
                let dimension = match self.pattern_direction() {
                    PatternDirection::Horizontal => self.material_height(),
                    PatternDirection::Vertical => self.material_width(),
                };
                estimate_number_of_cuts(dimension, self.cut_spacing(), self.cut_offset())
            }
            PatternType::Diamond | PatternType::Oval => {
                let per_row = estimate_shape_count(
                    self.material_width(),
                    self.cut_length(),
                    self.cut_spacing(),
                    self.cut_offset(),
                );
                per_row.saturating_mul(self.effective_num_rows())
            }
        }
    }

    /// Multi-line human readable description.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Kerf Pattern Parameters".to_string(),
            "=".repeat(50),
            format!(
                "Material: {} × {} × {} mm",
                self.material_width(),
                self.material_height(),
                self.material_thickness()
            ),
        ];

        if let Some(name) = self.material_name() {
            lines.push(format!("Material Type: {name}"));
        }

        lines.push(format!("Kerf Width: {} mm", self.kerf_width()));
        lines.push(format!("Cut Spacing: {} mm", self.cut_spacing()));
        lines.push(format!("Cut Length: {} mm", self.cut_length()));
        lines.push(format!("Cut Offset: {} mm", self.cut_offset()));
        lines.push(format!("Pattern Type: {}", self.pattern_type()));

        if self.pattern_type() == PatternType::Straight {
            lines.push(format!("Pattern Direction: {}", self.pattern_direction()));
        }

        let noun = if self.pattern_type().is_shape_pattern() {
            "Shapes"
        } else {
            "Cuts"
        };
        lines.push(String::new());
        lines.push("Calculated Properties:".to_string());
        lines.push(format!("  Estimated {noun}: {}", self.num_cuts()));

        if self.pattern_type().is_shape_pattern() {
            let auto = if self.num_vertical_rows().is_none() {
                " (auto)"
            } else {
                ""
            };
            lines.push(format!(
                "  Vertical Rows: {}{auto}",
                self.effective_num_rows()
            ));
        }

        lines.push(format!("  Bend Radius: {:.2} mm", self.bend_radius()));
        lines.push(format!("  Max Bend Angle: {:.1}°", self.max_bend_angle()));

        if let Some(notes) = self.notes() {
            lines.push(String::new());
            lines.push(format!("Notes: {notes}"));
        }

        lines.join("\n")
    }
}

impl TryFrom<KerfSettings> for KerfParameters {
    type Error = KerfError;

    fn try_from(settings: KerfSettings) -> Result<Self, Self::Error> {
        Self::new(settings)
    }
}

impl fmt::Display for KerfParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KerfParameters({}×{}×{}mm, spacing={}mm, {})",
            self.material_width(),
            self.material_height(),
            self.material_thickness(),
            self.cut_spacing(),
            self.pattern_direction()
        )
    }
}
