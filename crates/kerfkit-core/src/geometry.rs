//! Geometric model for kerf bending
//!
//! Closed-form approximations for living hinge behaviour: bend radius, the
//! spacing needed for a target radius, the practical bend angle limit, safe
//! spacing, and the layout estimates used by the pattern generators.
//!
//! The bend radius model is empirical:
//!
//! ```text
//! bend_radius ≈ (material_thickness × cut_spacing) / (2 × kerf_width)
//! ```
//!
//! It assumes the neutral axis stays on the material centreline and that the
//! bend happens by rotation of the strips left between cuts. Grain, elasticity
//! and temperature are ignored.

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

/// Maximum row height before diamond/oval patterns are stacked into bands (mm).
pub const DEFAULT_ROW_HEIGHT_THRESHOLD: f64 = 150.0;

/// Practical cap on the bend angle (degrees).
pub const MAX_PRACTICAL_BEND_ANGLE: f64 = 90.0;

/// Living hinge spacing above this (mm) gets a stiffness warning.
pub const WIDE_HINGE_SPACING: f64 = 8.0;

/// Kerf widths below this (mm) get a warning.
pub const MIN_TYPICAL_KERF: f64 = 0.05;

/// Spacing regime used by [`minimum_spacing`] and [`validate_pattern_parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Straight,
    Diamond,
    Oval,
    /// Cuts that must keep the part rigid.
    #[default]
    Structural,
}

impl PatternKind {
    /// Straight, diamond and oval patterns are living hinges.
    pub fn is_living_hinge(&self) -> bool {
        !matches!(self, PatternKind::Structural)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Straight => "straight",
            PatternKind::Diamond => "diamond",
            PatternKind::Oval => "oval",
            PatternKind::Structural => "structural",
        }
    }
}

fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::not_positive(name, value))
    }
}

pub(crate) fn bend_radius_formula(thickness: f64, spacing: f64, kerf: f64) -> f64 {
    (thickness * spacing) / (2.0 * kerf)
}

pub(crate) fn max_bend_angle_formula(thickness: f64, spacing: f64) -> f64 {
    // Small angle approximation: the kerf closes at roughly spacing / thickness radians.
    (spacing / thickness).to_degrees().min(MAX_PRACTICAL_BEND_ANGLE)
}

/// Approximate bend radius (mm) of a living hinge.
///
/// `cut_length` is part of the signature but does not enter the formula.
pub fn bend_radius(
    material_thickness: f64,
    cut_spacing: f64,
    kerf_width: f64,
    _cut_length: f64,
) -> ParameterResult<f64> {
    require_positive("Cut spacing", cut_spacing)?;
    require_positive("Kerf width", kerf_width)?;
    require_positive("Material thickness", material_thickness)?;
    Ok(bend_radius_formula(
        material_thickness,
        cut_spacing,
        kerf_width,
    ))
}

/// Cut spacing (mm) needed to reach `target_bend_radius`.
///
/// Exact inverse of [`bend_radius`].
pub fn required_spacing(
    target_bend_radius: f64,
    material_thickness: f64,
    kerf_width: f64,
) -> ParameterResult<f64> {
    require_positive("Target bend radius", target_bend_radius)?;
    require_positive("Material thickness", material_thickness)?;
    require_positive("Kerf width", kerf_width)?;
    Ok((2.0 * kerf_width * target_bend_radius) / material_thickness)
}

/// Maximum practical bend angle in degrees, capped at 90.
///
/// `cut_length` is part of the signature but does not enter the formula.
pub fn max_bend_angle(
    material_thickness: f64,
    cut_spacing: f64,
    _cut_length: f64,
) -> ParameterResult<f64> {
    require_positive("Cut spacing", cut_spacing)?;
    require_positive("Material thickness", material_thickness)?;
    Ok(max_bend_angle_formula(material_thickness, cut_spacing))
}

/// Minimum safe spacing between cuts (mm).
///
/// Living hinges want tight spacing: at least 2 mm and ten kerf widths, and
/// `safety_factor` is not applied. Structural cuts use
/// `max(1.5 × thickness, 3 × kerf) × safety_factor`.
pub fn minimum_spacing(
    material_thickness: f64,
    kerf_width: f64,
    safety_factor: f64,
    kind: PatternKind,
) -> ParameterResult<f64> {
    require_positive("Material thickness", material_thickness)?;
    require_positive("Kerf width", kerf_width)?;
    require_positive("Safety factor", safety_factor)?;

    if kind.is_living_hinge() {
        Ok(f64::max(2.0, kerf_width * 10.0))
    } else {
        Ok(f64::max(material_thickness * 1.5, kerf_width * 3.0) * safety_factor)
    }
}

/// Flat length (mm) of the arc a hinge forms when bent by `bend_angle` degrees.
///
/// `desired_bend_length` is validated but the result depends only on the
/// radius and angle.
pub fn hinge_length(
    desired_bend_length: f64,
    bend_angle: f64,
    bend_radius: f64,
) -> ParameterResult<f64> {
    require_positive("Desired bend length", desired_bend_length)?;
    require_positive("Bend angle", bend_angle)?;
    require_positive("Bend radius", bend_radius)?;
    Ok(bend_radius * bend_angle.to_radians())
}

/// Outcome of [`validate_pattern_parameters`].
///
/// `violations` are hard failures, `warnings` are advisory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// `(is_valid, messages)` with violations listed before warnings.
    pub fn into_tuple(self) -> (bool, Vec<String>) {
        let is_valid = self.is_valid();
        let mut messages = self.violations;
        messages.extend(self.warnings);
        (is_valid, messages)
    }
}

/// Check that a set of pattern dimensions is physically reasonable.
#[allow(clippy::too_many_arguments)]
pub fn validate_pattern_parameters(
    material_width: f64,
    material_height: f64,
    material_thickness: f64,
    kerf_width: f64,
    cut_spacing: f64,
    cut_length: f64,
    cut_offset: f64,
    kind: PatternKind,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    // NaN fails every comparison below, so non-finite input is caught up front.
    for (name, value) in [
        ("Material width", material_width),
        ("Material height", material_height),
        ("Material thickness", material_thickness),
        ("Kerf width", kerf_width),
        ("Cut spacing", cut_spacing),
        ("Cut length", cut_length),
        ("Cut offset", cut_offset),
    ] {
        if !value.is_finite() {
            report
                .violations
                .push(format!("{name} must be a finite number, got {value}"));
        }
    }
    if !report.is_valid() {
        return report;
    }

    if material_width <= 0.0 || material_height <= 0.0 || material_thickness <= 0.0 {
        report
            .violations
            .push("Material dimensions must be positive".to_string());
    }
    if kerf_width <= 0.0 {
        report
            .violations
            .push("Kerf width must be positive".to_string());
    }
    if cut_spacing <= 0.0 {
        report
            .violations
            .push("Cut spacing must be positive".to_string());
    }
    if cut_length <= 0.0 {
        report
            .violations
            .push("Cut length must be positive".to_string());
    }
    if cut_offset < 0.0 {
        report
            .violations
            .push("Cut offset cannot be negative".to_string());
    }

    if cut_length >= material_height {
        report.violations.push(format!(
            "Cut length ({cut_length}mm) must be less than material height ({material_height}mm)"
        ));
    }
    if cut_length >= material_width {
        report.violations.push(format!(
            "Cut length ({cut_length}mm) must be less than material width ({material_width}mm)"
        ));
    }

    // Needs positive thickness and kerf; those are already violations otherwise.
    if let Ok(min_spacing) = minimum_spacing(material_thickness, kerf_width, 2.0, kind) {
        if cut_spacing < min_spacing {
            let consequence = if kind.is_living_hinge() {
                "Risk of warping or unreliable cuts. For living hinges, 3-5mm spacing is optimal."
            } else {
                "Risk of structural failure."
            };
            report.warnings.push(format!(
                "Cut spacing ({cut_spacing}mm) is below recommended minimum ({min_spacing:.2}mm). {consequence}"
            ));
        }
    }

    if kind.is_living_hinge() && cut_spacing > WIDE_HINGE_SPACING {
        report.warnings.push(format!(
            "Cut spacing ({cut_spacing}mm) is quite wide for a living hinge. \
             Consider 3-5mm for better flexibility. Wider spacing = stiffer hinge."
        ));
    }

    let span = cut_offset * 2.0 + cut_length;
    if span > material_height {
        report.violations.push(format!(
            "Cut length + offsets ({span}mm) exceeds material height"
        ));
    }
    if span > material_width {
        report.violations.push(format!(
            "Cut length + offsets ({span}mm) exceeds material width"
        ));
    }

    if kerf_width > material_thickness {
        report.warnings.push(format!(
            "Kerf width ({kerf_width}mm) is larger than material thickness ({material_thickness}mm). \
             This is unusual - verify your kerf width."
        ));
    }
    if kerf_width < MIN_TYPICAL_KERF {
        report.warnings.push(format!(
            "Kerf width ({kerf_width}mm) is very small. Typical laser kerf is 0.1-0.3mm."
        ));
    }

    report
}

/// Number of parallel cuts that fit along `material_dimension`.
///
/// Zero for non-finite input.
pub fn estimate_number_of_cuts(material_dimension: f64, cut_spacing: f64, cut_offset: f64) -> usize {
    if !(material_dimension > 0.0 && cut_spacing > 0.0) {
        return 0;
    }
    fit_count(material_dimension - 2.0 * cut_offset, cut_spacing)
}

/// `floor(available / step) + 1` positions, zero when nothing fits.
fn fit_count(available: f64, step: f64) -> usize {
    let steps = (available / step).floor();
    if !(available > 0.0 && steps.is_finite()) {
        return 0;
    }
    (steps as usize).saturating_add(1)
}

/// Number of shape columns that fit across `material_width`.
///
/// Each column holds one full or one split shape, so this is also the shape
/// count of a single row.
pub fn estimate_shape_count(
    material_width: f64,
    shape_size: f64,
    spacing: f64,
    offset: f64,
) -> usize {
    if !(material_width > 0.0 && shape_size > 0.0 && spacing > 0.0) {
        return 0;
    }
    fit_count(material_width - 2.0 * offset, spacing)
}

/// Number of stacked rows for diamond/oval patterns on tall material.
///
/// One row up to `height_threshold`; beyond that one row per full threshold,
/// plus one more when the remainder exceeds 30% of the threshold.
pub fn calculate_num_rows(material_height: f64, height_threshold: f64) -> usize {
    if !(material_height.is_finite() && height_threshold.is_finite())
        || material_height <= 0.0
        || height_threshold <= 0.0
        || material_height <= height_threshold
    {
        return 1;
    }

    let mut rows = (material_height / height_threshold).floor() as usize;
    let remainder = material_height % height_threshold;
    if remainder > height_threshold * 0.3 {
        rows = rows.saturating_add(1);
    }
    rows.max(1)
}
