//! Calibration test strips
//!
//! Small straight-cut strips at a series of spacings, cut from the same sheet
//! to find which spacing bends best for a given material.

use crate::error::{KerfError, KerfResult};
use crate::parameters::{KerfParameters, KerfSettings, PatternDirection, PatternType};

pub const STRIP_WIDTH: f64 = 80.0;
pub const STRIP_HEIGHT: f64 = 80.0;
pub const STRIP_CUT_LENGTH: f64 = 60.0;
pub const STRIP_CUT_OFFSET: f64 = 10.0;

/// One test strip per spacing, in the given order.
///
/// Fails on the first spacing that does not produce valid parameters.
pub fn calibration_strips(
    material_name: &str,
    thickness: f64,
    kerf_width: f64,
    spacings: &[f64],
) -> KerfResult<Vec<KerfParameters>> {
    if spacings.is_empty() {
        return Err(KerfError::InvalidArgument(
            "at least one test spacing is required".to_string(),
        ));
    }

    spacings
        .iter()
        .enumerate()
        .map(|(i, &spacing)| {
            KerfParameters::new(KerfSettings {
                material_width: STRIP_WIDTH,
                material_height: STRIP_HEIGHT,
                material_thickness: thickness,
                kerf_width,
                cut_spacing: spacing,
                cut_length: STRIP_CUT_LENGTH,
                cut_offset: STRIP_CUT_OFFSET,
                pattern_type: PatternType::Straight,
                pattern_direction: PatternDirection::Horizontal,
                num_vertical_rows: None,
                material_name: Some(material_name.to_string()),
                notes: Some(format!("Test strip {}: {}mm spacing", i + 1, spacing)),
            })
        })
        .collect()
}
