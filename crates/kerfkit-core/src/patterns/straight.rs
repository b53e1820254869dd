//! Parallel straight cuts
//!
//! Horizontal cuts run left-right, centred on the material width and stacked
//! upward from `offset`. Vertical cuts are the same layout with the axes swapped.

use crate::geometry::estimate_number_of_cuts;
use crate::parameters::{KerfParameters, PatternDirection};
use crate::segment::LineSegment;
use tracing::debug;

/// Straight cuts in the parameters' direction.
pub fn generate_straight_cuts(params: &KerfParameters) -> Vec<LineSegment> {
    let lines = match params.pattern_direction() {
        PatternDirection::Horizontal => generate_horizontal_cuts(params),
        PatternDirection::Vertical => generate_vertical_cuts(params),
    };
    debug!(
        "Generated {} {} straight cuts",
        lines.len(),
        params.pattern_direction()
    );
    lines
}

/// Cut positions along an axis of length `extent`, starting at `offset`.
///
/// Stops at the first position beyond `extent - offset`; a position exactly
/// on that bound is kept.
fn cut_positions(extent: f64, spacing: f64, offset: f64) -> Vec<f64> {
    let count = estimate_number_of_cuts(extent, spacing, offset);
    (0..count)
        .map(|i| offset + i as f64 * spacing)
        .take_while(|&position| position <= extent - offset)
        .collect()
}

/// Start and end of a cut of `length` centred in `extent` minus the offsets.
fn centered_span(extent: f64, length: f64, offset: f64) -> (f64, f64) {
    let available = extent - 2.0 * offset;
    let start = offset + (available - length) / 2.0;
    (start, start + length)
}

/// Horizontal cuts, bottom to top.
pub fn generate_horizontal_cuts(params: &KerfParameters) -> Vec<LineSegment> {
    let (start_x, end_x) = centered_span(
        params.material_width(),
        params.cut_length(),
        params.cut_offset(),
    );

    cut_positions(
        params.material_height(),
        params.cut_spacing(),
        params.cut_offset(),
    )
    .into_iter()
    .map(|y| LineSegment::new(start_x, y, end_x, y))
    .collect()
}

/// Vertical cuts, left to right.
pub fn generate_vertical_cuts(params: &KerfParameters) -> Vec<LineSegment> {
    let (start_y, end_y) = centered_span(
        params.material_height(),
        params.cut_length(),
        params.cut_offset(),
    );

    cut_positions(
        params.material_width(),
        params.cut_spacing(),
        params.cut_offset(),
    )
    .into_iter()
    .map(|x| LineSegment::new(x, start_y, x, end_y))
    .collect()
}
