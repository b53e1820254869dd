//! Elongated diamond pattern
//!
//! Columns of tall rhombi alternate with split diamonds: a V opening at the
//! top edge of the row and an inverted V opening at the bottom edge, their
//! apexes separated by a gap.

use super::layout::{generate_columns, shape_width, ColumnShape, RowBand, ShapeSlot};
use crate::parameters::KerfParameters;
use crate::segment::LineSegment;

/// Horizontal margin as a fraction of the diamond width.
pub const DIAMOND_MARGIN_RATIO: f64 = 0.15;

/// Top and bottom inset of a full diamond as a fraction of the row height.
pub const DIAMOND_INSET_RATIO: f64 = 0.01;

/// Gap between split halves as a fraction of the row height.
pub const DIAMOND_SPLIT_GAP_RATIO: f64 = 0.10;

struct Diamond;

impl ColumnShape for Diamond {
    fn name(&self) -> &'static str {
        "diamond"
    }

    fn margin(&self, params: &KerfParameters) -> f64 {
        shape_width(params) * DIAMOND_MARGIN_RATIO
    }

    fn full(&self, slot: &ShapeSlot, band: &RowBand, out: &mut Vec<LineSegment>) {
        let inset = band.height() * DIAMOND_INSET_RATIO;
        let cx = slot.center();
        let mid = band.middle();

        let top = (cx, band.top - inset);
        let right = (slot.right(), mid);
        let bottom = (cx, band.bottom + inset);
        let left = (slot.left, mid);

        out.push(LineSegment::between(top, right));
        out.push(LineSegment::between(right, bottom));
        out.push(LineSegment::between(bottom, left));
        out.push(LineSegment::between(left, top));
    }

    fn split(&self, slot: &ShapeSlot, band: &RowBand, out: &mut Vec<LineSegment>) {
        let total = band.height();
        let gap = total * DIAMOND_SPLIT_GAP_RATIO;
        let v_height = (total - gap) / 2.0;
        let cx = slot.center();

        // Top V, apex pointing down
        let apex = (cx, band.bottom + total - v_height);
        out.push(LineSegment::between((slot.left, band.top), apex));
        out.push(LineSegment::between(apex, (slot.right(), band.top)));

        // Bottom inverted V, apex pointing up
        let apex = (cx, band.bottom + v_height);
        out.push(LineSegment::between((slot.left, band.bottom), apex));
        out.push(LineSegment::between(apex, (slot.right(), band.bottom)));
    }
}

/// Generate the diamond pattern. Empty when the margins leave no room.
pub fn generate_diamond_pattern(params: &KerfParameters) -> Vec<LineSegment> {
    generate_columns(params, &Diamond)
}
