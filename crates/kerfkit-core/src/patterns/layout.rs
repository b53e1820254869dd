//! Row and column layout shared by the diamond and oval generators.
//!
//! The material height is split into stacked bands separated by a fixed gap.
//! Inside a band, columns are laid out left to right; even columns hold a
//! split shape that runs into the band edges, odd columns a closed shape
//! inset from them.

use crate::parameters::KerfParameters;
use crate::segment::LineSegment;
use tracing::debug;

/// Vertical gap between stacked rows (mm).
pub const ROW_GAP: f64 = 2.0;

/// Shape width as a fraction of the configured cut length.
pub const SHAPE_WIDTH_RATIO: f64 = 0.35;

/// A horizontal band of the material holding one row of shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBand {
    pub bottom: f64,
    pub top: f64,
}

impl RowBand {
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn middle(&self) -> f64 {
        (self.bottom + self.top) / 2.0
    }
}

/// Column slot a shape is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSlot {
    /// Left edge of the shape
    pub left: f64,
    pub width: f64,
}

impl ShapeSlot {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Width of a diamond or oval for these parameters.
pub fn shape_width(params: &KerfParameters) -> f64 {
    params.cut_length() * SHAPE_WIDTH_RATIO
}

/// Stacked row bands, bottom to top.
///
/// Interior rows get the nominal height: the offset-reduced height minus the
/// gaps, divided evenly. The first row is stretched down to y = 0 and the last
/// row up to the material height, so both edge rows end up roughly `offset`
/// taller than the interior ones. A single row spans the whole material.
pub fn row_bands(params: &KerfParameters) -> Vec<RowBand> {
    let height = params.material_height();
    let offset = params.cut_offset();
    let rows = params.effective_num_rows();

    if rows <= 1 {
        return vec![RowBand {
            bottom: 0.0,
            top: height,
        }];
    }

    let available = height - 2.0 * offset;
    let nominal = (available - ROW_GAP * (rows - 1) as f64) / rows as f64;
    if nominal <= 0.0 {
        return Vec::new();
    }

    (0..rows)
        .map(|row| {
            let start = offset + row as f64 * (nominal + ROW_GAP);
            let bottom = if row == 0 { 0.0 } else { start };
            let top = if row == rows - 1 {
                height
            } else {
                start + nominal
            };
            RowBand { bottom, top }
        })
        .collect()
}

/// Column slots left to right, starting at `margin` and stepping by `spacing`,
/// up to the last one that stays inside `material_width - margin`.
///
/// Empty for non-finite input, non-positive spacing, or a spacing too small
/// to step across the width.
pub fn column_slots(material_width: f64, margin: f64, width: f64, spacing: f64) -> Vec<ShapeSlot> {
    let limit = material_width - margin;
    if !(limit.is_finite() && margin.is_finite() && width.is_finite()) || !(spacing > 0.0) {
        return Vec::new();
    }

    // Beyond 2^53 steps the column positions stop being distinct.
    let steps = ((limit - margin - width) / spacing).floor();
    if !(steps >= 0.0 && steps < (1u64 << f64::MANTISSA_DIGITS) as f64) {
        return Vec::new();
    }

    // One extra column absorbs rounding in the division; the bound check trims it.
    let count = (steps as usize).saturating_add(2);
    (0..count)
        .map(|col| ShapeSlot {
            left: margin + col as f64 * spacing,
            width,
        })
        .take_while(|slot| slot.right() <= limit)
        .collect()
}

/// Shape family drawn into the column layout.
pub(crate) trait ColumnShape {
    fn name(&self) -> &'static str;

    /// Horizontal keep-out at the left and right material edges.
    fn margin(&self, params: &KerfParameters) -> f64;

    /// Closed shape inset from the band edges.
    fn full(&self, slot: &ShapeSlot, band: &RowBand, out: &mut Vec<LineSegment>);

    /// Two open halves touching the band edges with a gap between them.
    fn split(&self, slot: &ShapeSlot, band: &RowBand, out: &mut Vec<LineSegment>);
}

/// Lay `shape` out over every row and column.
///
/// Returns an empty pattern when the margins leave no room.
pub(crate) fn generate_columns<S: ColumnShape>(
    params: &KerfParameters,
    shape: &S,
) -> Vec<LineSegment> {
    let width = shape_width(params);
    let margin = shape.margin(params);
    let available_width = params.material_width() - 2.0 * margin;
    let available_height = params.material_height() - 2.0 * params.cut_offset();

    if available_width <= 0.0 || available_height <= 0.0 {
        debug!(
            "No room for {} pattern: available {:.2} × {:.2} mm",
            shape.name(),
            available_width,
            available_height
        );
        return Vec::new();
    }

    let bands = row_bands(params);
    let slots = column_slots(params.material_width(), margin, width, params.cut_spacing());

    let mut lines = Vec::new();
    for band in &bands {
        for (col, slot) in slots.iter().enumerate() {
            if col % 2 == 0 {
                shape.split(slot, band, &mut lines);
            } else {
                shape.full(slot, band, &mut lines);
            }
        }
    }

    debug!(
        "Generated {} pattern: {} rows × {} columns, {} segments",
        shape.name(),
        bands.len(),
        slots.len(),
        lines.len()
    );

    lines
}
