//! Pattern generation
//!
//! Every generator is a pure function of [`KerfParameters`] returning the
//! pattern as an ordered list of [`LineSegment`]s. Order carries no meaning
//! for cutting but is stable, so output is reproducible.

pub mod diamond;
pub mod layout;
pub mod oval;
pub mod straight;

pub use diamond::generate_diamond_pattern;
pub use layout::{column_slots, row_bands, shape_width, RowBand, ShapeSlot, ROW_GAP};
pub use oval::generate_oval_pattern;
pub use straight::{generate_horizontal_cuts, generate_straight_cuts, generate_vertical_cuts};

use crate::parameters::{KerfParameters, PatternType};
use crate::segment::LineSegment;

/// Generate the pattern selected by the parameters' pattern type.
pub fn generate_living_hinge(params: &KerfParameters) -> Vec<LineSegment> {
    match params.pattern_type() {
        PatternType::Straight => generate_straight_cuts(params),
        PatternType::Diamond => generate_diamond_pattern(params),
        PatternType::Oval => generate_oval_pattern(params),
    }
}
