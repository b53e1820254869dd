//! # KerfKit Core
//!
//! Geometry and pattern generation for laser-cut living hinges.
//! Provides the bend formulas, validated pattern parameters, the straight,
//! diamond and oval generators, and statistics over the generated segments.
//!
//! Coordinates are millimeters with the origin at the bottom-left corner of
//! the material, x to the right and y up.

pub mod calibration;
pub mod error;
pub mod geometry;
pub mod parameters;
pub mod patterns;
pub mod segment;
pub mod stats;

pub use calibration::calibration_strips;

pub use error::{KerfError, KerfResult, ParameterError, ParameterResult};

pub use geometry::{
    bend_radius, calculate_num_rows, estimate_number_of_cuts, estimate_shape_count, hinge_length,
    max_bend_angle, minimum_spacing, required_spacing, validate_pattern_parameters, PatternKind,
    ValidationReport,
};

pub use parameters::{KerfParameters, KerfSettings, PatternDirection, PatternType};

pub use patterns::{
    generate_diamond_pattern, generate_living_hinge, generate_oval_pattern,
    generate_straight_cuts,
};

pub use segment::{Layer, LineSegment};

pub use stats::{
    generate_outline, pattern_bounds, pattern_statistics, Bounds, PatternReport,
    PatternStatistics,
};
