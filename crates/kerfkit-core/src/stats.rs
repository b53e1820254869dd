//! Material outline and pattern statistics

use crate::parameters::KerfParameters;
use crate::segment::{Layer, LineSegment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four edges of the material: bottom, right, top, left.
///
/// Diamond and oval patterns put split shapes against the top and bottom
/// edges, so those two edges go on the `cuts` layer for them. Left and right
/// are always reference outline.
pub fn generate_outline(params: &KerfParameters) -> Vec<LineSegment> {
    let w = params.material_width();
    let h = params.material_height();
    let edge_layer = if params.pattern_type().is_shape_pattern() {
        Layer::Cuts
    } else {
        Layer::Outline
    };

    vec![
        LineSegment::on_layer(0.0, 0.0, w, 0.0, edge_layer),
        LineSegment::on_layer(w, 0.0, w, h, Layer::Outline),
        LineSegment::on_layer(w, h, 0.0, h, edge_layer),
        LineSegment::on_layer(0.0, h, 0.0, 0.0, Layer::Outline),
    ]
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Bounding box of a pattern. All zero for an empty pattern.
pub fn pattern_bounds(lines: &[LineSegment]) -> Bounds {
    let Some(first) = lines.first() else {
        return Bounds::default();
    };

    let init = Bounds {
        min_x: first.x1.min(first.x2),
        min_y: first.y1.min(first.y2),
        max_x: first.x1.max(first.x2),
        max_y: first.y1.max(first.y2),
    };

    lines.iter().skip(1).fold(init, |b, line| Bounds {
        min_x: b.min_x.min(line.x1).min(line.x2),
        min_y: b.min_y.min(line.y1).min(line.y2),
        max_x: b.max_x.max(line.x1).max(line.x2),
        max_y: b.max_y.max(line.y1).max(line.y2),
    })
}

/// Aggregate figures over a generated pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternStatistics {
    /// Number of segments
    pub num_cuts: usize,
    pub total_cut_length: f64,
    pub avg_cut_length: f64,
    pub bounds: Bounds,
}

/// Statistics over `lines`. Zeroed for an empty pattern.
pub fn pattern_statistics(lines: &[LineSegment]) -> PatternStatistics {
    if lines.is_empty() {
        return PatternStatistics::default();
    }

    let total: f64 = lines.iter().map(LineSegment::length).sum();
    PatternStatistics {
        num_cuts: lines.len(),
        total_cut_length: total,
        avg_cut_length: total / lines.len() as f64,
        bounds: pattern_bounds(lines),
    }
}

/// Parameter summary plus statistics of the generated pattern.
#[derive(Debug, Clone)]
pub struct PatternReport {
    pub summary: String,
    pub statistics: PatternStatistics,
}

impl PatternReport {
    pub fn new(params: &KerfParameters, lines: &[LineSegment]) -> Self {
        Self {
            summary: params.summary(),
            statistics: pattern_statistics(lines),
        }
    }
}

impl fmt::Display for PatternReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Pattern Statistics:")?;
        writeln!(f, "  Actual number of cuts: {}", self.statistics.num_cuts)?;
        writeln!(
            f,
            "  Total cut length: {:.2} mm",
            self.statistics.total_cut_length
        )?;
        writeln!(
            f,
            "  Average cut length: {:.2} mm",
            self.statistics.avg_cut_length
        )?;
        write!(f, "  Pattern bounds: {}", self.statistics.bounds)
    }
}
