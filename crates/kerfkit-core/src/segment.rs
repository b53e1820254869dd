//! Line segments, the only geometry a pattern is made of.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layer a segment belongs to.
///
/// Exporters keep this tag so cut geometry stays separate from reference geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Geometry the laser cuts
    #[default]
    Cuts,
    /// Reference-only material boundary
    Outline,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Cuts => "cuts",
            Layer::Outline => "outline",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A straight cut from `(x1, y1)` to `(x2, y2)` in millimeters.
///
/// The origin is the material's bottom-left corner with x to the right and y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub layer: Layer,
}

impl LineSegment {
    /// Segment on the `cuts` layer.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::on_layer(x1, y1, x2, y2, Layer::Cuts)
    }

    pub fn on_layer(x1: f64, y1: f64, x2: f64, y2: f64, layer: Layer) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            layer,
        }
    }

    pub(crate) fn between(from: (f64, f64), to: (f64, f64)) -> Self {
        Self::new(from.0, from.1, to.0, to.1)
    }

    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    pub fn midpoint(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line[({:.2}, {:.2}) -> ({:.2}, {:.2})]",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}
