//! Elongated oval pattern
//!
//! Same column layout as the diamond pattern with curved shapes: closed
//! ellipses in odd columns, and in even columns a pair of half-ellipse arcs
//! opening onto the row's top and bottom edges.

use super::layout::{generate_columns, ColumnShape, RowBand, ShapeSlot};
use crate::parameters::KerfParameters;
use crate::segment::LineSegment;
use std::f64::consts::PI;

/// Straight segments approximating a full oval.
pub const FULL_OVAL_SEGMENTS: usize = 32;

/// Straight segments approximating each half-oval arc.
pub const ARC_SEGMENTS: usize = 16;

/// Height of a full oval as a fraction of the row height.
pub const OVAL_HEIGHT_RATIO: f64 = 0.8;

/// Gap between split arcs as a fraction of the row height.
pub const OVAL_SPLIT_GAP_RATIO: f64 = 0.30;

struct Oval;

/// Half-ellipse from the left end to the right end of its chord, both included.
///
/// `bulge` is `1.0` for an arc rising above the chord and `-1.0` for one
/// hanging below it. Sweeping from π to 0 keeps every point on the bulge side.
fn half_ellipse(
    chord_center: (f64, f64),
    radii: (f64, f64),
    bulge: f64,
    segments: usize,
) -> Vec<(f64, f64)> {
    (0..=segments)
        .map(|i| {
            let angle = PI * (1.0 - i as f64 / segments as f64);
            (
                chord_center.0 + radii.0 * angle.cos(),
                chord_center.1 + bulge * radii.1 * angle.sin(),
            )
        })
        .collect()
}

fn push_polyline(points: &[(f64, f64)], out: &mut Vec<LineSegment>) {
    out.extend(
        points
            .windows(2)
            .map(|pair| LineSegment::between(pair[0], pair[1])),
    );
}

impl ColumnShape for Oval {
    fn name(&self) -> &'static str {
        "oval"
    }

    fn margin(&self, params: &KerfParameters) -> f64 {
        params.cut_offset()
    }

    fn full(&self, slot: &ShapeSlot, band: &RowBand, out: &mut Vec<LineSegment>) {
        let radii = (slot.width / 2.0, band.height() * OVAL_HEIGHT_RATIO / 2.0);
        let center = (slot.center(), band.middle());

        let points: Vec<(f64, f64)> = (0..FULL_OVAL_SEGMENTS)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / FULL_OVAL_SEGMENTS as f64;
                (
                    center.0 + radii.0 * angle.cos(),
                    center.1 + radii.1 * angle.sin(),
                )
            })
            .collect();

        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            out.push(LineSegment::between(from, to));
        }
    }

    fn split(&self, slot: &ShapeSlot, band: &RowBand, out: &mut Vec<LineSegment>) {
        let gap = band.height() * OVAL_SPLIT_GAP_RATIO;
        let arc_height = (band.height() - gap) / 2.0;
        let radii = (slot.width / 2.0, arc_height);
        let cx = slot.center();

        let top = half_ellipse((cx, band.top), radii, -1.0, ARC_SEGMENTS);
        push_polyline(&top, out);

        let bottom = half_ellipse((cx, band.bottom), radii, 1.0, ARC_SEGMENTS);
        push_polyline(&bottom, out);
    }
}

/// Generate the oval pattern. Empty when the margins leave no room.
pub fn generate_oval_pattern(params: &KerfParameters) -> Vec<LineSegment> {
    generate_columns(params, &Oval)
}
