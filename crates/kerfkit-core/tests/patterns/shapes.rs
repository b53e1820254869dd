use super::{sheet, EPS};
use kerfkit_core::patterns::{row_bands, shape_width, ROW_GAP};
use kerfkit_core::{
    generate_diamond_pattern, generate_living_hinge, generate_oval_pattern, KerfParameters,
    KerfSettings, LineSegment, PatternType,
};
use proptest::prelude::*;

fn assert_point(actual: (f64, f64), expected: (f64, f64)) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

fn start(line: &LineSegment) -> (f64, f64) {
    (line.x1, line.y1)
}

fn end(line: &LineSegment) -> (f64, f64) {
    (line.x2, line.y2)
}

#[test]
fn test_diamond_column_layout() {
    let params = sheet(150.0, 100.0, PatternType::Diamond, 40.0, 5.0);
    let lines = generate_diamond_pattern(&params);

    assert!((shape_width(&params) - 14.0).abs() < 1e-9);
    // 27 columns of four segments each, one row
    assert_eq!(lines.len(), 27 * 4);
    assert_eq!(lines, generate_living_hinge(&params));
}

#[test]
fn test_split_diamond_touches_row_edges() {
    let params = sheet(150.0, 100.0, PatternType::Diamond, 40.0, 5.0);
    let lines = generate_diamond_pattern(&params);

    // Column 0 starts at the 2.1 mm margin; V halves are 45 mm tall
    assert_point(start(&lines[0]), (2.1, 100.0));
    assert_point(end(&lines[0]), (9.1, 55.0));
    assert_point(end(&lines[1]), (16.1, 100.0));
    assert_point(start(&lines[2]), (2.1, 0.0));
    assert_point(end(&lines[2]), (9.1, 45.0));
    assert_point(end(&lines[3]), (16.1, 0.0));
}

#[test]
fn test_full_diamond_inset_from_row_edges() {
    let params = sheet(150.0, 100.0, PatternType::Diamond, 40.0, 5.0);
    let lines = generate_diamond_pattern(&params);

    // Column 1: top, right, bottom, left
    assert_point(start(&lines[4]), (14.1, 99.0));
    assert_point(start(&lines[5]), (21.1, 50.0));
    assert_point(start(&lines[6]), (14.1, 1.0));
    assert_point(start(&lines[7]), (7.1, 50.0));
    assert_point(end(&lines[7]), (14.1, 99.0));
}

#[test]
fn test_oval_column_layout() {
    let params = sheet(150.0, 100.0, PatternType::Oval, 40.0, 5.0);
    let lines = generate_oval_pattern(&params);

    // Oval margin is the cut offset: 26 columns, 32 segments per column
    assert_eq!(lines.len(), 26 * 32);
    assert_eq!(lines, generate_living_hinge(&params));
}

#[test]
fn test_split_oval_arcs() {
    let params = sheet(150.0, 100.0, PatternType::Oval, 40.0, 5.0);
    let lines = generate_oval_pattern(&params);
    let top = &lines[..16];
    let bottom = &lines[16..32];

    assert_point(start(&top[0]), (5.0, 100.0));
    assert_point(end(&top[15]), (19.0, 100.0));
    assert_point(end(&top[7]), (12.0, 65.0));
    assert_point(start(&bottom[0]), (5.0, 0.0));
    assert_point(end(&bottom[7]), (12.0, 35.0));

    assert!(top.iter().all(|l| l.y1 <= 100.0 && l.y2 <= 100.0));
    assert!(bottom.iter().all(|l| l.y1 >= 0.0 && l.y2 >= 0.0));
}

#[test]
fn test_full_oval_is_closed() {
    let params = sheet(150.0, 100.0, PatternType::Oval, 40.0, 5.0);
    let lines = generate_oval_pattern(&params);
    let oval = &lines[32..64];

    assert_point(start(&oval[0]), (24.0, 50.0));
    assert_point(end(&oval[31]), (24.0, 50.0));
    for pair in oval.windows(2) {
        assert_eq!(end(&pair[0]), start(&pair[1]));
    }
    let top = oval.iter().map(|l| l.y1).fold(f64::MIN, f64::max);
    let bottom = oval.iter().map(|l| l.y1).fold(f64::MAX, f64::min);
    assert!((top - 90.0).abs() < 1e-9);
    assert!((bottom - 10.0).abs() < 1e-9);
}

#[test]
fn test_tall_material_stacks_rows() {
    let params = sheet(100.0, 400.0, PatternType::Oval, 40.0, 5.0);
    assert_eq!(params.effective_num_rows(), 3);

    let bands = row_bands(&params);
    assert_eq!(bands.len(), 3);
    assert_eq!(bands[0].bottom, 0.0);
    assert_eq!(bands[2].top, 400.0);
    assert!((bands[1].bottom - bands[0].top - ROW_GAP).abs() < 1e-9);
    assert!((bands[2].bottom - bands[1].top - ROW_GAP).abs() < 1e-9);

    // Edge rows absorb the offset
    let interior = bands[1].height();
    assert!((bands[0].height() - interior - 5.0).abs() < 1e-9);
    assert!((bands[2].height() - interior - 5.0).abs() < 1e-9);

    let lines = generate_oval_pattern(&params);
    assert_eq!(lines.len(), 16 * 32 * 3);
}

#[test]
fn test_single_row_spans_material() {
    let params = sheet(150.0, 100.0, PatternType::Diamond, 40.0, 5.0);
    let bands = row_bands(&params);
    assert_eq!(bands.len(), 1);
    assert_eq!((bands[0].bottom, bands[0].top), (0.0, 100.0));
}

#[test]
fn test_no_room_for_rows_gives_empty_pattern() {
    for pattern_type in [PatternType::Diamond, PatternType::Oval] {
        let params = KerfParameters::new(KerfSettings {
            pattern_type,
            num_vertical_rows: Some(100),
            ..KerfSettings::default()
        })
        .unwrap();
        assert!(generate_living_hinge(&params).is_empty());
    }
}

fn shape_settings() -> impl Strategy<Value = KerfSettings> {
    (
        50.0f64..400.0,
        50.0f64..400.0,
        0.0f64..10.0,
        0.1f64..0.95,
        2.0f64..20.0,
        prop::option::of(1u32..6),
        prop::bool::ANY,
    )
        .prop_map(|(width, height, offset, fraction, spacing, rows, oval)| {
            let room = width.min(height) - 2.0 * offset;
            KerfSettings {
                material_width: width,
                material_height: height,
                cut_offset: offset,
                cut_length: room * fraction,
                cut_spacing: spacing,
                num_vertical_rows: rows,
                pattern_type: if oval {
                    PatternType::Oval
                } else {
                    PatternType::Diamond
                },
                ..KerfSettings::default()
            }
        })
}

proptest! {
    #[test]
    fn prop_shapes_stay_on_material(settings in shape_settings()) {
        let params = KerfParameters::new(settings).unwrap();
        let lines = generate_living_hinge(&params);
        let w = params.material_width();
        let h = params.material_height();

        for line in &lines {
            for (x, y) in [(line.x1, line.y1), (line.x2, line.y2)] {
                prop_assert!(x >= -EPS && x <= w + EPS, "x = {} outside 0..{}", x, w);
                prop_assert!(y >= -EPS && y <= h + EPS, "y = {} outside 0..{}", y, h);
            }
        }
    }
}
