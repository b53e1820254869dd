use super::EPS;
use kerfkit_core::{
    generate_living_hinge, generate_straight_cuts, KerfParameters, KerfSettings, Layer,
    PatternDirection,
};
use proptest::prelude::*;

#[test]
fn test_horizontal_cuts_basic_hinge() {
    let params = KerfParameters::new(KerfSettings::default()).unwrap();
    let lines = generate_straight_cuts(&params);

    assert_eq!(lines.len(), 37);
    assert_eq!(lines.len(), params.num_cuts());

    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.y1, line.y2);
        assert_eq!(line.y1, 10.0 + i as f64 * 5.0);
        assert_eq!(line.x1, 10.0);
        assert_eq!(line.x2, 90.0);
        assert_eq!(line.layer, Layer::Cuts);
    }
    assert_eq!(lines.last().unwrap().y1, 190.0);
}

#[test]
fn test_horizontal_cuts_centered() {
    let params = KerfParameters::new(KerfSettings {
        material_width: 150.0,
        cut_length: 60.0,
        ..KerfSettings::default()
    })
    .unwrap();
    let lines = generate_straight_cuts(&params);

    assert_eq!(lines[0].x1, 45.0);
    assert_eq!(lines[0].x2, 105.0);
    assert_eq!(lines[0].midpoint().0, 75.0);
}

#[test]
fn test_vertical_cuts_mirror_horizontal() {
    let params = KerfParameters::new(KerfSettings {
        material_width: 200.0,
        material_height: 100.0,
        cut_length: 60.0,
        pattern_direction: PatternDirection::Vertical,
        ..KerfSettings::default()
    })
    .unwrap();
    let lines = generate_straight_cuts(&params);

    assert_eq!(lines.len(), 37);
    assert_eq!(lines.len(), params.num_cuts());
    for pair in lines.windows(2) {
        assert!(pair[0].x1 < pair[1].x1);
    }
    for line in &lines {
        assert_eq!(line.x1, line.x2);
        assert_eq!(line.y1, 20.0);
        assert_eq!(line.y2, 80.0);
    }
}

#[test]
fn test_cut_on_far_bound_is_kept() {
    // Usable height 83 mm: cuts at 10..=90, 90 < 93
    let params = KerfParameters::new(KerfSettings {
        material_height: 103.0,
        ..KerfSettings::default()
    })
    .unwrap();
    let lines = generate_straight_cuts(&params);
    assert_eq!(lines.len(), 17);
    assert_eq!(lines.last().unwrap().y1, 90.0);
}

#[test]
fn test_generation_is_deterministic() {
    let params = KerfParameters::new(KerfSettings::default()).unwrap();
    assert_eq!(generate_living_hinge(&params), generate_living_hinge(&params));
}

fn straight_settings() -> impl Strategy<Value = KerfSettings> {
    (
        50.0f64..300.0,
        50.0f64..300.0,
        0.0f64..10.0,
        0.1f64..0.95,
        1.0f64..20.0,
        prop::bool::ANY,
    )
        .prop_map(|(width, height, offset, fraction, spacing, vertical)| {
            let room = width.min(height) - 2.0 * offset;
            KerfSettings {
                material_width: width,
                material_height: height,
                cut_offset: offset,
                cut_length: room * fraction,
                cut_spacing: spacing,
                pattern_direction: if vertical {
                    PatternDirection::Vertical
                } else {
                    PatternDirection::Horizontal
                },
                ..KerfSettings::default()
            }
        })
}

proptest! {
    #[test]
    fn prop_straight_cuts_stay_inside_offsets(settings in straight_settings()) {
        let params = KerfParameters::new(settings).unwrap();
        let lines = generate_straight_cuts(&params);
        let w = params.material_width();
        let h = params.material_height();
        let off = params.cut_offset();

        prop_assert!(lines.len() <= params.num_cuts());
        for line in &lines {
            match params.pattern_direction() {
                PatternDirection::Horizontal => prop_assert_eq!(line.y1, line.y2),
                PatternDirection::Vertical => prop_assert_eq!(line.x1, line.x2),
            }
            for (x, y) in [(line.x1, line.y1), (line.x2, line.y2)] {
                prop_assert!(x >= off - EPS && x <= w - off + EPS);
                prop_assert!(y >= off - EPS && y <= h - off + EPS);
            }
        }
    }
}
