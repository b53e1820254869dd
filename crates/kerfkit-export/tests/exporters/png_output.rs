use super::pattern;
use kerfkit_core::PatternType;
use kerfkit_export::{PatternExporter, PngExporter};

#[test]
fn test_png_render_marks_cuts() {
    let (params, lines) = pattern(PatternType::Straight);
    // Just under one pixel per millimeter, with a 10 mm border
    let image = PngExporter::new(25, false, false).render(&lines, &params).unwrap();
    assert_eq!(image.dimensions(), (119, 217));

    let image = PngExporter {
        dpi: 254,
        show_grid: false,
        include_outline: false,
    }
    .render(&lines, &params)
    .unwrap();
    assert_eq!(image.dimensions(), (1200, 2200));

    // Background corner
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);

    // The first cut runs along y = 10 mm, i.e. pixel row 2000
    let on_cut = image.get_pixel(600, 2000).0;
    assert!(on_cut[0] > 150 && on_cut[1] < 100 && on_cut[2] < 100, "{on_cut:?}");

    // Halfway between the first two cuts
    assert_eq!(image.get_pixel(600, 1975).0, [255, 255, 255]);
}

#[test]
fn test_png_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.png");
    let (params, lines) = pattern(PatternType::Diamond);

    PngExporter::new(50, true, true).export(&lines, &params, &path).unwrap();

    let reloaded = image::open(&path).unwrap();
    let expected = PngExporter::new(50, true, true).render(&lines, &params).unwrap();
    assert_eq!(
        (reloaded.width(), reloaded.height()),
        expected.dimensions()
    );
}

#[test]
fn test_png_rejects_zero_dpi() {
    let (params, lines) = pattern(PatternType::Straight);
    assert!(PngExporter::new(0, true, true).render(&lines, &params).is_err());
}
