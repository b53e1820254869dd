use super::pattern;
use dxf::entities::EntityType;
use dxf::enums::{AcadVersion, Units};
use dxf::Drawing;
use kerfkit_core::PatternType;
use kerfkit_export::{DxfExporter, PatternExporter};
use std::fs::File;
use std::path::Path;

fn load(path: &Path) -> Drawing {
    let mut file = File::open(path).unwrap();
    Drawing::load(&mut file).unwrap()
}

fn count_lines(drawing: &Drawing, layer: &str) -> usize {
    drawing
        .entities()
        .filter(|e| e.common.layer == layer && matches!(e.specific, EntityType::Line(_)))
        .count()
}

#[test]
fn test_dxf_straight_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hinge.dxf");
    let (params, lines) = pattern(PatternType::Straight);

    DxfExporter::new(true).export(&lines, &params, &path).unwrap();
    let drawing = load(&path);

    assert_eq!(drawing.header.version, AcadVersion::R2000);
    assert_eq!(drawing.header.default_drawing_units, Units::Millimeters);
    assert!(drawing.layers().any(|l| l.name == "cuts"));
    assert!(drawing.layers().any(|l| l.name == "outline"));

    assert_eq!(count_lines(&drawing, "cuts"), 37);
    assert_eq!(count_lines(&drawing, "outline"), 4);

    let texts: Vec<String> = drawing
        .entities()
        .filter_map(|e| match &e.specific {
            EntityType::Text(text) => Some(text.value.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec!["Kerf Pattern: 5mm spacing, 80mm cuts, 0.2mm kerf".to_string()]
    );
}

#[test]
fn test_dxf_diamond_cuts_top_and_bottom_edges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diamond.dxf");
    let (params, lines) = pattern(PatternType::Diamond);

    DxfExporter::new(true).export(&lines, &params, &path).unwrap();
    let drawing = load(&path);

    assert_eq!(count_lines(&drawing, "cuts"), lines.len() + 2);
    assert_eq!(count_lines(&drawing, "outline"), 2);
}

#[test]
fn test_dxf_without_outline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("bare.dxf");
    let (params, lines) = pattern(PatternType::Straight);

    DxfExporter::new(false).export(&lines, &params, &path).unwrap();
    let drawing = load(&path);

    assert_eq!(drawing.entities().count(), lines.len());
    assert_eq!(count_lines(&drawing, "outline"), 0);
}
