use super::pattern;
use kerfkit_core::PatternType;
use kerfkit_export::{PatternExporter, SvgExporter};

#[test]
fn test_svg_file_contains_every_segment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oval.svg");
    let (params, lines) = pattern(PatternType::Oval);

    SvgExporter::new(true).export(&lines, &params, &path).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("width=\"150mm\" height=\"100mm\""));
    assert_eq!(svg.matches("<line ").count(), lines.len() + 4);
    assert!(svg.trim_end().ends_with("</svg>"));
}
