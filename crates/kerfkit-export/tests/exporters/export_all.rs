use super::pattern;
use kerfkit_core::PatternType;
use kerfkit_export::{export_all, ExportFormat, ExportOptions};

#[test]
fn test_export_all_formats() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output").join("run");
    let (params, lines) = pattern(PatternType::Straight);
    let options = ExportOptions {
        dpi: 50,
        ..ExportOptions::default()
    };

    let written = export_all(&lines, &params, &out, "pattern", &ExportFormat::ALL, &options).unwrap();

    assert_eq!(written.len(), 3);
    assert_eq!(written[&ExportFormat::Dxf], out.join("pattern.dxf"));
    assert_eq!(written[&ExportFormat::Svg], out.join("pattern.svg"));
    assert_eq!(written[&ExportFormat::Png], out.join("pattern.png"));
    assert!(written.values().all(|p| p.is_file()));
}

#[test]
fn test_export_all_creates_directory_for_no_formats() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty");
    let (params, lines) = pattern(PatternType::Oval);

    let written = export_all(&lines, &params, &out, "pattern", &[], &ExportOptions::default()).unwrap();
    assert!(written.is_empty());
    assert!(out.is_dir());
}
