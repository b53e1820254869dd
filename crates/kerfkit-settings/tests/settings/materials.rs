use kerfkit_settings::{default_config_dir, MaterialLibrary, MaterialPreset};
use std::fs;

#[test]
fn test_standard_library() {
    let library = MaterialLibrary::standard();
    assert_eq!(library.len(), 4);

    let plywood = library.get("plywood_3mm").unwrap();
    assert_eq!(
        (plywood.thickness, plywood.kerf_width, plywood.recommended_spacing),
        (3.0, 0.2, 5.0)
    );
    let acrylic = library.get("acrylic_3mm").unwrap();
    assert_eq!(acrylic.kerf_width, 0.25);
    assert!(library.get("balsa").is_none());
}

#[test]
fn test_merge_custom_presets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("materials.json");
    let custom = vec![
        MaterialPreset::new("cork_4mm", "4mm Cork", 4.0, 0.3, 6.0),
        MaterialPreset::new("plywood_3mm", "3mm Poplar Plywood", 3.0, 0.18, 5.0),
    ];
    fs::write(&path, serde_json::to_string(&custom).unwrap()).unwrap();

    let mut library = MaterialLibrary::standard();
    assert_eq!(library.merge_file(&path).unwrap(), 2);
    assert_eq!(library.len(), 5);
    assert_eq!(library.get("plywood_3mm").unwrap().kerf_width, 0.18);
    assert_eq!(library.get("cork_4mm").unwrap().name, "4mm Cork");
}

#[test]
fn test_merge_missing_file_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = MaterialLibrary::standard();
    assert_eq!(library.merge_file(&dir.path().join("none.json")).unwrap(), 0);
    assert_eq!(library.len(), 4);
}

#[test]
fn test_merge_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("materials.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(MaterialLibrary::new().merge_file(&path).is_err());
}

#[test]
fn test_default_config_dir_ends_with_app_name() {
    if let Ok(dir) = default_config_dir() {
        assert!(dir.ends_with("kerfkit"));
    }
}
