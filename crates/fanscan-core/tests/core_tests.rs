use fanscan_core::{Diagnostic, DiagnosticKind, ScanConfig, ScanError, ScanEvent};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_file_event_renders_as_path() {
    let event = ScanEvent::FileFound {
        root: PathBuf::from("/r"),
        path: PathBuf::from("/r/A/a1.txt"),
    };

    assert_eq!(event.to_string(), "/r/A/a1.txt");
    assert_eq!(event.root(), Path::new("/r"));
    assert_eq!(event.file_path(), Some(Path::new("/r/A/a1.txt")));
    assert!(event.diagnostic().is_none());
}

#[test]
fn test_diagnostic_event_renders_as_message() {
    let event = ScanEvent::from(Diagnostic::not_found("missing1"));

    assert_eq!(event.to_string(), "Directory not found: missing1");
    assert_eq!(event.root(), Path::new("missing1"));
    assert!(event.file_path().is_none());
    assert_eq!(event.diagnostic().unwrap().kind, DiagnosticKind::NotFound);
}

#[test]
fn test_event_json_shape() {
    let event = ScanEvent::FileFound {
        root: PathBuf::from("/r"),
        path: PathBuf::from("/r/A/a1.txt"),
    };
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["type"], "file_found");
    assert_eq!(json["path"], "/r/A/a1.txt");

    let diag = ScanEvent::from(Diagnostic::not_found("/gone"));
    let json = serde_json::to_value(&diag).unwrap();
    assert_eq!(json["type"], "diagnostic");
    assert_eq!(json["kind"], "not_found");
}

#[test]
fn test_config_from_json_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fanscan.json");
    fs::write(
        &path,
        r#"{"roots": ["/srv/a", "/srv/b"], "include_hidden": false}"#,
    )
    .unwrap();

    let config = ScanConfig::from_json_file(&path).unwrap();
    assert_eq!(
        config.roots,
        vec![PathBuf::from("/srv/a"), PathBuf::from("/srv/b")]
    );
    assert!(!config.include_hidden);
    assert!(!config.follow_symlinks);
}

#[test]
fn test_config_from_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = ScanConfig::from_json_file(temp.path().join("nope.json")).unwrap_err();

    assert!(matches!(err, ScanError::NotFound { .. }));
}

#[test]
fn test_config_from_malformed_json() {
    let err = ScanConfig::from_json_str("{roots: ").unwrap_err();
    assert!(matches!(err, ScanError::InvalidConfig { .. }));
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[test]
fn test_config_json_roundtrip_keeps_defaults() {
    let config = ScanConfig::new(["/a", "/b"]);
    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(ScanConfig::from_json_str(&json).unwrap(), config);
}
