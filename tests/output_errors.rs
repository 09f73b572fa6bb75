use std::fs;

use pm::{catalog, template, ErrorCode, LocalStore, PresetRegistry};

#[test]
fn unknown_template_lists_every_preset() {
    let registry = PresetRegistry::builtin();
    let err = template::resolve(&registry, "no-such-template-anywhere").unwrap_err();

    assert_eq!(err.code, ErrorCode::TemplateNotFound);
    for name in ["default", "framework", "library", "microservice", "minimal", "onboarding"] {
        assert!(err.message.contains(name), "message should list {}", name);
    }
    assert_eq!(err.available(), registry.names());
}

#[test]
fn duplicate_sections_in_file_are_rejected_with_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    fs::write(
        &path,
        r#"{"name": "dup", "sections": [
            {"name": "deploy", "group": "core", "title": "A"},
            {"name": "deploy", "group": "core", "title": "B"}
        ]}"#,
    )
    .unwrap();

    let err = template::resolve(&PresetRegistry::builtin(), path.to_str().unwrap()).unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidTemplate);
    assert!(err.message.contains("\"deploy\""));
    assert!(err.message.contains("\"core\""));
    assert_eq!(err.details["index"], 1);
    assert_eq!(err.details["source"], path.display().to_string());
}

#[test]
fn malformed_template_file_is_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = template::resolve(&PresetRegistry::builtin(), path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationInvalidJson);
}

#[test]
fn missing_section_enumerates_alternatives() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path().join(".pm"));
    fs::create_dir_all(dir.path().join(".pm/core")).unwrap();
    fs::write(dir.path().join(".pm/core/deploy.md"), "x").unwrap();
    fs::write(dir.path().join(".pm/core/overview.md"), "x").unwrap();

    let err = catalog::find_section(&store, "deplo").unwrap_err();

    assert_eq!(err.code, ErrorCode::SectionNotFound);
    assert_eq!(err.available(), vec!["core/deploy", "core/overview"]);
    assert!(err.message.contains("core/deploy, core/overview"));
    assert!(err
        .hints
        .iter()
        .any(|h| h.message == "Did you mean 'deploy'?"));
}
