use std::fs;

use pm::scaffold;
use pm::template;
use pm::{catalog, section, LocalStore, ManualStore, PresetRegistry};

fn manual_in(dir: &tempfile::TempDir) -> LocalStore {
    LocalStore::new(pm::paths::manual(dir.path()))
}

#[test]
fn default_preset_scaffolds_core_and_custom() {
    let dir = tempfile::tempdir().unwrap();
    let store = manual_in(&dir);
    let registry = PresetRegistry::builtin();

    let template = template::resolve(&registry, "").unwrap();
    let report = scaffold::apply(&scaffold::plan(&template), &store).unwrap();

    assert_eq!(report.template, "default");
    assert_eq!(report.created.len(), 7);
    assert!(report.skipped.is_empty());
    assert_eq!(store.list_groups().unwrap(), vec!["core", "custom"]);
    assert!(store.list_sections("custom").unwrap().is_empty());

    let deploy = catalog::find_section(&store, "deploy").unwrap();
    let section = catalog::load(&store, &deploy).unwrap();
    assert_eq!(section.title, "Deployment Guide");
    assert!(section.body.starts_with("# "));
}

#[test]
fn second_scaffold_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = manual_in(&dir);
    let template = PresetRegistry::builtin().load_preset("microservice").unwrap();
    let plan = scaffold::plan(&template);

    let first = scaffold::apply(&plan, &store).unwrap();
    let second = scaffold::apply(&plan, &store).unwrap();

    assert_eq!(first.created.len(), 9);
    assert!(second.created.is_empty());
    assert_eq!(second.skipped, first.created);
}

#[test]
fn existing_files_are_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = manual_in(&dir);
    store
        .write_if_absent("core/overview.md", "my own overview\n")
        .unwrap();

    let template = PresetRegistry::builtin().load_preset("minimal").unwrap();
    let report = scaffold::apply(&scaffold::plan(&template), &store).unwrap();

    assert_eq!(report.skipped, vec!["core/overview.md"]);
    assert_eq!(report.created, vec!["core/deploy.md", "core/contacts.md"]);
    assert_eq!(store.read("core/overview.md").unwrap(), "my own overview\n");
}

#[test]
fn every_preset_document_parses_back_to_its_definition() {
    let registry = PresetRegistry::builtin();
    for template in registry.list_presets() {
        for def in &template.sections {
            let parsed = section::parse(&def.name, &def.group, &scaffold::generate_content(def));
            assert_eq!(parsed.title, def.title, "{}/{}", template.name, def.name);
            assert_eq!(parsed.tags, def.tags, "{}/{}", template.name, def.name);
        }
    }
}

#[test]
fn template_file_scaffolds_custom_groups() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("ops.json");
    fs::write(
        &template_path,
        r#"{
            "name": "ops",
            "description": "Operations handbook",
            "sections": [
                {"name": "deploy", "group": "core", "title": "Ignored Title"},
                {"name": "rotation", "group": "oncall", "title": "On-call Rotation", "tags": ["oncall", "pager"]}
            ]
        }"#,
    )
    .unwrap();

    let store = manual_in(&dir);
    let template =
        template::resolve(&PresetRegistry::builtin(), template_path.to_str().unwrap()).unwrap();
    let report = scaffold::apply(&scaffold::plan(&template), &store).unwrap();

    assert_eq!(report.created, vec!["core/deploy.md", "oncall/rotation.md"]);
    assert_eq!(store.list_groups().unwrap(), vec!["core", "oncall", "custom"]);

    // Built-in documents win over the file's own metadata.
    let deploy = catalog::load(&store, &catalog::find_section(&store, "deploy").unwrap()).unwrap();
    assert_eq!(deploy.title, "Deployment Guide");

    let rotation =
        catalog::load(&store, &catalog::find_section(&store, "rotation").unwrap()).unwrap();
    assert_eq!(rotation.title, "On-call Rotation");
    assert_eq!(rotation.tags, vec!["oncall", "pager"]);
    assert!(rotation.body.contains("<!-- TODO: Document this section -->"));
}

#[test]
fn lookup_ignores_case_of_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = manual_in(&dir);
    store
        .write_if_absent("core/Deploy.md", "---\ntitle: Deploy\n---\nsteps")
        .unwrap();

    for query in ["deploy", "DEPLOY", "Deploy"] {
        let location = catalog::find_section(&store, query).unwrap();
        assert_eq!(location.name, "Deploy");
        assert_eq!(location.rel_path, "core/Deploy.md");
    }
}

#[test]
fn search_walks_every_group() {
    let dir = tempfile::tempdir().unwrap();
    let store = manual_in(&dir);
    store
        .write_if_absent("core/deploy.md", "Run the Release script\nthen wait")
        .unwrap();
    store
        .write_if_absent("custom/notes.md", "release notes live here")
        .unwrap();
    store.write_if_absent("custom/skip.txt", "release").unwrap();

    let matches = pm::search::search(&store, "RELEASE").unwrap();

    let found: Vec<(&str, usize)> = matches.iter().map(|m| (m.file.as_str(), m.line)).collect();
    assert_eq!(found, vec![("core/deploy.md", 1), ("custom/notes.md", 1)]);
    assert_eq!(matches[0].content, "Run the Release script");
}

#[test]
fn undecodable_document_is_still_listed_and_searched() {
    let dir = tempfile::tempdir().unwrap();
    let store = manual_in(&dir);
    store
        .write_if_absent("core/deploy.md", "---\ntitle: Deploy\n---\nrelease steps")
        .unwrap();
    fs::write(
        pm::paths::manual(dir.path()).join("core").join("legacy.md"),
        b"caf\xe9 release notes",
    )
    .unwrap();

    let names: Vec<String> = catalog::load_all(&store)
        .unwrap()
        .iter()
        .map(|s| s.qualified_name())
        .collect();
    assert_eq!(names, vec!["core/deploy", "core/legacy"]);

    let legacy = catalog::load(&store, &catalog::find_section(&store, "legacy").unwrap()).unwrap();
    assert_eq!(legacy.body, "caf\u{FFFD} release notes");

    let hits = pm::search::search(&store, "release").unwrap();
    assert_eq!(hits.len(), 2);
}
