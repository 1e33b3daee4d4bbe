//! Tests for the catalog checkout source.

use std::fs;
use std::path::Path;

use rspec_ingest::{DirectoryManifestSource, FetchError, RuleManifestSource, list_rule_dirs};
use serde_json::json;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        &root.join("S100/metadata.json"),
        r#"{"title": "Shared title", "type": "CODE_SMELL", "tags": ["convention"]}"#,
    );
    write(
        &root.join("S100/javascript/metadata.json"),
        r#"{"title": "Function names should comply with a naming convention", "defaultSeverity": "Minor"}"#,
    );
    write(&root.join("S100/javascript/rule.html"), "<p>S100 docs</p>");

    write(
        &root.join("S1000/javascript/metadata.json"),
        r#"{"title": "No shared manifest", "scope": "Tests"}"#,
    );

    write(
        &root.join("S200/java/metadata.json"),
        r#"{"title": "Java only"}"#,
    );
    write(&root.join("README.md"), "not a rule");

    dir
}

#[test]
fn lists_rule_dirs_sorted_and_skips_files() {
    let dir = catalog();
    let names: Vec<String> = list_rule_dirs(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["S100", "S1000", "S200"]);
}

#[test]
fn fetches_only_rules_with_language_manifest() {
    let dir = catalog();
    let source = DirectoryManifestSource::new(dir.path());

    let rules = source.rules_by_language("javascript").unwrap();
    let keys: Vec<&str> = rules.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["S100", "S1000"]);

    let java = source.rules_by_language("java").unwrap();
    assert_eq!(java.len(), 1);
    assert_eq!(java[0].key, "S200");

    assert!(source.rules_by_language("python").unwrap().is_empty());
}

#[test]
fn language_manifest_overrides_shared_manifest() {
    let dir = catalog();
    let source = DirectoryManifestSource::new(dir.path());

    let rules = source.rules_by_language("javascript").unwrap();
    let s100 = &rules[0];
    assert_eq!(
        s100.manifest,
        json!({
            "title": "Function names should comply with a naming convention",
            "type": "CODE_SMELL",
            "tags": ["convention"],
            "defaultSeverity": "Minor"
        })
    );
    assert_eq!(s100.html_documentation.as_deref(), Some("<p>S100 docs</p>"));
}

#[test]
fn missing_documentation_is_none() {
    let dir = catalog();
    let source = DirectoryManifestSource::new(dir.path());

    let rules = source.rules_by_language("javascript").unwrap();
    assert_eq!(rules[1].key, "S1000");
    assert!(rules[1].html_documentation.is_none());
}

#[test]
fn missing_rules_dir_is_fetch_error() {
    let dir = TempDir::new().unwrap();
    let source = DirectoryManifestSource::new(dir.path().join("does-not-exist"));
    let error = source.rules_by_language("javascript").unwrap_err();
    assert!(matches!(error, FetchError::DirectoryNotFound { .. }));
}

#[test]
fn invalid_json_is_fetch_error() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("S1/js/metadata.json"), "{ not json");
    let source = DirectoryManifestSource::new(dir.path());
    let error = source.rules_by_language("js").unwrap_err();
    assert!(matches!(error, FetchError::Json { .. }));
}

#[test]
fn non_object_manifest_is_fetch_error() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("S1/js/metadata.json"), "[1, 2, 3]");
    let source = DirectoryManifestSource::new(dir.path());
    let error = source.rules_by_language("js").unwrap_err();
    assert!(matches!(error, FetchError::NotAnObject { .. }));
}

#[cfg(unix)]
#[test]
fn non_utf8_rule_dir_is_fetch_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let rule_dir = dir.path().join(OsStr::from_bytes(b"S\xff100"));
    write(&rule_dir.join("js/metadata.json"), r#"{"title": "Broken name"}"#);
    let source = DirectoryManifestSource::new(dir.path());

    let error = source.rules_by_language("js").unwrap_err();

    match error {
        FetchError::InvalidRuleName { path } => assert_eq!(path, rule_dir),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn asciidoc_documentation_is_not_read() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("S1/js/metadata.json"), r#"{"title": "Adoc only"}"#);
    write(&dir.path().join("S1/js/rule.adoc"), "== Why is this an issue?");
    let source = DirectoryManifestSource::new(dir.path());

    let rules = source.rules_by_language("js").unwrap();

    assert_eq!(rules.len(), 1);
    assert!(rules[0].html_documentation.is_none());
}
