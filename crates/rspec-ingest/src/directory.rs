//! Rule catalog checkout discovery.
//!
//! A catalog checkout keeps one directory per rule key. Each rule directory
//! may hold a shared manifest plus one sub-directory per language:
//!
//! ```text
//! <rules_dir>/S100/metadata.json             shared by every language
//! <rules_dir>/S100/javascript/metadata.json  language-specific overrides
//! <rules_dir>/S100/javascript/rule.html      documentation
//! ```
//!
//! Documentation is read as pre-rendered HTML. A catalog checkout that only
//! carries AsciiDoc sources (`rule.adoc`) has to be rendered first; otherwise
//! every rule comes back without documentation and fails normalization.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, trace};

use rspec_model::RawRule;

use crate::error::{FetchError, Result};
use crate::source::RuleManifestSource;

/// Manifest file name, both at rule and at language level.
pub const METADATA_FILE: &str = "metadata.json";

/// Documentation file name inside a language directory.
pub const DOCUMENTATION_FILE: &str = "rule.html";

/// Reads raw manifests from a local catalog checkout.
#[derive(Debug, Clone)]
pub struct DirectoryManifestSource {
    rules_dir: PathBuf,
}

impl DirectoryManifestSource {
    pub fn new(rules_dir: impl Into<PathBuf>) -> Self {
        Self {
            rules_dir: rules_dir.into(),
        }
    }
}

impl RuleManifestSource for DirectoryManifestSource {
    fn rules_by_language(&self, language_key: &str) -> Result<Vec<RawRule>> {
        let mut rules = Vec::new();

        for rule_dir in list_rule_dirs(&self.rules_dir)? {
            let language_dir = rule_dir.join(language_key);
            let language_manifest_path = language_dir.join(METADATA_FILE);

            // Rules without a language-level manifest do not exist for this language.
            if !language_manifest_path.is_file() {
                continue;
            }

            let key = rule_dir
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| FetchError::InvalidRuleName {
                    path: rule_dir.clone(),
                })?;

            let mut manifest = match read_optional(&rule_dir.join(METADATA_FILE))? {
                Some(contents) => parse_manifest(&rule_dir.join(METADATA_FILE), &contents)?,
                None => Map::new(),
            };
            let language_contents = read_required(&language_manifest_path)?;
            let language_manifest = parse_manifest(&language_manifest_path, &language_contents)?;
            manifest.extend(language_manifest);

            let html_documentation = read_optional(&language_dir.join(DOCUMENTATION_FILE))?;
            if html_documentation.is_none() {
                debug!(rule = %key, language_key, "rule has no documentation file");
            }

            trace!(rule = %key, language_key, "loaded manifest");
            rules.push(RawRule::new(key, Value::Object(manifest), html_documentation));
        }

        debug!(
            language_key,
            rules_dir = %self.rules_dir.display(),
            rule_count = rules.len(),
            "fetched rule manifests"
        );
        Ok(rules)
    }
}

/// Lists rule directories under `rules_dir`.
///
/// Returns directories sorted by name; plain files are skipped.
pub fn list_rule_dirs(rules_dir: &Path) -> Result<Vec<PathBuf>> {
    if !rules_dir.is_dir() {
        return Err(FetchError::DirectoryNotFound {
            path: rules_dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(rules_dir).map_err(|e| FetchError::DirectoryRead {
        path: rules_dir.to_path_buf(),
        source: e,
    })?;

    let mut dirs = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| FetchError::DirectoryRead {
            path: rules_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

fn read_required(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FetchError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(FetchError::Read {
            path: path.to_path_buf(),
            source: error,
        }),
    }
}

fn parse_manifest(path: &Path, contents: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(contents).map_err(|e| FetchError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(FetchError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}
