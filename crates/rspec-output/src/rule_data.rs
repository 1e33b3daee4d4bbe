//! Per-rule documentation and metadata export.
//!
//! A straight transcription: the documentation blob is written as is and the
//! canonical rule is serialized to JSON. No escaping, no templating.

use tracing::debug;

use rspec_model::Rule;

use crate::error::ExportError;

pub const DOCUMENTATION_EXTENSION: &str = "html";
pub const DATA_EXTENSION: &str = "json";

/// A named text artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

/// The documentation/data pair exported for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDataArtifacts {
    pub rule_name: String,
    pub documentation: Artifact,
    pub data: Artifact,
}

/// Export every rule of `language_key`, in input order.
///
/// Unlike registrar emission there is no compatibility filter: every rule
/// fetched for the language is exported.
pub fn export_rule_data(
    rules: &[Rule],
    language_key: &str,
) -> Result<Vec<RuleDataArtifacts>, ExportError> {
    let exported = rules.iter().map(export_rule).collect::<Result<Vec<_>, _>>()?;
    debug!(language_key, rule_count = exported.len(), "exported rule data");
    Ok(exported)
}

fn export_rule(rule: &Rule) -> Result<RuleDataArtifacts, ExportError> {
    let mut data = serde_json::to_string_pretty(rule).map_err(|source| ExportError::Serialize {
        rule: rule.name.clone(),
        source,
    })?;
    data.push('\n');

    Ok(RuleDataArtifacts {
        rule_name: rule.name.clone(),
        documentation: Artifact {
            file_name: format!("{}.{DOCUMENTATION_EXTENSION}", rule.name),
            contents: rule.html_documentation.clone(),
        },
        data: Artifact {
            file_name: format!("{}.{DATA_EXTENSION}", rule.name),
            contents: data,
        },
    })
}
