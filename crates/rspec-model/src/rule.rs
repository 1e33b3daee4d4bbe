//! Validated rule entities.
//!
//! These are plain value records: they are built once by normalization and
//! only ever shared by reference afterwards. Field names serialize in
//! camelCase so the exported rule data matches the catalog's vocabulary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Clean-code attribute used when a manifest does not declare one.
pub const DEFAULT_CLEAN_CODE_ATTRIBUTE: &str = "CONVENTIONAL";

/// A canonical static-analysis rule for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Rule key, unique within a language.
    pub name: String,
    pub title: String,
    /// Opaque markup blob.
    pub html_documentation: String,
    /// Analyzer rule type tag (e.g. `CODE_SMELL`).
    #[serde(rename = "type")]
    pub rule_type: String,
    /// Upper-cased severity (e.g. `MAJOR`).
    pub default_severity: String,
    /// Ordered lexicographically so every rendering is stable.
    pub tags: BTreeSet<String>,
    pub clean_code_attribute: String,
    /// Normalized scope (`MAIN`, `TEST`, `ALL`, ...).
    pub scope: String,
    /// Declared order is significant.
    pub parameters: Vec<Parameter>,
    pub remediation: Option<Remediation>,
    pub compatible_languages: Vec<String>,
    pub quality_profiles: Vec<String>,
}

impl Rule {
    /// Returns true if the rule may be registered for `language_key`.
    pub fn is_compatible_with(&self, language_key: &str) -> bool {
        self.compatible_languages
            .iter()
            .any(|language| language == language_key)
    }

    /// Returns true if the catalog assigns the rule to `profile_name`.
    pub fn is_in_profile(&self, profile_name: &str) -> bool {
        self.quality_profiles
            .iter()
            .any(|profile| profile == profile_name)
    }
}

/// A configurable rule parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub description: String,
    /// Analyzer parameter type tag (e.g. `INTEGER`).
    #[serde(rename = "type")]
    pub param_type: String,
    pub default_value: String,
}

/// Linear remediation with a constant cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remediation {
    /// Duration expression, copied verbatim (e.g. `5min`).
    pub cost: String,
}
