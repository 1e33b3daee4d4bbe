use std::collections::BTreeMap;

use rspec_model::RawRule;

use crate::error::Result;

/// Supplies raw rule manifests for one language key at a time.
///
/// Calls are synchronous and may block (clone, network, disk). The order of
/// the returned records is the order the pipeline emits them in.
pub trait RuleManifestSource {
    fn rules_by_language(&self, language_key: &str) -> Result<Vec<RawRule>>;
}

impl<S: RuleManifestSource + ?Sized> RuleManifestSource for &S {
    fn rules_by_language(&self, language_key: &str) -> Result<Vec<RawRule>> {
        (**self).rules_by_language(language_key)
    }
}

/// In-memory manifest source keyed by language.
///
/// Unknown language keys yield an empty list, like a catalog without any
/// rule for that language.
#[derive(Debug, Clone, Default)]
pub struct StaticManifestSource {
    rules: BTreeMap<String, Vec<RawRule>>,
}

impl StaticManifestSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rule` to the list for `language_key`.
    #[must_use]
    pub fn with_rule(mut self, language_key: impl Into<String>, rule: RawRule) -> Self {
        self.rules.entry(language_key.into()).or_default().push(rule);
        self
    }
}

impl RuleManifestSource for StaticManifestSource {
    fn rules_by_language(&self, language_key: &str) -> Result<Vec<RawRule>> {
        Ok(self.rules.get(language_key).cloned().unwrap_or_default())
    }
}
