use serde_json::Value;

/// One rule as delivered by a manifest source, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRule {
    /// Rule key, e.g. `S100`. Unique within a language.
    pub key: String,
    /// Untyped manifest tree. Only the normalizer reads fields from it.
    pub manifest: Value,
    /// Documentation blob, if the source had one.
    pub html_documentation: Option<String>,
}

impl RawRule {
    pub fn new(
        key: impl Into<String>,
        manifest: Value,
        html_documentation: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            manifest,
            html_documentation,
        }
    }
}
