use thiserror::Error;

/// A raw manifest could not be turned into a [`crate::Rule`].
///
/// Every variant names the rule and the offending field path so the manifest
/// can be located in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRuleError {
    #[error("rule {rule}: missing required field `{field}`")]
    MissingField { rule: String, field: String },

    #[error("rule {rule}: parameter #{index} is missing required field `{field}`")]
    MissingParameterField {
        rule: String,
        index: usize,
        field: String,
    },

    #[error("rule {rule}: field `{field}` must be {expected}")]
    InvalidField {
        rule: String,
        field: String,
        expected: &'static str,
    },
}

impl MalformedRuleError {
    /// Name of the rule whose manifest was rejected.
    pub fn rule(&self) -> &str {
        match self {
            Self::MissingField { rule, .. }
            | Self::MissingParameterField { rule, .. }
            | Self::InvalidField { rule, .. } => rule,
        }
    }

    /// Field path that caused the rejection.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field, .. }
            | Self::MissingParameterField { field, .. }
            | Self::InvalidField { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, MalformedRuleError>;
