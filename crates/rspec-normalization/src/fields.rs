//! Typed field access over an untyped manifest tree.

use serde_json::{Map, Value};

use rspec_model::MalformedRuleError;

/// Read-only view of one manifest object, tied to the rule it belongs to so
/// every error can name the rule.
pub(crate) struct ManifestFields<'a> {
    rule: &'a str,
    object: &'a Map<String, Value>,
}

impl<'a> ManifestFields<'a> {
    pub(crate) fn new(rule: &'a str, manifest: &'a Value) -> Result<Self, MalformedRuleError> {
        match manifest {
            Value::Object(object) => Ok(Self { rule, object }),
            _ => Err(MalformedRuleError::InvalidField {
                rule: rule.to_string(),
                field: "manifest".to_string(),
                expected: "an object",
            }),
        }
    }

    /// Field value, with explicit `null` treated as absent.
    pub(crate) fn get(&self, name: &str) -> Option<&'a Value> {
        self.object.get(name).filter(|value| !value.is_null())
    }

    pub(crate) fn required_text(&self, name: &str) -> Result<String, MalformedRuleError> {
        let value = self.get(name).ok_or_else(|| self.missing(name))?;
        scalar_text(value).ok_or_else(|| self.invalid(name, "a string"))
    }

    pub(crate) fn optional_text(&self, name: &str) -> Result<Option<String>, MalformedRuleError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => scalar_text(value)
                .map(Some)
                .ok_or_else(|| self.invalid(name, "a string")),
        }
    }

    pub(crate) fn optional_text_list(
        &self,
        name: &str,
    ) -> Result<Option<Vec<String>>, MalformedRuleError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        let items = value
            .as_array()
            .ok_or_else(|| self.invalid(name, "an array of strings"))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                scalar_text(item).ok_or_else(|| self.invalid(&format!("{name}[{index}]"), "a string"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub(crate) fn optional_object(
        &self,
        name: &str,
    ) -> Result<Option<ManifestFields<'a>>, MalformedRuleError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Object(object)) => Ok(Some(Self {
                rule: self.rule,
                object,
            })),
            Some(_) => Err(self.invalid(name, "an object")),
        }
    }

    pub(crate) fn missing(&self, name: &str) -> MalformedRuleError {
        MalformedRuleError::MissingField {
            rule: self.rule.to_string(),
            field: name.to_string(),
        }
    }

    pub(crate) fn invalid(&self, name: &str, expected: &'static str) -> MalformedRuleError {
        MalformedRuleError::InvalidField {
            rule: self.rule.to_string(),
            field: name.to_string(),
            expected,
        }
    }
}

/// Text of a scalar JSON value. Numbers and booleans use their JSON spelling;
/// arrays, objects, and `null` have no text.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
