//! Raw manifest to canonical [`Rule`] conversion.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, trace};

use rspec_model::{
    DEFAULT_CLEAN_CODE_ATTRIBUTE, MalformedRuleError, Parameter, RawRule, Remediation, Rule,
};

use crate::fields::{ManifestFields, scalar_text};

/// Manifest field names, as spelled in the rule catalog.
mod field {
    pub const TITLE: &str = "title";
    pub const TYPE: &str = "type";
    pub const DEFAULT_SEVERITY: &str = "defaultSeverity";
    pub const SCOPE: &str = "scope";
    pub const TAGS: &str = "tags";
    pub const CODE: &str = "code";
    pub const ATTRIBUTE: &str = "attribute";
    pub const PARAMETERS: &str = "parameters";
    pub const REMEDIATION: &str = "remediation";
    pub const CONSTANT_COST: &str = "constantCost";
    pub const COMPATIBLE_LANGUAGES: &str = "compatibleLanguages";
    pub const QUALITY_PROFILES: &str = "defaultQualityProfiles";
    pub const HTML_DOCUMENTATION: &str = "htmlDocumentation";

    pub const PARAM_NAME: &str = "name";
    pub const PARAM_DESCRIPTION: &str = "description";
    pub const PARAM_TYPE: &str = "type";
    pub const PARAM_DEFAULT_VALUE: &str = "defaultValue";
}

/// Normalize every raw rule of one language, stopping at the first malformed
/// manifest. Input order is preserved.
pub fn normalize_rules(
    language_key: &str,
    raw_rules: &[RawRule],
) -> Result<Vec<Rule>, MalformedRuleError> {
    let rules = raw_rules
        .iter()
        .map(|raw| normalize_rule(language_key, raw))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(language_key, rule_count = rules.len(), "normalized rules");
    Ok(rules)
}

/// Build one canonical rule from its raw manifest.
///
/// Fails without exposing a partial rule when `type`, `defaultSeverity`,
/// `scope`, `title`, the documentation, or any field of a declared parameter
/// is missing.
pub fn normalize_rule(language_key: &str, raw: &RawRule) -> Result<Rule, MalformedRuleError> {
    let name = raw.key.as_str();
    let fields = ManifestFields::new(name, &raw.manifest)?;

    let rule_type = constant_name(&fields, field::TYPE, fields.required_text(field::TYPE)?)?;
    let default_severity = constant_name(
        &fields,
        field::DEFAULT_SEVERITY,
        normalize_severity(&fields.required_text(field::DEFAULT_SEVERITY)?),
    )?;
    let scope = constant_name(
        &fields,
        field::SCOPE,
        normalize_scope(&fields.required_text(field::SCOPE)?),
    )?;
    let title = fields.required_text(field::TITLE)?;
    let html_documentation = raw
        .html_documentation
        .clone()
        .ok_or_else(|| fields.missing(field::HTML_DOCUMENTATION))?;

    let tags: BTreeSet<String> = fields
        .optional_text_list(field::TAGS)?
        .unwrap_or_default()
        .into_iter()
        .collect();

    let attribute_field = format!("{}.{}", field::CODE, field::ATTRIBUTE);
    let clean_code_attribute = match fields.optional_object(field::CODE)? {
        Some(code) => code
            .optional_text(field::ATTRIBUTE)
            .map_err(|_| fields.invalid(&attribute_field, "a string"))?,
        None => None,
    };
    let clean_code_attribute = match clean_code_attribute {
        Some(attribute) => constant_name(&fields, &attribute_field, attribute)?,
        None => DEFAULT_CLEAN_CODE_ATTRIBUTE.to_string(),
    };

    let parameters = normalize_parameters(&fields, name)?;
    let remediation = extract_remediation(&fields, name);

    let compatible_languages = fields
        .optional_text_list(field::COMPATIBLE_LANGUAGES)?
        .unwrap_or_else(|| vec![language_key.to_string()]);
    let quality_profiles = fields
        .optional_text_list(field::QUALITY_PROFILES)?
        .unwrap_or_default();

    trace!(rule = %name, language_key, "normalized rule");

    Ok(Rule {
        name: name.to_string(),
        title,
        html_documentation,
        rule_type,
        default_severity,
        tags,
        clean_code_attribute,
        scope,
        parameters,
        remediation,
        compatible_languages,
        quality_profiles,
    })
}

/// Map a catalog scope onto the analyzer's scope constant.
///
/// `Tests` becomes `TEST`; every other value is upper-cased as is.
pub fn normalize_scope(raw: &str) -> String {
    if raw == "Tests" {
        "TEST".to_string()
    } else {
        raw.to_uppercase()
    }
}

/// Severity constants are upper case (`Major` becomes `MAJOR`).
pub fn normalize_severity(raw: &str) -> String {
    raw.to_uppercase()
}

fn normalize_parameters(
    fields: &ManifestFields<'_>,
    rule: &str,
) -> Result<Vec<Parameter>, MalformedRuleError> {
    let Some(value) = fields.get(field::PARAMETERS) else {
        return Ok(Vec::new());
    };
    let entries = value
        .as_array()
        .ok_or_else(|| fields.invalid(field::PARAMETERS, "an array of objects"))?;

    let mut parameters = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Value::Object(object) = entry else {
            return Err(fields.invalid(&format!("{}[{index}]", field::PARAMETERS), "an object"));
        };
        let text = |key: &str| -> Result<String, MalformedRuleError> {
            let value = object
                .get(key)
                .filter(|value| !value.is_null())
                .ok_or_else(|| MalformedRuleError::MissingParameterField {
                    rule: rule.to_string(),
                    index,
                    field: key.to_string(),
                })?;
            scalar_text(value).ok_or_else(|| {
                fields.invalid(&format!("{}[{index}].{key}", field::PARAMETERS), "a string")
            })
        };
        parameters.push(Parameter {
            name: text(field::PARAM_NAME)?,
            description: text(field::PARAM_DESCRIPTION)?,
            param_type: constant_name(
                fields,
                &format!("{}[{index}].{}", field::PARAMETERS, field::PARAM_TYPE),
                text(field::PARAM_TYPE)?,
            )?,
            default_value: text(field::PARAM_DEFAULT_VALUE)?,
        });
    }
    Ok(parameters)
}

/// Type, severity, scope and attribute values end up as Java constant
/// references (`RuleType.BUG`), so they must be plain identifiers.
fn constant_name(
    fields: &ManifestFields<'_>,
    name: &str,
    value: String,
) -> Result<String, MalformedRuleError> {
    if is_constant_name(&value) {
        Ok(value)
    } else {
        Err(fields.invalid(name, "a constant name"))
    }
}

fn is_constant_name(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Only the constant-cost shape is modeled; any other remediation shape is
/// dropped rather than guessed at.
fn extract_remediation(fields: &ManifestFields<'_>, rule: &str) -> Option<Remediation> {
    let value = fields.get(field::REMEDIATION)?;
    let cost = value
        .as_object()
        .and_then(|object| object.get(field::CONSTANT_COST))
        .and_then(scalar_text);
    if cost.is_none() {
        debug!(rule = %rule, "dropping remediation without a constant cost");
    }
    cost.map(|cost| Remediation { cost })
}
