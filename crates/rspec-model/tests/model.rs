//! Tests for rspec-model types.

use std::collections::BTreeSet;

use rspec_model::{MalformedRuleError, Parameter, Remediation, Rule};
use serde_json::json;

fn test_rule() -> Rule {
    Rule {
        name: "S100".to_string(),
        title: "Rule S100".to_string(),
        html_documentation: "<p>Function names should comply with a convention</p>".to_string(),
        rule_type: "CODE_SMELL".to_string(),
        default_severity: "MAJOR".to_string(),
        tags: BTreeSet::from(["convention".to_string()]),
        clean_code_attribute: "IDENTIFIABLE".to_string(),
        scope: "MAIN".to_string(),
        parameters: vec![Parameter {
            name: "format".to_string(),
            description: "Regular expression used to check the names".to_string(),
            param_type: "STRING".to_string(),
            default_value: "^[a-z][a-zA-Z0-9]*$".to_string(),
        }],
        remediation: Some(Remediation {
            cost: "5min".to_string(),
        }),
        compatible_languages: vec!["js".to_string()],
        quality_profiles: vec!["Sonar way".to_string()],
    }
}

#[test]
fn rule_serializes_with_catalog_field_names() {
    let value = serde_json::to_value(test_rule()).expect("serialize rule");

    assert_eq!(value["name"], json!("S100"));
    assert_eq!(value["type"], json!("CODE_SMELL"));
    assert_eq!(value["defaultSeverity"], json!("MAJOR"));
    assert_eq!(value["cleanCodeAttribute"], json!("IDENTIFIABLE"));
    assert_eq!(value["htmlDocumentation"].as_str().map(str::len), Some(53));
    assert_eq!(value["tags"], json!(["convention"]));
    assert_eq!(value["parameters"][0]["type"], json!("STRING"));
    assert_eq!(value["parameters"][0]["defaultValue"], json!("^[a-z][a-zA-Z0-9]*$"));
    assert_eq!(value["remediation"], json!({ "cost": "5min" }));
    assert_eq!(value["compatibleLanguages"], json!(["js"]));
    assert_eq!(value["qualityProfiles"], json!(["Sonar way"]));
}

#[test]
fn absent_remediation_serializes_as_null() {
    let mut rule = test_rule();
    rule.remediation = None;
    let value = serde_json::to_value(&rule).expect("serialize rule");
    assert!(value["remediation"].is_null());
}

#[test]
fn rule_round_trips_through_json() {
    let rule = test_rule();
    let json = serde_json::to_string(&rule).expect("serialize rule");
    let round: Rule = serde_json::from_str(&json).expect("deserialize rule");
    assert_eq!(round, rule);
}

#[test]
fn tags_serialize_in_lexicographic_order() {
    let mut rule = test_rule();
    rule.tags = ["suspicious", "brain-overload", "convention"]
        .into_iter()
        .map(String::from)
        .collect();
    let value = serde_json::to_value(&rule).expect("serialize rule");
    assert_eq!(
        value["tags"],
        json!(["brain-overload", "convention", "suspicious"])
    );
}

#[test]
fn malformed_rule_error_exposes_context() {
    let error = MalformedRuleError::MissingParameterField {
        rule: "S100".to_string(),
        index: 1,
        field: "defaultValue".to_string(),
    };
    assert_eq!(error.rule(), "S100");
    assert_eq!(error.field(), "defaultValue");
    assert_eq!(
        error.to_string(),
        "rule S100: parameter #1 is missing required field `defaultValue`"
    );
}
