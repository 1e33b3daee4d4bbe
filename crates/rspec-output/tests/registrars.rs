//! Tests for repository and profile registrar generation.

use std::collections::BTreeSet;

use rspec_model::{Parameter, Remediation, Rule};
use rspec_output::{
    RegistrarOptions, emit_registrars, register_routine_names, render_profile_registrar,
    render_repository_registrar,
};

fn test_rule(name: &str) -> Rule {
    Rule {
        name: name.to_string(),
        title: format!("Rule {name}"),
        html_documentation: "<p>Function names should comply with a naming convention.</p>"
            .to_string(),
        rule_type: "CODE_SMELL".to_string(),
        default_severity: "MAJOR".to_string(),
        tags: BTreeSet::from(["convention".to_string()]),
        clean_code_attribute: "CONVENTIONAL".to_string(),
        scope: "MAIN".to_string(),
        parameters: vec![],
        remediation: None,
        compatible_languages: vec!["js".to_string()],
        quality_profiles: vec!["Sonar way".to_string()],
    }
}

fn max_parameter() -> Parameter {
    Parameter {
        name: "max".to_string(),
        description: "Max value".to_string(),
        param_type: "INTEGER".to_string(),
        default_value: "10".to_string(),
    }
}

fn test_options() -> RegistrarOptions {
    RegistrarOptions::new("org.sonar.plugins.javascript.rules", "javascript", "js")
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_repository_registrar_snapshot() {
    let mut rule = test_rule("S100");
    rule.parameters = vec![max_parameter()];
    rule.remediation = Some(Remediation {
        cost: "5min".to_string(),
    });

    let source = render_repository_registrar(&[rule], &test_options());

    assert_eq!(source.class_name, "javascriptRepositoryRegistrar");
    insta::assert_snapshot!("s100_repository_registrar", source.contents);
}

#[test]
fn test_profile_registrar_snapshot() {
    let in_profile = test_rule("S100");
    let mut not_in_profile = test_rule("S200");
    not_in_profile.quality_profiles.clear();
    let mut incompatible = test_rule("S300");
    incompatible.compatible_languages = vec!["ts".to_string()];

    let source = render_profile_registrar(
        &[in_profile, not_in_profile, incompatible],
        &test_options(),
    );

    assert_eq!(source.class_name, "javascriptProfileRegistrar");
    insta::assert_snapshot!("profile_registrar", source.contents);
}

#[test]
fn test_single_rule_end_to_end() {
    let mut rule = test_rule("S100");
    rule.parameters = vec![max_parameter()];

    let registrars = emit_registrars(&[rule], &test_options());
    let repository = &registrars.repository.contents;

    assert_eq!(count(repository, "private static void register"), 1);
    assert_eq!(count(repository, "registerS100(repository);"), 1);
    assert!(repository.contains("repository.createRule(\"S100\")"));
    assert!(repository.contains(".setSeverity(Severity.MAJOR.toString())"));
    assert!(repository.contains(".setScope(RuleScope.MAIN)"));
    assert!(repository.contains(".setTags(\"convention\")"));
    assert_eq!(count(repository, "rule.createParam("), 1);
    assert!(repository.contains("rule.createParam(\"max\")"));
    assert!(repository.contains(".setType(RuleParamType.INTEGER);"));
    assert!(repository.contains(".setDefaultValue(\"10\")"));
    assert_eq!(registrars.emitted_rules, 1);
    assert_eq!(registrars.activated_rules, 1);
}

#[test]
fn test_rule_without_remediation_has_no_remediation_statement() {
    let registrars = emit_registrars(&[test_rule("S100")], &test_options());
    assert!(!registrars.repository.contents.contains("setDebtRemediationFunction"));
}

#[test]
fn test_rule_with_remediation_uses_linear_cost() {
    let mut rule = test_rule("S100");
    rule.remediation = Some(Remediation {
        cost: "10min".to_string(),
    });
    let registrars = emit_registrars(&[rule], &test_options());
    assert!(registrars.repository.contents.contains(
        "rule.setDebtRemediationFunction(rule.debtRemediationFunctions().linear(\"10min\"));"
    ));
}

#[test]
fn test_rule_without_parameters_has_no_parameter_statement() {
    let registrars = emit_registrars(&[test_rule("S100")], &test_options());
    assert!(!registrars.repository.contents.contains("createParam"));
}

#[test]
fn test_parameters_keep_declared_order() {
    let mut rule = test_rule("S100");
    rule.parameters = vec![
        Parameter {
            name: "min".to_string(),
            description: "Min value".to_string(),
            param_type: "INTEGER".to_string(),
            default_value: "0".to_string(),
        },
        max_parameter(),
    ];
    let source = render_repository_registrar(&[rule], &test_options());
    let min = source.contents.find("createParam(\"min\")").unwrap();
    let max = source.contents.find("createParam(\"max\")").unwrap();
    assert!(min < max);
}

#[test]
fn test_incompatible_rules_never_appear() {
    let mut other = test_rule("S999");
    other.compatible_languages = vec!["ts".to_string()];

    let registrars = emit_registrars(&[test_rule("S100"), other], &test_options());

    assert!(!registrars.repository.contents.contains("S999"));
    assert!(!registrars.profile.contents.contains("S999"));
    assert_eq!(registrars.emitted_rules, 1);
}

#[test]
fn test_filtering_preserves_input_order() {
    let mut middle = test_rule("S200");
    middle.compatible_languages = vec!["ts".to_string()];
    let rules = vec![test_rule("S300"), middle, test_rule("S100")];

    let source = render_repository_registrar(&rules, &test_options());
    let call_300 = source.contents.find("registerS300(repository);").unwrap();
    let call_100 = source.contents.find("registerS100(repository);").unwrap();
    let body_300 = source.contents.find("void registerS300(").unwrap();
    let body_100 = source.contents.find("void registerS100(").unwrap();
    assert!(call_300 < call_100);
    assert!(body_300 < body_100);
}

#[test]
fn test_profile_activation_once_per_assigned_rule() {
    let mut unassigned = test_rule("S200");
    unassigned.quality_profiles = vec!["Sonar way Recommended".to_string()];

    let profile = render_profile_registrar(&[test_rule("S100"), unassigned], &test_options());

    assert_eq!(
        count(&profile.contents, "profile.activateRule(\"javascript\", \"S100\");"),
        1
    );
    assert!(!profile.contents.contains("\"S200\""));
}

#[test]
fn test_custom_profile_name() {
    let mut rule = test_rule("S100");
    rule.quality_profiles = vec!["Sonar way Recommended".to_string()];
    let options = test_options().with_profile_name("Sonar way Recommended");

    let registrars = emit_registrars(&[rule], &options);

    assert!(
        registrars
            .profile
            .contents
            .contains("context.createBuiltInQualityProfile(\"Sonar way Recommended\", \"js\");")
    );
    assert_eq!(registrars.activated_rules, 1);
}

#[test]
fn test_repository_name_override() {
    let options = test_options().with_repository_name("SonarJS");
    let source = render_repository_registrar(&[], &options);
    assert!(source.contents.contains(".setName(\"SonarJS\");"));
}

#[test]
fn test_empty_rule_list_still_defines_repository_and_profile() {
    let registrars = emit_registrars(&[], &test_options());
    assert!(registrars.repository.contents.contains("repository.done();"));
    assert!(!registrars.repository.contents.contains("private static void"));
    assert!(registrars.profile.contents.contains("profile.done();"));
    assert!(!registrars.profile.contents.contains("activateRule"));
    assert_eq!(registrars.emitted_rules, 0);
    assert_eq!(registrars.activated_rules, 0);
}

#[test]
fn test_emit_is_idempotent() {
    let mut rule = test_rule("S100");
    rule.tags = ["suspicious", "convention", "brain-overload"]
        .into_iter()
        .map(String::from)
        .collect();
    rule.parameters = vec![max_parameter()];
    let rules = vec![rule, test_rule("S200")];

    let first = emit_registrars(&rules, &test_options());
    let second = emit_registrars(&rules, &test_options());
    assert_eq!(first, second);
}

#[test]
fn test_tags_are_emitted_in_lexicographic_order() {
    let mut rule = test_rule("S100");
    rule.tags = ["suspicious", "convention", "brain-overload"]
        .into_iter()
        .map(String::from)
        .collect();
    let source = render_repository_registrar(&[rule], &test_options());
    assert!(
        source
            .contents
            .contains(".setTags(\"brain-overload\", \"convention\", \"suspicious\")")
    );
}

#[test]
fn test_empty_tags() {
    let mut rule = test_rule("S100");
    rule.tags.clear();
    let source = render_repository_registrar(&[rule], &test_options());
    assert!(source.contents.contains("      .setTags()\n"));
}

#[test]
fn test_escaping_keeps_literals_intact() {
    let mut rule = test_rule("S100");
    rule.title = "Say \"no\" to C:\\temp\nplease".to_string();
    rule.html_documentation = "<p class=\"x\">a\\b</p>\n<pre>\ttab</pre>".to_string();
    rule.parameters = vec![Parameter {
        name: "format".to_string(),
        description: "Use \"quotes\"".to_string(),
        param_type: "STRING".to_string(),
        default_value: "^[a-z]\\w*$".to_string(),
    }];

    let source = render_repository_registrar(&[rule], &test_options());

    assert!(
        source
            .contents
            .contains(r#".setName("Say \"no\" to C:\\temp\nplease")"#)
    );
    assert!(source.contents.contains(
        r#".setHtmlDescription("<p class=\"x\">a\\b</p>\n<pre>\ttab</pre>");"#
    ));
    assert!(source.contents.contains(r#".setDescription("Use \"quotes\"")"#));
    assert!(source.contents.contains(r#".setDefaultValue("^[a-z]\\w*$")"#));
    assert!(!source.contents.contains('\t'));
}

#[test]
fn test_routine_names_are_unique() {
    let rules = [test_rule("no-empty"), test_rule("no_empty"), test_rule("no.empty")];
    let refs: Vec<&Rule> = rules.iter().collect();
    assert_eq!(
        register_routine_names(&refs),
        vec!["registerno_empty", "registerno_empty_2", "registerno_empty_3"]
    );
}

mod properties {
    use proptest::prelude::*;

    use super::{test_options, test_rule};
    use rspec_output::emit_registrars;

    proptest! {
        #[test]
        fn emitted_sources_are_deterministic_ascii(
            title in any::<String>(),
            documentation in any::<String>(),
            description in any::<String>(),
        ) {
            let mut rule = test_rule("S100");
            rule.title = title;
            rule.html_documentation = documentation;
            rule.parameters = vec![rspec_model::Parameter {
                name: "max".to_string(),
                description,
                param_type: "INTEGER".to_string(),
                default_value: "10".to_string(),
            }];
            let rules = vec![rule];

            let first = emit_registrars(&rules, &test_options());
            let second = emit_registrars(&rules, &test_options());

            prop_assert!(first.repository.contents.is_ascii());
            prop_assert_eq!(first.repository.contents.lines().count(), 36);
            prop_assert_eq!(first, second);
        }
    }
}
