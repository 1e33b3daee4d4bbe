//! Repository and quality-profile registrar generation.
//!
//! Both registrars are pure functions of `(rules, options)`. Each rule is
//! rendered into its own fragment; fragments are joined in input order and
//! wrapped with a fixed header and footer.

use std::collections::BTreeSet;

use tracing::debug;

use rspec_model::{Parameter, Rule};

use crate::escape::java_string;

/// Built-in quality profile name used when none is given.
pub const DEFAULT_PROFILE_NAME: &str = "Sonar way";

/// Repository display name used when none is given.
pub const DEFAULT_REPOSITORY_NAME: &str = "SonarAnalyzer";

const REPOSITORY_IMPORTS: &[&str] = &[
    "org.sonar.api.batch.rule.Severity",
    "org.sonar.api.rule.RuleScope",
    "org.sonar.api.rules.CleanCodeAttribute",
    "org.sonar.api.rules.RuleType",
    "org.sonar.api.server.rule.RuleParamType",
    "org.sonar.api.server.rule.RulesDefinition",
];

const PROFILE_IMPORTS: &[&str] = &["org.sonar.api.server.profile.BuiltInQualityProfilesDefinition"];

/// Generation parameters shared by both registrars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarOptions {
    /// Java package of the generated classes.
    pub package_name: String,
    /// Repository key; also the prefix of both class names.
    pub repository_key: String,
    /// Only rules compatible with this language are emitted.
    pub target_language_key: String,
    pub profile_name: String,
    pub repository_name: String,
}

impl RegistrarOptions {
    pub fn new(
        package_name: impl Into<String>,
        repository_key: impl Into<String>,
        target_language_key: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            repository_key: repository_key.into(),
            target_language_key: target_language_key.into(),
            profile_name: DEFAULT_PROFILE_NAME.to_string(),
            repository_name: DEFAULT_REPOSITORY_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_profile_name(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = profile_name.into();
        self
    }

    #[must_use]
    pub fn with_repository_name(mut self, repository_name: impl Into<String>) -> Self {
        self.repository_name = repository_name.into();
        self
    }
}

/// One generated Java compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub class_name: String,
    pub contents: String,
}

impl GeneratedSource {
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }
}

/// Both registrars for one rule list, plus the counts the run summary reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrars {
    pub repository: GeneratedSource,
    pub profile: GeneratedSource,
    /// Rules that passed the compatibility filter.
    pub emitted_rules: usize,
    /// Rules activated in the profile.
    pub activated_rules: usize,
}

pub fn repository_registrar_class_name(repository_key: &str) -> String {
    format!("{repository_key}RepositoryRegistrar")
}

pub fn profile_registrar_class_name(repository_key: &str) -> String {
    format!("{repository_key}ProfileRegistrar")
}

/// Rules compatible with `language_key`, in input order.
pub fn compatible_rules<'a>(rules: &'a [Rule], language_key: &str) -> Vec<&'a Rule> {
    rules
        .iter()
        .filter(|rule| rule.is_compatible_with(language_key))
        .collect()
}

/// Render both registrars for `rules`.
pub fn emit_registrars(rules: &[Rule], options: &RegistrarOptions) -> Registrars {
    let compatible = compatible_rules(rules, &options.target_language_key);
    let emitted_rules = compatible.len();
    let activated_rules = compatible
        .iter()
        .filter(|rule| rule.is_in_profile(&options.profile_name))
        .count();
    debug!(
        repository_key = %options.repository_key,
        target_language_key = %options.target_language_key,
        input_rules = rules.len(),
        emitted_rules,
        activated_rules,
        "rendering registrars"
    );

    Registrars {
        repository: render_repository_registrar(rules, options),
        profile: render_profile_registrar(rules, options),
        emitted_rules,
        activated_rules,
    }
}

/// Render the class that defines the rule repository.
///
/// One private `register*` routine is emitted per compatible rule, and
/// `define` calls them in the same order before closing the repository.
pub fn render_repository_registrar(rules: &[Rule], options: &RegistrarOptions) -> GeneratedSource {
    let class_name = repository_registrar_class_name(&options.repository_key);
    let compatible = compatible_rules(rules, &options.target_language_key);
    let routines = register_routine_names(&compatible);

    let mut lines = header_lines(&options.package_name, REPOSITORY_IMPORTS);
    lines.push(format!(
        "public class {class_name} implements RulesDefinition {{"
    ));
    lines.push("  @Override".to_string());
    lines.push("  public void define(Context context) {".to_string());
    lines.push("    NewRepository repository = context".to_string());
    lines.push(format!(
        "      .createRepository({}, {})",
        java_string(&options.repository_key),
        java_string(&options.target_language_key)
    ));
    lines.push(format!(
        "      .setName({});",
        java_string(&options.repository_name)
    ));
    lines.push(String::new());
    if !routines.is_empty() {
        lines.extend(
            routines
                .iter()
                .map(|routine| format!("    {routine}(repository);")),
        );
        lines.push(String::new());
    }
    lines.push("    repository.done();".to_string());
    lines.push("  }".to_string());

    for (rule, routine) in compatible.iter().zip(&routines) {
        lines.push(String::new());
        lines.extend(rule_routine_lines(rule, routine));
    }
    lines.push("}".to_string());

    GeneratedSource {
        class_name,
        contents: join_lines(&lines),
    }
}

/// Render the class that defines the built-in quality profile.
///
/// Only compatible rules assigned to the profile are activated.
pub fn render_profile_registrar(rules: &[Rule], options: &RegistrarOptions) -> GeneratedSource {
    let class_name = profile_registrar_class_name(&options.repository_key);
    let activations: Vec<String> = compatible_rules(rules, &options.target_language_key)
        .into_iter()
        .filter(|rule| rule.is_in_profile(&options.profile_name))
        .map(|rule| {
            format!(
                "    profile.activateRule({}, {});",
                java_string(&options.repository_key),
                java_string(&rule.name)
            )
        })
        .collect();

    let mut lines = header_lines(&options.package_name, PROFILE_IMPORTS);
    lines.push(format!(
        "public class {class_name} implements BuiltInQualityProfilesDefinition {{"
    ));
    lines.push("  @Override".to_string());
    lines.push("  public void define(Context context) {".to_string());
    lines.push(format!(
        "    NewBuiltInQualityProfile profile = context.createBuiltInQualityProfile({}, {});",
        java_string(&options.profile_name),
        java_string(&options.target_language_key)
    ));
    lines.push(String::new());
    if !activations.is_empty() {
        lines.extend(activations);
        lines.push(String::new());
    }
    lines.push("    profile.done();".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());

    GeneratedSource {
        class_name,
        contents: join_lines(&lines),
    }
}

/// Routine names for `rules`, in the same order.
///
/// Derived from the rule name with non-identifier characters replaced by
/// `_`; a numeric suffix keeps them unique if two names sanitize alike.
pub fn register_routine_names(rules: &[&Rule]) -> Vec<String> {
    let mut used = BTreeSet::new();
    rules
        .iter()
        .map(|rule| {
            let base = format!("register{}", sanitize_identifier(&rule.name));
            let mut candidate = base.clone();
            let mut suffix = 2;
            while !used.insert(candidate.clone()) {
                candidate = format!("{base}_{suffix}");
                suffix += 1;
            }
            candidate
        })
        .collect()
}

fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

fn rule_routine_lines(rule: &Rule, routine: &str) -> Vec<String> {
    let tags = rule
        .tags
        .iter()
        .map(|tag| java_string(tag))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("  private static void {routine}(NewRepository repository) {{"),
        format!(
            "    NewRule rule = repository.createRule({})",
            java_string(&rule.name)
        ),
        format!("      .setName({})", java_string(&rule.title)),
        format!("      .setType(RuleType.{})", rule.rule_type),
        format!(
            "      .setSeverity(Severity.{}.toString())",
            rule.default_severity
        ),
        format!("      .setTags({tags})"),
        format!(
            "      .setCleanCodeAttribute(CleanCodeAttribute.{})",
            rule.clean_code_attribute
        ),
        format!("      .setScope(RuleScope.{})", rule.scope),
        format!(
            "      .setHtmlDescription({});",
            java_string(&rule.html_documentation)
        ),
    ];
    if let Some(remediation) = &rule.remediation {
        lines.push(format!(
            "    rule.setDebtRemediationFunction(rule.debtRemediationFunctions().linear({}));",
            java_string(&remediation.cost)
        ));
    }
    lines.extend(rule.parameters.iter().flat_map(parameter_lines));
    lines.push("  }".to_string());
    lines
}

fn parameter_lines(parameter: &Parameter) -> [String; 4] {
    [
        format!("    rule.createParam({})", java_string(&parameter.name)),
        format!(
            "      .setDescription({})",
            java_string(&parameter.description)
        ),
        format!(
            "      .setDefaultValue({})",
            java_string(&parameter.default_value)
        ),
        format!("      .setType(RuleParamType.{});", parameter.param_type),
    ]
}

fn header_lines(package_name: &str, imports: &[&str]) -> Vec<String> {
    let mut lines = vec![format!("package {package_name};"), String::new()];
    lines.extend(imports.iter().map(|import| format!("import {import};")));
    lines.push(String::new());
    lines
}

fn join_lines(lines: &[String]) -> String {
    let mut contents = lines.join("\n");
    contents.push('\n');
    contents
}
