//! Per-language generation pipeline.
//!
//! Every requested language key goes through the same stages, strictly in
//! sequence and one key at a time:
//!
//! 1. **Fetch**: raw manifests from a [`RuleManifestSource`]
//! 2. **Normalize**: every manifest into a canonical [`Rule`]
//! 3. **Render**: registrar sources or rule data artifacts
//! 4. **Write**: every artifact through a [`FileSink`]
//!
//! The first failure aborts the run. Files written for earlier keys are
//! left in place.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, info_span};

use rspec_ingest::{FetchError, RuleManifestSource};
use rspec_model::{MalformedRuleError, Rule};
use rspec_normalization::normalize_rules;
use rspec_output::{
    DEFAULT_PROFILE_NAME, DEFAULT_REPOSITORY_NAME, ExportError, FileSink, RegistrarOptions,
    WriteError, emit_registrars, export_rule_data,
};

/// Fatal pipeline failure for one language key.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    MalformedRule(#[from] MalformedRuleError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Settings for a registrar run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarRequest {
    pub language_keys: Vec<String>,
    pub target_dir: PathBuf,
    pub package_name: String,
    /// Repository key; defaults to the language key being generated.
    pub repository_key: Option<String>,
    /// Filter key for rule compatibility; defaults to the language key being
    /// generated.
    pub compatible_language_key: Option<String>,
    pub profile_name: String,
    pub repository_name: String,
}

impl RegistrarRequest {
    pub fn new(
        language_keys: Vec<String>,
        target_dir: impl Into<PathBuf>,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            language_keys,
            target_dir: target_dir.into(),
            package_name: package_name.into(),
            repository_key: None,
            compatible_language_key: None,
            profile_name: DEFAULT_PROFILE_NAME.to_string(),
            repository_name: DEFAULT_REPOSITORY_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_repository_key(mut self, repository_key: Option<String>) -> Self {
        self.repository_key = repository_key;
        self
    }

    #[must_use]
    pub fn with_compatible_language_key(mut self, language_key: Option<String>) -> Self {
        self.compatible_language_key = language_key;
        self
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

    /// Emitter options for one language key.
    pub fn registrar_options(&self, language_key: &str) -> RegistrarOptions {
        RegistrarOptions::new(
            self.package_name.as_str(),
            self.repository_key.as_deref().unwrap_or(language_key),
            self.compatible_language_key
                .as_deref()
                .unwrap_or(language_key),
        )
        .with_profile_name(self.profile_name.as_str())
        .with_repository_name(self.repository_name.as_str())
    }
}

/// Settings for a rule data run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDataRequest {
    pub language_keys: Vec<String>,
    pub target_dir: PathBuf,
}

impl RuleDataRequest {
    pub fn new(language_keys: Vec<String>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            language_keys,
            target_dir: target_dir.into(),
        }
    }
}

/// What one language key produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySummary {
    pub language_key: String,
    pub output_dir: PathBuf,
    pub rules_fetched: usize,
    /// Rules that made it into the artifacts.
    pub rules_emitted: usize,
    /// Profile activations; `None` for rule data runs.
    pub profile_activations: Option<usize>,
    /// Every path handed to the sink, in write order.
    pub files: Vec<PathBuf>,
}

/// Generate repository and profile registrars for every requested key.
pub fn generate_registrars<S, F>(
    source: &S,
    sink: &F,
    request: &RegistrarRequest,
) -> Result<Vec<KeySummary>>
where
    S: RuleManifestSource + ?Sized,
    F: FileSink + ?Sized,
{
    request
        .language_keys
        .iter()
        .map(|language_key| registrars_for_key(source, sink, request, language_key))
        .collect()
}

/// Export documentation and JSON metadata for every rule of every requested
/// key.
pub fn generate_rule_data<S, F>(
    source: &S,
    sink: &F,
    request: &RuleDataRequest,
) -> Result<Vec<KeySummary>>
where
    S: RuleManifestSource + ?Sized,
    F: FileSink + ?Sized,
{
    request
        .language_keys
        .iter()
        .map(|language_key| rule_data_for_key(source, sink, &request.target_dir, language_key))
        .collect()
}

fn registrars_for_key<S, F>(
    source: &S,
    sink: &F,
    request: &RegistrarRequest,
    language_key: &str,
) -> Result<KeySummary>
where
    S: RuleManifestSource + ?Sized,
    F: FileSink + ?Sized,
{
    let span = info_span!("registrars", language_key = %language_key);
    let _guard = span.enter();
    let output_dir = sink.resolve(&request.target_dir, &[language_key]);
    info!(
        "Generating {language_key} rule classes into {}",
        output_dir.display()
    );

    let rules = fetch_rules(source, language_key)?;
    let options = request.registrar_options(language_key);
    let registrars = emit_registrars(&rules, &options);

    let mut files = Vec::with_capacity(2);
    for generated in [&registrars.repository, &registrars.profile] {
        let file_name = generated.file_name();
        let path = sink.resolve(&output_dir, &[file_name.as_str()]);
        sink.write(&path, &generated.contents)?;
        files.push(path);
    }
    info!(
        rules_emitted = registrars.emitted_rules,
        profile_activations = registrars.activated_rules,
        "registrars complete"
    );

    Ok(KeySummary {
        language_key: language_key.to_string(),
        output_dir,
        rules_fetched: rules.len(),
        rules_emitted: registrars.emitted_rules,
        profile_activations: Some(registrars.activated_rules),
        files,
    })
}

fn rule_data_for_key<S, F>(
    source: &S,
    sink: &F,
    target_dir: &Path,
    language_key: &str,
) -> Result<KeySummary>
where
    S: RuleManifestSource + ?Sized,
    F: FileSink + ?Sized,
{
    let span = info_span!("rule_data", language_key = %language_key);
    let _guard = span.enter();
    let output_dir = sink.resolve(target_dir, &[language_key]);
    info!(
        "Generating {language_key} rule data into {}",
        output_dir.display()
    );

    let rules = fetch_rules(source, language_key)?;
    let exported = export_rule_data(&rules, language_key)?;

    let mut files = Vec::with_capacity(exported.len() * 2);
    for artifacts in &exported {
        for artifact in [&artifacts.documentation, &artifacts.data] {
            let path = sink.resolve(&output_dir, &[artifact.file_name.as_str()]);
            sink.write(&path, &artifact.contents)?;
            files.push(path);
        }
    }
    info!(rules_emitted = exported.len(), "rule data complete");

    Ok(KeySummary {
        language_key: language_key.to_string(),
        output_dir,
        rules_fetched: rules.len(),
        rules_emitted: exported.len(),
        profile_activations: None,
        files,
    })
}

/// Fetch and normalize all rules of one language. Nothing is rendered until
/// every rule is valid.
fn fetch_rules<S>(source: &S, language_key: &str) -> Result<Vec<Rule>>
where
    S: RuleManifestSource + ?Sized,
{
    let raw_rules = source.rules_by_language(language_key)?;
    debug!(rule_count = raw_rules.len(), "fetched manifests");
    let rules = normalize_rules(language_key, &raw_rules)?;
    Ok(rules)
}
