use anyhow::{Context, Result};
use tracing::info_span;

use rspec_cli::pipeline::{
    KeySummary, RegistrarRequest, RuleDataRequest, generate_registrars, generate_rule_data,
};
use rspec_ingest::DirectoryManifestSource;
use rspec_output::{DryRunSink, FileSink, FsSink};

use crate::cli::{CatalogArgs, RegistrarsArgs, RuleDataArgs};
use crate::types::{RunMode, RunResult};

pub fn run_registrars(args: &RegistrarsArgs) -> Result<RunResult> {
    let catalog = &args.catalog;
    let _span = info_span!("run", mode = RunMode::Registrars.label()).entered();
    let source = DirectoryManifestSource::new(&catalog.rules_dir);
    let request = RegistrarRequest::new(
        catalog.language_keys.clone(),
        &catalog.target_dir,
        &args.package_name,
    )
    .with_repository_key(args.repository_key.clone())
    .with_compatible_language_key(args.compatible_language_key.clone())
    .with_profile_name(&args.profile_name)
    .with_repository_name(&args.repository_name);

    let keys = generate_registrars(&source, select_sink(catalog), &request)
        .with_context(|| format!("generate registrars from {}", catalog.rules_dir.display()))?;
    Ok(run_result(RunMode::Registrars, catalog, keys))
}

pub fn run_rule_data(args: &RuleDataArgs) -> Result<RunResult> {
    let catalog = &args.catalog;
    let _span = info_span!("run", mode = RunMode::RuleData.label()).entered();
    let source = DirectoryManifestSource::new(&catalog.rules_dir);
    let request = RuleDataRequest::new(catalog.language_keys.clone(), &catalog.target_dir);

    let keys = generate_rule_data(&source, select_sink(catalog), &request)
        .with_context(|| format!("export rule data from {}", catalog.rules_dir.display()))?;
    Ok(run_result(RunMode::RuleData, catalog, keys))
}

fn select_sink(catalog: &CatalogArgs) -> &'static dyn FileSink {
    if catalog.dry_run { &DryRunSink } else { &FsSink }
}

fn run_result(
    mode: RunMode,
    catalog: &CatalogArgs,
    keys: Vec<KeySummary>,
) -> RunResult {
    RunResult {
        mode,
        target_dir: catalog.target_dir.clone(),
        dry_run: catalog.dry_run,
        keys,
    }
}
