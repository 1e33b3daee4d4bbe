//! CLI argument definitions for the rule registrar generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use rspec_output::{DEFAULT_PROFILE_NAME, DEFAULT_REPOSITORY_NAME};

#[derive(Parser)]
#[command(
    name = "rspec",
    version,
    about = "Generate analyzer rule registrars and rule data from a rule catalog",
    long_about = "Generate analyzer rule registrars and rule data from a rule catalog.\n\n\
                  Reads rule manifests per language key, validates them, and writes\n\
                  either Java registrar classes or per-rule HTML/JSON data files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate repository and quality profile registrar classes.
    Registrars(RegistrarsArgs),

    /// Export per-rule HTML documentation and JSON metadata.
    RuleData(RuleDataArgs),
}

/// Options shared by both run modes.
#[derive(Args)]
pub struct CatalogArgs {
    /// Rule catalog checkout (one directory per rule key).
    #[arg(long = "rules-dir", value_name = "DIR")]
    pub rules_dir: PathBuf,

    /// Language key to generate; repeat for several keys.
    #[arg(long = "language-key", value_name = "KEY", required = true)]
    pub language_keys: Vec<String>,

    /// Output directory; each language key gets its own subdirectory.
    #[arg(long = "target-dir", value_name = "DIR")]
    pub target_dir: PathBuf,

    /// Log the files that would be written without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct RegistrarsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Java package of the generated classes.
    #[arg(long = "package-name", value_name = "PACKAGE")]
    pub package_name: String,

    /// Repository key used for class names and activations (default: the language key).
    #[arg(long = "repository-key", value_name = "KEY")]
    pub repository_key: Option<String>,

    /// Only rules compatible with this language are emitted (default: the language key).
    #[arg(long = "compatible-language-key", value_name = "KEY")]
    pub compatible_language_key: Option<String>,

    /// Built-in quality profile to populate.
    #[arg(long = "profile-name", value_name = "NAME", default_value = DEFAULT_PROFILE_NAME)]
    pub profile_name: String,

    /// Display name of the rule repository.
    #[arg(long = "repository-name", value_name = "NAME", default_value = DEFAULT_REPOSITORY_NAME)]
    pub repository_name: String,
}

#[derive(Args)]
pub struct RuleDataArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
