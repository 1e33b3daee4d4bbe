//! Rule registrar and rule data generation.
//!
//! This crate renders canonical rules into two kinds of artifacts:
//!
//! - **Registrars**: Java sources that register a rule repository and a
//!   built-in quality profile with the analyzer host
//! - **Rule data**: per-rule documentation and JSON metadata, transcribed
//!   without templating
//!
//! Rendering is pure: the same rules and options always produce the same
//! bytes. Writing goes through a [`FileSink`].

mod error;
mod escape;
mod registrars;
mod rule_data;
mod sink;

pub use error::{ExportError, WriteError};
pub use escape::{escape_java, java_string};
pub use registrars::{
    DEFAULT_PROFILE_NAME, DEFAULT_REPOSITORY_NAME, GeneratedSource, RegistrarOptions, Registrars,
    compatible_rules, emit_registrars, profile_registrar_class_name, register_routine_names,
    render_profile_registrar, render_repository_registrar, repository_registrar_class_name,
};
pub use rule_data::{
    Artifact, DATA_EXTENSION, DOCUMENTATION_EXTENSION, RuleDataArtifacts, export_rule_data,
};
pub use sink::{DryRunSink, FileSink, FsSink};
