//! Rule manifest ingestion.
//!
//! This crate provides the boundary between the rule catalog and the
//! generation pipeline: a [`RuleManifestSource`] hands out [`RawRule`]
//! records per language key, untouched.
//!
//! # Sources
//!
//! - [`DirectoryManifestSource`]: a local checkout of the rule catalog
//! - [`StaticManifestSource`]: an in-memory catalog, handy for tests and
//!   for callers that fetch manifests some other way
//!
//! # Example
//!
//! ```ignore
//! use rspec_ingest::{DirectoryManifestSource, RuleManifestSource};
//!
//! let source = DirectoryManifestSource::new("rspec/rules");
//! let raw_rules = source.rules_by_language("javascript")?;
//! ```
//!
//! [`RawRule`]: rspec_model::RawRule

mod directory;
mod error;
mod source;

// === Error Types ===
pub use error::{FetchError, Result};

// === Sources ===
pub use directory::{DOCUMENTATION_FILE, DirectoryManifestSource, METADATA_FILE, list_rule_dirs};
pub use source::{RuleManifestSource, StaticManifestSource};
