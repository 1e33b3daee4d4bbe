//! Canonical rule model shared by the ingest, normalization, and output crates.
//!
//! A [`RawRule`] is what a manifest source hands over: the rule key, an untyped
//! JSON manifest, and the documentation blob. Normalization turns it into a
//! validated [`Rule`], which is the only shape the emitters ever see.

pub mod error;
pub mod raw;
pub mod rule;

pub use error::{MalformedRuleError, Result};
pub use raw::RawRule;
pub use rule::{DEFAULT_CLEAN_CODE_ATTRIBUTE, Parameter, Remediation, Rule};
