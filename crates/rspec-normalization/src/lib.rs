//! Rule manifest normalization.
//!
//! Turns a [`RawRule`] (untyped manifest plus documentation blob) into a
//! validated [`Rule`]. This is the only place that reads fields from a raw
//! manifest; everything downstream works on the canonical entity.
//!
//! # Defaulting
//!
//! Defaults apply only when a field is absent (or `null`), never when it is
//! present but empty:
//!
//! | Field | Default |
//! |---|---|
//! | `code.attribute` | `CONVENTIONAL` |
//! | `tags` | empty |
//! | `compatibleLanguages` | the owning language key |
//! | `remediation` | none |
//! | `defaultQualityProfiles` | empty |
//!
//! # Example
//!
//! ```ignore
//! use rspec_normalization::normalize_rules;
//!
//! let rules = normalize_rules("js", &raw_rules)?;
//! ```
//!
//! [`RawRule`]: rspec_model::RawRule
//! [`Rule`]: rspec_model::Rule

mod fields;
mod rule;

pub use rule::{normalize_rule, normalize_rules, normalize_scope, normalize_severity};
