//! CLI library components for the rule registrar generator.

pub mod logging;
pub mod pipeline;
