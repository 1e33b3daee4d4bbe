use std::path::PathBuf;

use rspec_cli::pipeline::KeySummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Registrars,
    RuleData,
}

impl RunMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Registrars => "registrars",
            Self::RuleData => "rule data",
        }
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub mode: RunMode,
    pub target_dir: PathBuf,
    pub dry_run: bool,
    pub keys: Vec<KeySummary>,
}
