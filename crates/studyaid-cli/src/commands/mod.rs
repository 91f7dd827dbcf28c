//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;

use studyaid_core::bank::QuestionBank;
use studyaid_core::config::StudyaidConfig;

pub mod generate;
pub mod init;
pub mod plan;
pub mod quiz;
pub mod subjects;
pub mod validate;

/// The bank named on the command line, else the configured one, else the
/// built-in bank.
pub(crate) fn open_bank(explicit: Option<&Path>, config: &StudyaidConfig) -> Result<QuestionBank> {
    let path = explicit.or(config.question_bank.as_deref());
    if let Some(p) = path {
        tracing::debug!("using question bank {}", p.display());
    }
    QuestionBank::load_or_builtin(path)
}
