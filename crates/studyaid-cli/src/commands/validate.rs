//! The `studyaid validate` command.

use std::path::PathBuf;

use anyhow::Result;

use studyaid_core::bank::validate_bank;
use studyaid_core::config::load_config_from;

pub fn execute(bank_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = super::open_bank(bank_path.as_deref(), &config)?;

    println!(
        "Question bank: {} subject(s), {} question(s)",
        bank.subjects().count(),
        bank.len()
    );

    let warnings = validate_bank(&bank);
    for w in &warnings {
        let prefix = match w.difficulty {
            Some(d) => format!("  [{} / {}]", w.subject, d),
            None => format!("  [{}]", w.subject),
        };
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
