//! The `studyaid subjects` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use studyaid_core::config::load_config_from;
use studyaid_core::model::{Difficulty, Subject};
use studyaid_core::subjects::VALID_SUBJECTS;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = super::open_bank(None, &config)?;

    let plannable: Vec<String> = VALID_SUBJECTS
        .iter()
        .filter_map(|s| Subject::new(s))
        .map(|s| s.display_name())
        .collect();
    println!("Plannable subjects: {}", plannable.join(", "));

    let mut table = Table::new();
    table.set_header(vec!["Quiz subject", "Easy", "Medium", "Hard"]);
    for subject in bank.subjects() {
        let mut row = vec![Cell::new(subject.display_name())];
        row.extend(
            Difficulty::ALL
                .iter()
                .map(|d| Cell::new(bank.available(subject.as_str(), *d))),
        );
        table.add_row(row);
    }

    println!("\n{table}");
    Ok(())
}
