//! The `studyaid plan` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table};

use studyaid_core::allocator::{compute_plan, StudyPlan};
use studyaid_core::config::load_config_from;
use studyaid_core::model::Difficulty;
use studyaid_core::subjects::validate_requests;

const MIN_DAILY_HOURS: f64 = 1.0;
const MAX_DAILY_HOURS: f64 = 12.0;
const SAVED_PLAN_FILE: &str = "study_plan.json";

#[allow(clippy::too_many_arguments)]
pub fn execute(
    subjects: Vec<String>,
    exam_date: String,
    hours: Option<f64>,
    today: Option<String>,
    format: String,
    output: Option<PathBuf>,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let daily_hours = hours.unwrap_or(config.daily_hours);
    anyhow::ensure!(
        (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&daily_hours),
        "--hours must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS}, got {daily_hours}"
    );

    let exam_date = parse_date(&exam_date).context("invalid --exam-date")?;
    let today = match today {
        Some(s) => parse_date(&s).context("invalid --today")?,
        None => chrono::Local::now().date_naive(),
    };

    let entries = subjects
        .iter()
        .map(|s| parse_subject_entry(s))
        .collect::<Result<Vec<_>>>()?;
    let batch = validate_requests(entries.iter().map(|(name, d)| (*name, *d)));
    for rejected in &batch.rejected {
        eprintln!("Warning: {}, skipping.", rejected.error);
    }

    let plan = compute_plan(&batch.accepted, exam_date, daily_hours, today)?;

    match format.as_str() {
        "table" => print_table(&plan),
        "json" => println!("{}", serde_json::to_string_pretty(&plan)?),
        other => anyhow::bail!("unknown format '{other}'. Use: table, json"),
    }

    if let Some(path) = output {
        plan.save_json(&path)?;
        eprintln!("Plan saved to {}", path.display());
    }

    if save {
        let path = config.output_dir.join(SAVED_PLAN_FILE);
        plan.save_json(&path)?;
        eprintln!("Plan saved to {}", path.display());
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("'{s}' is not a date in YYYY-MM-DD form"))
}

/// Split `NAME[:DIFFICULTY]`. The difficulty defaults to easy.
fn parse_subject_entry(entry: &str) -> Result<(&str, Difficulty)> {
    match entry.rsplit_once(':') {
        Some((name, difficulty)) => {
            let difficulty = difficulty
                .parse::<Difficulty>()
                .map_err(|e| anyhow::anyhow!("--subject '{entry}': {e}"))?;
            Ok((name, difficulty))
        }
        None => Ok((entry, Difficulty::Easy)),
    }
}

fn print_table(plan: &StudyPlan) {
    let subjects = plan.subjects();

    let mut table = Table::new();
    let mut header = vec![Cell::new("Day")];
    header.extend(subjects.iter().map(|s| Cell::new(s.display_name())));
    table.set_header(header);

    for day in &plan.days {
        let mut row = vec![Cell::new(day.label())];
        row.extend(subjects.iter().map(|s| {
            Cell::new(
                day.duration_for(s)
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            )
        }));
        table.add_row(row);
    }

    println!(
        "Study plan: {} day(s) until the exam on {}, {} hour(s) per day\n",
        plan.days.len(),
        plan.exam_date.format("%d-%b-%Y"),
        plan.daily_hours
    );
    println!("{table}");
}
