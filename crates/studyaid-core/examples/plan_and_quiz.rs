//! Plan and quiz example: programmatic usage of studyaid-core.
//!
//! Builds a two-week study plan, then plays one quiz round by picking the
//! first option for every question.
//!
//! ```bash
//! cargo run -p studyaid-core --example plan_and_quiz
//! ```

use chrono::{Days, Local};

use studyaid_core::allocator::compute_plan;
use studyaid_core::bank::QuestionBank;
use studyaid_core::config::load_config;
use studyaid_core::model::{Difficulty, Subject};
use studyaid_core::session::{LoadOutcome, QuizSession};
use studyaid_core::subjects::validate_requests;

fn main() -> anyhow::Result<()> {
    // studyaid.toml in the current directory, or the defaults
    let config = load_config()?;

    let batch = validate_requests([
        ("Maths", Difficulty::Hard),
        ("Physics", Difficulty::Medium),
        ("English", Difficulty::Easy),
    ]);
    let today = Local::now().date_naive();
    let exam_date = today
        .checked_add_days(Days::new(14))
        .ok_or_else(|| anyhow::anyhow!("exam date out of range"))?;

    let plan = compute_plan(&batch.accepted, exam_date, config.daily_hours, today)?;
    if let Some(day) = plan.days.first() {
        println!("{}", day.label());
        for allocation in &day.allocations {
            println!("  {}: {}", allocation.subject.display_name(), allocation.duration);
        }
    }
    println!("... {} day(s) in total\n", plan.days.len());

    let bank = QuestionBank::load_or_builtin(config.question_bank.as_deref())?;
    let subject = Subject::new("mathematics").ok_or_else(|| anyhow::anyhow!("empty subject"))?;
    let mut session = QuizSession::new();
    let outcome = session.load(
        &bank,
        &subject,
        Difficulty::Easy,
        config.question_count,
        &mut rand::rng(),
    );
    if outcome == LoadOutcome::EmptyPool {
        println!("No questions for {subject}.");
        return Ok(());
    }

    let choices: Vec<String> = session
        .questions()
        .iter()
        .map(|q| q.options[0].clone())
        .collect();
    for (i, choice) in choices.iter().enumerate() {
        session.select(i, choice)?;
    }

    let result = session.submit()?;
    println!(
        "Scored {}/{} ({:.1}%): {}",
        result.score,
        result.total,
        result.percent(),
        result.band().message()
    );
    for topic in result.topics_to_revisit() {
        println!("  revisit: {topic}");
    }

    Ok(())
}
