//! The `studyaid quiz` command: an interactive multiple-choice quiz on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;

use studyaid_core::bank::QuestionBank;
use studyaid_core::config::load_config_from;
use studyaid_core::model::{Difficulty, Subject};
use studyaid_core::scoring::QuizResult;
use studyaid_core::session::{LoadOutcome, QuizSession};

const MAX_QUESTIONS: usize = 50;

pub fn execute(
    subject: String,
    difficulty: String,
    count: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = super::open_bank(None, &config)?;

    let subject = Subject::new(&subject).ok_or_else(|| anyhow::anyhow!("subject is empty"))?;
    if !bank.has_subject(subject.as_str()) {
        let known: Vec<String> = bank.subjects().map(|s| s.display_name()).collect();
        anyhow::bail!(
            "no questions for '{}'. Available: {}",
            subject.display_name(),
            known.join(", ")
        );
    }
    let difficulty: Difficulty = difficulty.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let count = count.unwrap_or(config.question_count);
    anyhow::ensure!(
        (1..=MAX_QUESTIONS).contains(&count),
        "--count must be between 1 and {MAX_QUESTIONS}, got {count}"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_quiz(
        &bank,
        &subject,
        difficulty,
        count,
        &mut rand::rng(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Play quizzes until the user declines another round.
fn run_quiz<R, I, W>(
    bank: &QuestionBank,
    subject: &Subject,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut session = QuizSession::new();

    loop {
        let outcome = session.load(bank, subject, difficulty, count, rng);
        match &outcome {
            LoadOutcome::EmptyPool | LoadOutcome::NothingRequested => {
                writeln!(
                    out,
                    "No {} questions available for {}. Please choose another subject or difficulty.",
                    difficulty,
                    subject.display_name()
                )?;
                return Ok(());
            }
            _ => {}
        }
        if let Some(short) = outcome.shortfall() {
            writeln!(
                out,
                "Available questions: only {} (you asked for {}). Showing all available questions.",
                short.available, short.requested
            )?;
        }
        writeln!(
            out,
            "\n{} quiz ({}), {} question(s)\n",
            subject.display_name(),
            difficulty,
            session.questions().len()
        )?;

        ask_all(&mut session, input, out)?;

        if !session.can_submit() {
            writeln!(
                out,
                "\nPlease attempt all {} questions. Currently attempted: {}",
                session.questions().len(),
                session.answered()
            )?;
        }
        let result = session.submit()?.clone();
        print_result(&result, out)?;

        write!(out, "\nStart another quiz? [y/N] ")?;
        out.flush()?;
        match read_line(input)? {
            Some(line) if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") => {
                session.reset();
            }
            _ => return Ok(()),
        }
    }
}

/// Prompt for every unanswered question. Stops early when input runs out.
fn ask_all<I: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    for index in 0..session.questions().len() {
        let question = session.questions()[index].clone();
        writeln!(out, "Q{}. {}", index + 1, question.prompt)?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {}", n + 1, option)?;
        }

        let choice = loop {
            write!(out, "Your answer [1-{}]: ", question.options.len())?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            if let Some(option) = resolve_choice(&question.options, &line) {
                break option;
            }
            writeln!(out, "Please choose one of the listed options.")?;
        };

        session.select(index, &choice)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Accept either an option number or the option text itself.
fn resolve_choice(options: &[String], line: &str) -> Option<String> {
    if line.is_empty() {
        return None;
    }
    if let Ok(n) = line.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).cloned();
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(line))
        .cloned()
}

fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_result<W: Write>(result: &QuizResult, out: &mut W) -> Result<()> {
    writeln!(out, "\nResults:")?;
    for (i, outcome) in result.outcomes.iter().enumerate() {
        writeln!(out, "Q{}. {}", i + 1, outcome.prompt)?;
        if outcome.is_correct {
            writeln!(out, "  Correct! Your answer: {}", outcome.chosen)?;
        } else {
            writeln!(
                out,
                "  Incorrect. Your answer: {}. Correct answer: {}",
                outcome.chosen, outcome.correct
            )?;
        }
    }

    writeln!(
        out,
        "\nYou scored {} out of {} ({:.1}%).",
        result.score,
        result.total,
        result.percent()
    )?;
    writeln!(out, "{}", result.band().message())?;

    let topics = result.topics_to_revisit();
    if !topics.is_empty() {
        writeln!(out, "\nSuggested revision topics:")?;
        for topic in topics {
            writeln!(out, "  - Go through '{topic}' again.")?;
        }
    }
    Ok(())
}
