//! End-to-end flows through the core library: plan a study schedule, take a
//! quiz against the built-in bank, and turn notes into questions.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use studyaid_core::allocator::{compute_plan, StudyPlan};
use studyaid_core::bank::QuestionBank;
use studyaid_core::error::SessionError;
use studyaid_core::generator::{clean_question_text, generate_questions, QuestionKind};
use studyaid_core::model::{Difficulty, Subject};
use studyaid_core::scoring::ScoreBand;
use studyaid_core::session::{LoadOutcome, QuizSession, QuizState};
use studyaid_core::subjects::validate_requests;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn validated_subjects_feed_the_planner() {
    let batch = validate_requests([
        ("Maths", Difficulty::Hard),
        ("", Difficulty::Easy),
        ("astrology", Difficulty::Medium),
        ("english", Difficulty::Easy),
        ("MATHS", Difficulty::Easy),
    ]);
    assert_eq!(batch.accepted.len(), 2);
    assert_eq!(batch.rejected.len(), 2);

    let plan = compute_plan(&batch.accepted, date(2026, 11, 1), 6.0, date(2026, 10, 19)).unwrap();
    assert_eq!(plan.days.len(), 13);
    assert_eq!(plan.days.first().unwrap().date, date(2026, 10, 20));
    assert_eq!(plan.days.last().unwrap().date, date(2026, 11, 1));

    for day in &plan.days {
        assert!((day.total().hours() - 6.0).abs() < 1e-9);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    plan.save_json(&path).unwrap();
    assert_eq!(StudyPlan::load_json(&path).unwrap(), plan);
}

#[test]
fn quiz_session_round_trip() {
    let bank = QuestionBank::builtin().unwrap();
    let subject = Subject::new("Mathematics").unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = QuizSession::new();

    let outcome = session.load(&bank, &subject, Difficulty::Medium, 4, &mut rng);
    assert!(matches!(outcome, LoadOutcome::Loaded { count: 4, shortfall: None }));

    // Answer every question correctly except the last.
    let questions = session.questions().to_vec();
    for (i, q) in questions.iter().enumerate() {
        let choice = if i + 1 == questions.len() {
            q.options.iter().find(|o| **o != q.answer).unwrap()
        } else {
            &q.answer
        };
        session.select(i, choice).unwrap();
    }

    let result = session.submit().unwrap().clone();
    assert_eq!(result.score, 3);
    assert_eq!(result.total, 4);
    assert_eq!(result.band(), ScoreBand::Excellent);
    assert_eq!(result.topics_to_revisit().len(), 1);

    assert_eq!(session.state(), QuizState::Submitted);
    assert_eq!(
        session.select(0, &questions[0].answer),
        Err(SessionError::AlreadySubmitted)
    );

    session.reset();
    assert_eq!(session.state(), QuizState::Unloaded);
}

#[test]
fn quiz_pool_shortfall_and_empty_pool() {
    let bank = QuestionBank::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = QuizSession::new();

    let geography = Subject::new("geography").unwrap();
    let outcome = session.load(&bank, &geography, Difficulty::Easy, 5, &mut rng);
    let short = outcome.shortfall().unwrap();
    assert_eq!((short.requested, short.available), (5, 1));
    assert_eq!(session.questions().len(), 1);

    let outcome = session.load(&bank, &geography, Difficulty::Hard, 5, &mut rng);
    assert_eq!(outcome, LoadOutcome::EmptyPool);
    assert_eq!(session.state(), QuizState::Unloaded);
    assert_eq!(session.submit().unwrap_err(), SessionError::NotLoaded);
}

#[test]
fn notes_become_questions() {
    let notes = "Chapter 1\n\
        Normalization removes redundancy from relational database tables. \
        A primary key uniquely identifies every row in a table. \
        Transactions guarantee atomicity, consistency, isolation and durability. \
        Indexes speed up lookups at the cost of slower writes.";
    let mut rng = StdRng::seed_from_u64(3);

    let generated = generate_questions(notes, &mut rng);
    assert_eq!(generated.mcq.len(), 4);
    assert!(generated.very_short.is_empty());

    for q in generated.prompts(QuestionKind::Mcq) {
        let cleaned = clean_question_text(q);
        assert!(!cleaned.contains("Chapter"));
        assert!(cleaned.chars().next().unwrap().is_uppercase());
    }
}
