//! Typed error conditions for planning, subject validation and quiz sessions.
//!
//! All of these are expected, recoverable conditions that callers are meant
//! to report to the user. File and parse failures are carried as
//! `anyhow::Error` by the functions that touch the filesystem.

use thiserror::Error;

/// Reasons a study plan could not be produced. No partial plan is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The exam date is today or already behind us.
    #[error("exam date {exam_date} must be after {today}")]
    PastExamDate {
        exam_date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    /// No valid subjects were supplied.
    #[error("at least one valid subject is required")]
    NoSubjects,

    /// The daily study budget is zero, negative or not a number.
    #[error("daily study hours must be a positive number, got {0}")]
    InvalidDailyHours(f64),
}

/// A subject entry rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    /// The name is not in the allow-list of recognized subjects.
    #[error("'{0}' is not a valid subject name")]
    Unknown(String),

    /// The subject already appeared earlier in the same batch.
    #[error("'{0}' is listed more than once")]
    Duplicate(String),
}

/// Rejected quiz session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no quiz is loaded")]
    NotLoaded,

    /// Answers are frozen once the quiz has been submitted.
    #[error("the quiz has already been submitted")]
    AlreadySubmitted,

    #[error("question {index} does not exist (quiz has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },

    #[error("'{option}' is not an option for question {index}")]
    UnknownOption { index: usize, option: String },

    /// The submission gate: every question must be answered first.
    #[error("please attempt all questions, {remaining} still unattempted")]
    IncompleteSubmission { remaining: usize },
}

impl SessionError {
    /// Returns `true` for the submission gate, which callers show as a
    /// prompt rather than a failure.
    pub fn is_submission_gate(&self) -> bool {
        matches!(self, SessionError::IncompleteSubmission { .. })
    }
}
