//! Quiz session state machine.
//!
//! A [`QuizSession`] is owned by the caller and moves through
//! `Unloaded -> Loaded -> Submitted`, returning to `Unloaded` on
//! [`QuizSession::reset`]. Loading the same parameters again keeps the
//! current questions and answers; any change resamples.

use rand::Rng;

use crate::bank::QuestionBank;
use crate::error::SessionError;
use crate::model::{Difficulty, QuestionRecord, Subject};
use crate::sampler;
use crate::scoring::QuizResult;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Nothing chosen yet, or the chosen pool was empty.
    Unloaded,
    /// Questions are fixed and answers can be recorded.
    Loaded,
    /// Answers are frozen and the result is available.
    Submitted,
}

/// The answer slot of one question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Answer {
    #[default]
    Unanswered,
    Chosen(String),
}

impl Answer {
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Unanswered => None,
            Answer::Chosen(choice) => Some(choice),
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Answer::Chosen(_))
    }
}

/// The parameters a session was loaded with. `count` is the number of
/// questions actually used, after clamping to the pool size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    pub subject: Subject,
    pub difficulty: Difficulty,
    pub count: usize,
}

/// Fewer questions were available than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolShortfall {
    pub requested: usize,
    pub available: usize,
}

/// What [`QuizSession::load`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A fresh set of questions was sampled.
    Loaded {
        count: usize,
        shortfall: Option<PoolShortfall>,
    },
    /// The parameters match the current session; nothing changed.
    Retained { shortfall: Option<PoolShortfall> },
    /// No questions exist for this subject and difficulty. The session is
    /// left unloaded.
    EmptyPool,
    /// Zero questions were requested. The session is left unloaded.
    NothingRequested,
}

impl LoadOutcome {
    pub fn shortfall(&self) -> Option<PoolShortfall> {
        match self {
            LoadOutcome::Loaded { shortfall, .. } | LoadOutcome::Retained { shortfall } => {
                *shortfall
            }
            LoadOutcome::EmptyPool | LoadOutcome::NothingRequested => None,
        }
    }
}

/// One user's quiz attempt.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    params: Option<QuizParams>,
    questions: Vec<QuestionRecord>,
    answers: Vec<Answer>,
    result: Option<QuizResult>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QuizState {
        if self.result.is_some() {
            QuizState::Submitted
        } else if self.questions.is_empty() {
            QuizState::Unloaded
        } else {
            QuizState::Loaded
        }
    }

    pub fn params(&self) -> Option<&QuizParams> {
        self.params.as_ref()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Load questions for the given choice, sampling only when the
    /// parameters differ from the current session.
    pub fn load<R: Rng + ?Sized>(
        &mut self,
        bank: &QuestionBank,
        subject: &Subject,
        difficulty: Difficulty,
        requested: usize,
        rng: &mut R,
    ) -> LoadOutcome {
        if requested == 0 {
            self.unload();
            return LoadOutcome::NothingRequested;
        }

        let available = bank.available(subject.as_str(), difficulty);
        if available == 0 {
            tracing::warn!("no questions available for {subject} ({difficulty})");
            self.unload();
            return LoadOutcome::EmptyPool;
        }

        let shortfall = (requested > available).then(|| {
            tracing::warn!("only {available} question(s) available, {requested} requested");
            PoolShortfall {
                requested,
                available,
            }
        });

        let params = QuizParams {
            subject: subject.clone(),
            difficulty,
            count: requested.min(available),
        };
        if self.params.as_ref() == Some(&params) {
            return LoadOutcome::Retained { shortfall };
        }

        let questions = sampler::sample(bank, subject.as_str(), difficulty, params.count, rng);
        tracing::info!(
            "quiz loaded: {} question(s) for {} ({})",
            questions.len(),
            subject.display_name(),
            difficulty
        );

        self.answers = vec![Answer::Unanswered; questions.len()];
        self.questions = questions;
        self.result = None;
        self.params = Some(params);

        LoadOutcome::Loaded {
            count: self.questions.len(),
            shortfall,
        }
    }

    /// Record `option` as the answer to question `index`, replacing any
    /// earlier choice.
    pub fn select(&mut self, index: usize, option: &str) -> Result<(), SessionError> {
        match self.state() {
            QuizState::Unloaded => return Err(SessionError::NotLoaded),
            QuizState::Submitted => return Err(SessionError::AlreadySubmitted),
            QuizState::Loaded => {}
        }

        let total = self.questions.len();
        let question = self
            .questions
            .get(index)
            .ok_or(SessionError::QuestionOutOfRange { index, total })?;
        if !question.offers(option) {
            return Err(SessionError::UnknownOption {
                index,
                option: option.to_string(),
            });
        }

        self.answers[index] = Answer::Chosen(option.to_string());
        Ok(())
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }

    pub fn unanswered(&self) -> usize {
        self.answers.len() - self.answered()
    }

    /// Whether the submission gate is open.
    pub fn can_submit(&self) -> bool {
        self.state() == QuizState::Loaded && self.unanswered() == 0
    }

    /// Score the quiz. Every question must be answered; the result is
    /// computed once and returned again on later calls.
    pub fn submit(&mut self) -> Result<&QuizResult, SessionError> {
        match self.state() {
            QuizState::Unloaded => return Err(SessionError::NotLoaded),
            QuizState::Submitted => {}
            QuizState::Loaded => {
                let remaining = self.unanswered();
                if remaining > 0 {
                    return Err(SessionError::IncompleteSubmission { remaining });
                }
                let result = QuizResult::compute(
                    &self.questions,
                    self.answers.iter().filter_map(Answer::as_choice),
                );
                tracing::info!(
                    "quiz submitted: {}/{} ({:.1}%)",
                    result.score,
                    result.total,
                    result.percent()
                );
                self.result = Some(result);
            }
        }
        self.result.as_ref().ok_or(SessionError::NotLoaded)
    }

    /// The cached result, once submitted.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Drop the current quiz because its subject or difficulty was
    /// deselected.
    pub fn unload(&mut self) {
        if self.params.is_some() {
            tracing::debug!("quiz unloaded");
        }
        *self = Self::default();
    }

    /// Clear everything and return to `Unloaded`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
