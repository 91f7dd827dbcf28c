//! Quiz scoring, score bands and revision hints.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::QuestionRecord;

/// Number of prompt words, after the first, used as a revision topic.
const TOPIC_WINDOW: usize = 3;

/// How one question was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub prompt: String,
    pub chosen: String,
    pub correct: String,
    pub is_correct: bool,
}

/// The scored result of a submitted quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub outcomes: Vec<QuestionOutcome>,
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    /// Score a quiz from its questions and the chosen options, pairwise.
    pub fn compute<'a, I>(questions: &[QuestionRecord], chosen: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let outcomes: Vec<QuestionOutcome> = questions
            .iter()
            .zip(chosen)
            .map(|(q, choice)| QuestionOutcome {
                prompt: q.prompt.clone(),
                chosen: choice.to_string(),
                correct: q.answer.clone(),
                is_correct: q.is_correct(choice),
            })
            .collect();
        let score = outcomes.iter().filter(|o| o.is_correct).count();

        Self {
            total: outcomes.len(),
            outcomes,
            score,
        }
    }

    /// Percentage of correct answers; zero for an empty quiz.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64 * 100.0
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::classify(self.percent())
    }

    /// Short topic phrases for every incorrectly answered question,
    /// de-duplicated in first-seen order.
    pub fn topics_to_revisit(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.outcomes
            .iter()
            .filter(|o| !o.is_correct)
            .filter_map(|o| topic_hint(&o.prompt))
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }
}

/// Performance classification of a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 70% and above.
    Excellent,
    /// 50% up to, not including, 70%.
    Good,
    /// Below 50%.
    BelowAverage,
}

impl ScoreBand {
    pub fn classify(percent: f64) -> Self {
        if percent >= 70.0 {
            ScoreBand::Excellent
        } else if percent >= 50.0 {
            ScoreBand::Good
        } else {
            ScoreBand::BelowAverage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::BelowAverage => "below average",
        }
    }

    /// Headline shown after the score.
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent! Try revising the topics you missed to strengthen your concepts."
            }
            ScoreBand::Good => {
                "Good effort! Try revising the topics you missed to strengthen your concepts."
            }
            ScoreBand::BelowAverage => {
                "Your performance is below average. Focus on understanding key topics again."
            }
        }
    }
}

/// Words two to four of a question, as a rough topic phrase.
///
/// Pure word-window heuristic: "What is the SI unit of pressure?" gives
/// "is the SI". `None` when the prompt has a single word.
pub fn topic_hint(prompt: &str) -> Option<String> {
    let words: Vec<&str> = prompt
        .split_whitespace()
        .skip(1)
        .take(TOPIC_WINDOW)
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
