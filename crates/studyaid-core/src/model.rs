//! Core data model types for studyaid.
//!
//! These are the value types shared by the allocator, the question bank and
//! the quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SubjectError;
use crate::subjects;

/// How hard a subject (or a question pool) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Multiplier used to split the daily study budget.
    pub fn weight(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A normalized subject identifier.
///
/// Names are trimmed, lowercased and have inner whitespace collapsed, so
/// `"  Computer   Science "` and `"computer science"` are the same subject.
/// A `Subject` is not necessarily in the planner allow-list; question banks
/// may carry subjects of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Normalize `name` into a subject, or `None` if it is blank.
    pub fn new(name: &str) -> Option<Self> {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Subject(normalized))
        }
    }

    /// The normalized (lowercase) key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing name: first character uppercased, the rest lowercase.
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Subject {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Subject::new(&value).ok_or_else(|| "subject name is empty".to_string())
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}

/// One subject the student wants to plan for.
///
/// Only constructible for subjects in the planner allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequest {
    subject: Subject,
    difficulty: Difficulty,
}

impl SubjectRequest {
    /// Validate `name` against the allow-list and pair it with a difficulty.
    pub fn new(name: &str, difficulty: Difficulty) -> Result<Self, SubjectError> {
        match Subject::new(name) {
            Some(subject) if subjects::is_valid_subject(subject.as_str()) => Ok(Self {
                subject,
                difficulty,
            }),
            _ => Err(SubjectError::Unknown(name.trim().to_string())),
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The question text.
    pub prompt: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// The correct option; always one of `options`.
    pub answer: String,
}

impl QuestionRecord {
    /// Returns `true` if `choice` is exactly the correct option.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }

    /// Returns `true` if `choice` is one of the offered options.
    pub fn offers(&self, choice: &str) -> bool {
        self.options.iter().any(|o| o == choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("m".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_weights() {
        let weights: Vec<u32> = Difficulty::ALL.iter().map(|d| d.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3]);
    }

    #[test]
    fn subject_normalizes_case_and_whitespace() {
        let subject = Subject::new("  Computer   SCIENCE ").unwrap();
        assert_eq!(subject.as_str(), "computer science");
        assert_eq!(subject.display_name(), "Computer science");
        assert_eq!(Subject::new("c++").unwrap().display_name(), "C++");
        assert!(Subject::new("   ").is_none());
    }

    #[test]
    fn subject_request_checks_allow_list() {
        let req = SubjectRequest::new("Maths", Difficulty::Hard).unwrap();
        assert_eq!(req.subject().as_str(), "maths");
        assert_eq!(req.difficulty(), Difficulty::Hard);

        let err = SubjectRequest::new(" Astrology ", Difficulty::Easy).unwrap_err();
        assert_eq!(err, SubjectError::Unknown("Astrology".into()));
    }

    #[test]
    fn subject_serde_normalizes() {
        let subject: Subject = serde_json::from_str("\"  Physics \"").unwrap();
        assert_eq!(subject.as_str(), "physics");
        assert_eq!(serde_json::to_string(&subject).unwrap(), "\"physics\"");
        assert!(serde_json::from_str::<Subject>("\"  \"").is_err());
    }

    #[test]
    fn question_record_checks() {
        let q = QuestionRecord {
            prompt: "Unit of force is:".into(),
            options: vec!["Newton".into(), "Joule".into(), "Watt".into(), "Pascal".into()],
            answer: "Newton".into(),
        };
        assert!(q.is_correct("Newton"));
        assert!(!q.is_correct("newton"));
        assert!(q.offers("Watt"));
        assert!(!q.offers("Volt"));
    }
}
