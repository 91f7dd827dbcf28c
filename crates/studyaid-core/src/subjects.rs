//! Subject allow-list and batch validation for the study planner.

use std::collections::HashSet;

use crate::error::SubjectError;
use crate::model::{Difficulty, Subject, SubjectRequest};

/// Subjects the planner recognizes, in normalized form.
pub const VALID_SUBJECTS: &[&str] = &[
    "maths",
    "mathematics",
    "physics",
    "chemistry",
    "biology",
    "english",
    "hindi",
    "sociology",
    "history",
    "geography",
    "computer",
    "science",
    "accountancy",
    "economics",
    "business studies",
    "python",
    "computer science",
    "c",
    "c++",
    "operating system",
    "dbms",
];

/// Case-insensitive membership test against [`VALID_SUBJECTS`].
pub fn is_valid_subject(name: &str) -> bool {
    Subject::new(name).is_some_and(|s| VALID_SUBJECTS.contains(&s.as_str()))
}

/// An entry the validator turned away, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSubject {
    /// Position of the entry in the input batch.
    pub position: usize,
    pub error: SubjectError,
}

/// Outcome of validating a batch of (name, difficulty) entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectBatch {
    pub accepted: Vec<SubjectRequest>,
    pub rejected: Vec<RejectedSubject>,
}

impl SubjectBatch {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Validate every entry independently.
///
/// Blank names are skipped. Unknown names and repeats of an already accepted
/// subject are rejected one by one; the remaining entries are still accepted.
pub fn validate_requests<'a, I>(entries: I) -> SubjectBatch
where
    I: IntoIterator<Item = (&'a str, Difficulty)>,
{
    let mut batch = SubjectBatch::default();
    let mut seen = HashSet::new();

    for (position, (name, difficulty)) in entries.into_iter().enumerate() {
        if name.trim().is_empty() {
            continue;
        }
        match SubjectRequest::new(name, difficulty) {
            Ok(request) => {
                if seen.insert(request.subject().clone()) {
                    batch.accepted.push(request);
                } else {
                    tracing::warn!("duplicate subject '{}' ignored", request.subject());
                    batch.rejected.push(RejectedSubject {
                        position,
                        error: SubjectError::Duplicate(request.subject().to_string()),
                    });
                }
            }
            Err(error) => {
                tracing::warn!("{error}");
                batch.rejected.push(RejectedSubject { position, error });
            }
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        assert!(is_valid_subject("Maths"));
        assert!(is_valid_subject("  BUSINESS studies "));
        assert!(is_valid_subject("C++"));
        assert!(!is_valid_subject("astrology"));
        assert!(!is_valid_subject(""));
    }

    #[test]
    fn partial_validation_keeps_valid_entries() {
        let batch = validate_requests(vec![
            ("Maths", Difficulty::Hard),
            ("Quidditch", Difficulty::Easy),
            ("English", Difficulty::Easy),
        ]);

        assert_eq!(batch.accepted.len(), 2);
        assert_eq!(batch.accepted[0].subject().as_str(), "maths");
        assert_eq!(batch.accepted[1].subject().as_str(), "english");
        assert_eq!(
            batch.rejected,
            vec![RejectedSubject {
                position: 1,
                error: SubjectError::Unknown("Quidditch".into()),
            }]
        );
    }

    #[test]
    fn blank_entries_are_skipped() {
        let batch = validate_requests(vec![("  ", Difficulty::Easy), ("physics", Difficulty::Medium)]);
        assert_eq!(batch.accepted.len(), 1);
        assert!(batch.rejected.is_empty());
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let batch = validate_requests(vec![
            ("Physics", Difficulty::Hard),
            ("physics", Difficulty::Easy),
        ]);
        assert_eq!(batch.accepted.len(), 1);
        assert_eq!(batch.accepted[0].difficulty(), Difficulty::Hard);
        assert_eq!(
            batch.rejected[0].error,
            SubjectError::Duplicate("physics".into())
        );
    }

    #[test]
    fn all_invalid_batch_is_empty() {
        let batch = validate_requests(vec![("alchemy", Difficulty::Easy)]);
        assert!(batch.is_empty());
        assert_eq!(batch.rejected.len(), 1);
    }
}
