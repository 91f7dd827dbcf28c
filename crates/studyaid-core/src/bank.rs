//! Multiple-choice question bank.
//!
//! A bank is an immutable lookup table from (subject, difficulty) to a pool
//! of questions. The built-in bank is embedded at compile time; users can
//! supply their own TOML file in the same format.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Difficulty, QuestionRecord, Subject};
use crate::subjects;

const BUILTIN_BANK: &str = include_str!("../data/question_bank.toml");

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    subject: String,
    difficulty: String,
    prompt: String,
    options: Vec<String>,
    answer: String,
}

/// Read-only table of question pools.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    pools: BTreeMap<(Subject, Difficulty), Vec<QuestionRecord>>,
    subjects: BTreeSet<Subject>,
}

impl QuestionBank {
    /// The bank shipped with studyaid.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_BANK, Path::new("<builtin>"))
    }

    /// The raw TOML of the built-in bank, e.g. for writing an editable copy.
    pub fn builtin_source() -> &'static str {
        BUILTIN_BANK
    }

    /// Load a bank from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read question bank: {}", path.display()))?;
        Self::from_toml_str(&content, path)
    }

    /// Use the bank at `path` when given, the built-in one otherwise.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    /// Parse a TOML string into a bank (useful for testing).
    pub fn from_toml_str(content: &str, source_path: &Path) -> Result<Self> {
        let parsed: TomlBankFile = toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

        let mut bank = QuestionBank::default();
        for (i, q) in parsed.questions.into_iter().enumerate() {
            let subject = Subject::new(&q.subject)
                .ok_or_else(|| anyhow::anyhow!("question {}: subject is empty", i + 1))?;
            let difficulty: Difficulty = q
                .difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", i + 1, e))?;

            let record = QuestionRecord {
                prompt: q.prompt,
                options: q.options,
                answer: q.answer,
            };
            anyhow::ensure!(
                record.offers(&record.answer),
                "question {} ({}): answer '{}' is not one of its options",
                i + 1,
                record.prompt,
                record.answer
            );

            bank.subjects.insert(subject.clone());
            bank.pools.entry((subject, difficulty)).or_default().push(record);
        }

        tracing::debug!(
            "loaded question bank from {}: {} subject(s), {} question(s)",
            source_path.display(),
            bank.subjects.len(),
            bank.len()
        );

        Ok(bank)
    }

    /// Questions for a key; empty if the key is unknown. The subject is
    /// case-folded before lookup.
    pub fn pool(&self, subject: &str, difficulty: Difficulty) -> &[QuestionRecord] {
        Subject::new(subject)
            .and_then(|s| self.pools.get(&(s, difficulty)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of questions available for a key.
    pub fn available(&self, subject: &str, difficulty: Difficulty) -> usize {
        self.pool(subject, difficulty).len()
    }

    /// Whether `subject` appears in the bank at any difficulty.
    pub fn has_subject(&self, subject: &str) -> bool {
        Subject::new(subject).is_some_and(|s| self.subjects.contains(&s))
    }

    /// All subjects, sorted.
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    fn pools(&self) -> impl Iterator<Item = (&(Subject, Difficulty), &Vec<QuestionRecord>)> {
        self.pools.iter()
    }
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct BankWarning {
    pub subject: Subject,
    /// `None` for subject-level warnings.
    pub difficulty: Option<Difficulty>,
    pub message: String,
}

/// Check a bank for common authoring mistakes.
pub fn validate_bank(bank: &QuestionBank) -> Vec<BankWarning> {
    let mut warnings = Vec::new();

    // Subjects the planner would not accept
    for subject in bank.subjects() {
        if !subjects::is_valid_subject(subject.as_str()) {
            warnings.push(BankWarning {
                subject: subject.clone(),
                difficulty: None,
                message: "subject is not in the study planner's subject list".into(),
            });
        }
    }

    for ((subject, difficulty), pool) in bank.pools() {
        let mut seen_prompts = HashSet::new();
        for q in pool {
            if q.options.len() != 4 {
                warnings.push(BankWarning {
                    subject: subject.clone(),
                    difficulty: Some(*difficulty),
                    message: format!("'{}' has {} options, expected 4", q.prompt, q.options.len()),
                });
            }

            let distinct: HashSet<&String> = q.options.iter().collect();
            if distinct.len() != q.options.len() {
                warnings.push(BankWarning {
                    subject: subject.clone(),
                    difficulty: Some(*difficulty),
                    message: format!("'{}' repeats an option", q.prompt),
                });
            }

            if !seen_prompts.insert(q.prompt.trim().to_lowercase()) {
                warnings.push(BankWarning {
                    subject: subject.clone(),
                    difficulty: Some(*difficulty),
                    message: format!("duplicate question: {}", q.prompt),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SMALL_BANK: &str = r#"
[[questions]]
subject = "Physics"
difficulty = "easy"
prompt = "Unit of force is:"
options = ["Newton", "Joule", "Watt", "Pascal"]
answer = "Newton"

[[questions]]
subject = "physics"
difficulty = "easy"
prompt = "Light travels fastest in:"
options = ["Vacuum", "Water", "Glass", "Air"]
answer = "Vacuum"

[[questions]]
subject = "astronomy"
difficulty = "hard"
prompt = "Closest star to Earth?"
options = ["Sun", "Sun", "Sirius"]
answer = "Sun"
"#;

    fn small() -> QuestionBank {
        QuestionBank::from_toml_str(SMALL_BANK, &PathBuf::from("test.toml")).unwrap()
    }

    #[test]
    fn builtin_bank_loads() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.available("mathematics", Difficulty::Easy), 6);
        assert_eq!(bank.available("Physics", Difficulty::Hard), 4);
        assert_eq!(bank.available("operating system", Difficulty::Medium), 1);
        assert!(bank.has_subject("business studies"));
        assert_eq!(bank.available("business studies", Difficulty::Hard), 0);
        assert_eq!(bank.subjects().count(), 18);
    }

    #[test]
    fn builtin_answers_are_options() {
        let bank = QuestionBank::builtin().unwrap();
        for ((_, _), pool) in bank.pools() {
            for q in pool {
                assert!(q.offers(&q.answer), "{}", q.prompt);
            }
        }
    }

    #[test]
    fn lookup_is_case_folded() {
        let bank = small();
        assert_eq!(bank.pool("PHYSICS", Difficulty::Easy).len(), 2);
        assert!(bank.pool("physics", Difficulty::Medium).is_empty());
        assert!(bank.pool("unknown", Difficulty::Easy).is_empty());
        assert_eq!(bank.len(), 3);
    }

    #[test]
    fn answer_must_be_an_option() {
        let toml = r#"
[[questions]]
subject = "maths"
difficulty = "easy"
prompt = "2 + 2?"
options = ["3", "5", "6", "7"]
answer = "4"
"#;
        let err = QuestionBank::from_toml_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("not one of its options"));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let toml = r#"
[[questions]]
subject = "maths"
difficulty = "insane"
prompt = "2 + 2?"
options = ["4"]
answer = "4"
"#;
        assert!(QuestionBank::from_toml_str(toml, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = QuestionBank::from_toml_str("not [valid toml }{", &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validation_flags_authoring_mistakes() {
        let warnings = validate_bank(&small());
        assert!(warnings.iter().any(|w| w.message.contains("not in the study planner")));
        assert!(warnings.iter().any(|w| w.message.contains("3 options")));
        assert!(warnings.iter().any(|w| w.message.contains("repeats an option")));
    }

    #[test]
    fn builtin_bank_has_no_option_warnings() {
        let warnings = validate_bank(&QuestionBank::builtin().unwrap());
        // java is quizzable but not plannable; everything else is clean.
        assert!(warnings.iter().all(|w| w.difficulty.is_none()));
        assert!(warnings.iter().any(|w| w.subject.as_str() == "java"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.toml");
        std::fs::write(&path, SMALL_BANK).unwrap();

        let bank = QuestionBank::load(&path).unwrap();
        assert!(bank.has_subject("astronomy"));
        assert!(QuestionBank::load(&dir.path().join("missing.toml")).is_err());
    }
}
