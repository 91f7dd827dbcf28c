//! Heuristic question generation from plain-text study material.
//!
//! Everything here is text in, text out. The heuristics are deliberately
//! naive: a "concept" is the first five words of a long sentence, and the
//! generated questions are template fill-ins around it. Expect awkward
//! phrasing on real documents; there is no semantic analysis.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentences at or below this many characters are ignored.
const MIN_SENTENCE_CHARS: usize = 30;
/// Words taken from the start of a sentence to form its concept.
const CONCEPT_WORDS: usize = 5;
/// Questions produced per category.
const PER_KIND: usize = 5;
const PATTERN_COUNT: usize = 5;

static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:lecture\s*notes?|prepared\s*by|page\s*\d+|contents?|index|chapter\s*\d+)\b",
    )
    .expect("boilerplate pattern is valid")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static QUESTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*q\s*\d*\s*[:.\-)]\s*").expect("question marker pattern is valid")
});
static DIAGRAM_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\([^)]*diagram[^)]*\)").expect("diagram pattern is valid")
});
static PAGE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpage\s*\d+\b").expect("page pattern is valid"));
static REPHRASINGS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)define\s+briefly(?:\s*[:\-])?", "Define"),
        (r"(?i)explain\s+shortly(?:\s*[:\-])?", "Explain"),
        (r"(?i)write\s+a\s+detailed\s+note\s+on(?:\s*[:\-])?", "Write a note on"),
        (r"(?i)what\s+is\s+related\s+to(?:\s*[:\-])?", "Explain"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("rephrasing pattern is valid"), replacement)
    })
    .collect()
});

/// Category of generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Mcq,
    VeryShort,
    Short,
    Long,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::Mcq,
        QuestionKind::VeryShort,
        QuestionKind::Short,
        QuestionKind::Long,
    ];
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Mcq => write!(f, "MCQ"),
            QuestionKind::VeryShort => write!(f, "Very Short"),
            QuestionKind::Short => write!(f, "Short"),
            QuestionKind::Long => write!(f, "Long"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "mcq" => Ok(QuestionKind::Mcq),
            "very-short" | "vs" => Ok(QuestionKind::VeryShort),
            "short" => Ok(QuestionKind::Short),
            "long" => Ok(QuestionKind::Long),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// A generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Questions generated from one document, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestions {
    pub mcq: Vec<GeneratedMcq>,
    pub very_short: Vec<String>,
    pub short: Vec<String>,
    pub long: Vec<String>,
}

impl GeneratedQuestions {
    /// Question texts of one kind. MCQs yield their question line only.
    pub fn prompts(&self, kind: QuestionKind) -> Vec<&str> {
        match kind {
            QuestionKind::Mcq => self.mcq.iter().map(|q| q.question.as_str()).collect(),
            QuestionKind::VeryShort => self.very_short.iter().map(String::as_str).collect(),
            QuestionKind::Short => self.short.iter().map(String::as_str).collect(),
            QuestionKind::Long => self.long.iter().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.mcq.len() + self.very_short.len() + self.short.len() + self.long.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Strip document boilerplate (lecture-note headers, page and chapter
/// markers, contents/index words) and collapse whitespace.
pub fn clean_document(text: &str) -> String {
    let stripped = BOILERPLATE.replace_all(text, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Sentences long enough to carry a concept.
pub fn extract_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// The first few words of a sentence.
pub fn concept_of(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .take(CONCEPT_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

fn apply_pattern(i: usize, concept: &str) -> String {
    match i % PATTERN_COUNT {
        0 => format!("Write a detailed note on {concept}"),
        1 => format!("Explain the difference between {concept} and {concept}"),
        2 => format!("Explain the types of {concept}"),
        3 => format!("Describe the architecture of {concept}"),
        _ => format!("Explain the concept of {concept}"),
    }
}

/// Generate questions from a document.
///
/// The text is cleaned, split into sentences and shuffled; up to twenty
/// sentences are used, five per kind in the order MCQ, very short, short,
/// long.
pub fn generate_questions<R: Rng + ?Sized>(text: &str, rng: &mut R) -> GeneratedQuestions {
    let mut sentences = extract_sentences(&clean_document(text));
    sentences.shuffle(rng);

    let mut out = GeneratedQuestions::default();
    for (i, sentence) in sentences.iter().take(PER_KIND * 4).enumerate() {
        let concept = concept_of(sentence);
        match i / PER_KIND {
            0 => {
                let options: Vec<String> = ["A", "B", "C", "D"]
                    .iter()
                    .map(|x| format!("{concept} Option {x}"))
                    .collect();
                out.mcq.push(GeneratedMcq {
                    question: apply_pattern(i, &concept),
                    answer: options[0].clone(),
                    options,
                });
            }
            1 => out.very_short.push(format!("Define briefly: {concept}")),
            2 => out
                .short
                .push(format!("Explain shortly: {}", apply_pattern(i, &concept))),
            _ => out.long.push(apply_pattern(i, &concept)),
        }
    }

    tracing::debug!(
        "generated {} question(s) from {} sentence(s)",
        out.len(),
        sentences.len()
    );
    out
}

/// Tidy a question for display: drop a leading `Q:`/`Q1.` marker, shorten
/// stock phrasings, remove diagram notes and page references, collapse
/// whitespace and capitalize the first letter.
pub fn clean_question_text(text: &str) -> String {
    let mut out = QUESTION_MARKER.replace(text, "").into_owned();
    for (pattern, replacement) in REPHRASINGS.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out = DIAGRAM_NOTE.replace_all(&out, "").into_owned();
    out = PAGE_REF.replace_all(&out, "").into_owned();
    let out = WHITESPACE.replace_all(&out, " ").trim().to_string();

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn document(sentences: usize) -> String {
        (0..sentences)
            .map(|i| format!("Topic{i} covers several important ideas about the subject matter"))
            .collect::<Vec<_>>()
            .join(". ")
    }

    #[test]
    fn clean_document_strips_boilerplate() {
        let text = "Lecture Notes   Prepared by Dr X\nChapter 3 Osmosis moves water. Page 12 Contents";
        assert_eq!(clean_document(text), "Dr X Osmosis moves water.");
    }

    #[test]
    fn short_sentences_are_dropped() {
        let text = "Too short. This sentence is definitely longer than thirty characters. Tiny";
        assert_eq!(
            extract_sentences(text),
            vec!["This sentence is definitely longer than thirty characters"]
        );
    }

    #[test]
    fn concept_is_first_five_words() {
        assert_eq!(
            concept_of("Photosynthesis converts light energy into chemical energy in plants"),
            "Photosynthesis converts light energy into"
        );
        assert_eq!(concept_of("Two words"), "Two words");
    }

    #[test]
    fn twenty_sentences_fill_every_kind() {
        let mut rng = StdRng::seed_from_u64(42);
        let q = generate_questions(&document(25), &mut rng);

        assert_eq!(q.mcq.len(), 5);
        assert_eq!(q.very_short.len(), 5);
        assert_eq!(q.short.len(), 5);
        assert_eq!(q.long.len(), 5);
        assert!(q.very_short.iter().all(|s| s.starts_with("Define briefly: ")));
        assert!(q.short.iter().all(|s| s.starts_with("Explain shortly: ")));
        for mcq in &q.mcq {
            assert_eq!(mcq.options.len(), 4);
            assert_eq!(mcq.answer, mcq.options[0]);
            assert!(mcq.answer.ends_with("Option A"));
        }
    }

    #[test]
    fn few_sentences_fill_mcq_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = generate_questions(&document(7), &mut rng);
        assert_eq!(q.mcq.len(), 5);
        assert_eq!(q.very_short.len(), 2);
        assert!(q.short.is_empty());
        assert!(q.long.is_empty());
        assert_eq!(q.prompts(QuestionKind::VeryShort).len(), 2);
    }

    #[test]
    fn empty_document_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_questions("", &mut rng).is_empty());
        assert!(generate_questions("Short. Also short.", &mut rng).is_empty());
    }

    #[test]
    fn patterns_cycle_by_position() {
        assert_eq!(apply_pattern(0, "cells"), "Write a detailed note on cells");
        assert_eq!(
            apply_pattern(6, "cells"),
            "Explain the difference between cells and cells"
        );
        assert_eq!(apply_pattern(19, "cells"), "Explain the concept of cells");
    }

    #[test]
    fn clean_question_text_rephrases() {
        assert_eq!(clean_question_text("Define briefly: osmosis"), "Define osmosis");
        assert_eq!(
            clean_question_text("q1. write a detailed note on: the heart (see diagram)"),
            "Write a note on the heart"
        );
        assert_eq!(clean_question_text("Q: what is related to entropy"), "Explain entropy");
        assert_eq!(
            clean_question_text("Explain   shortly  the cycle page 4"),
            "Explain the cycle"
        );
        assert_eq!(clean_question_text("   "), "");
    }

    #[test]
    fn clean_question_text_keeps_inner_q() {
        assert_eq!(
            clean_question_text("Which question uses quartz?"),
            "Which question uses quartz?"
        );
    }

    #[test]
    fn kind_parse_and_display() {
        assert_eq!("very-short".parse::<QuestionKind>().unwrap(), QuestionKind::VeryShort);
        assert_eq!("Very Short".parse::<QuestionKind>().unwrap(), QuestionKind::VeryShort);
        assert_eq!("MCQ".parse::<QuestionKind>().unwrap(), QuestionKind::Mcq);
        assert!("essay".parse::<QuestionKind>().is_err());
        assert_eq!(QuestionKind::Long.to_string(), "Long");
    }
}
