//! The `studyaid generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use studyaid_core::generator::{clean_question_text, generate_questions, GeneratedQuestions, QuestionKind};

pub fn execute(input: PathBuf, kind: String) -> Result<()> {
    let kinds: Vec<QuestionKind> = if kind.eq_ignore_ascii_case("all") {
        QuestionKind::ALL.to_vec()
    } else {
        vec![kind.parse::<QuestionKind>().map_err(|e: String| anyhow::anyhow!(e))?]
    };

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read document: {}", input.display()))?;
    let generated = generate_questions(&text, &mut rand::rng());

    if generated.is_empty() {
        anyhow::bail!(
            "no questions could be generated from {}: it has no sentences long enough to use",
            input.display()
        );
    }

    print!("{}", render(&generated, &kinds));
    Ok(())
}

fn render(generated: &GeneratedQuestions, kinds: &[QuestionKind]) -> String {
    let mut out = String::new();
    for kind in kinds {
        out.push_str(&format!("{kind} Questions:\n"));
        match kind {
            QuestionKind::Mcq => {
                for (i, q) in generated.mcq.iter().enumerate() {
                    out.push_str(&format!("{}. {}\n", i + 1, clean_question_text(&q.question)));
                    for (letter, option) in ['A', 'B', 'C', 'D'].iter().zip(&q.options) {
                        out.push_str(&format!("   {letter}) {option}\n"));
                    }
                    out.push_str(&format!("   Answer: {}\n", q.answer));
                }
            }
            _ => {
                for (i, q) in generated.prompts(*kind).into_iter().enumerate() {
                    out.push_str(&format!("{}. {}\n", i + 1, clean_question_text(q)));
                }
            }
        }
        if generated.prompts(*kind).is_empty() {
            out.push_str("   (not enough material)\n");
        }
        out.push('\n');
    }
    out
}
