//! The `studyaid init` command.

use std::path::Path;

use anyhow::Result;

use studyaid_core::bank::QuestionBank;

pub fn execute() -> Result<()> {
    write_unless_exists(Path::new("studyaid.toml"), SAMPLE_CONFIG)?;
    write_unless_exists(Path::new("question-bank.toml"), QuestionBank::builtin_source())?;

    println!("\nNext steps:");
    println!("  1. Edit studyaid.toml to set your daily hours and quiz length");
    println!("  2. Add your own questions to question-bank.toml");
    println!("  3. Run: studyaid validate --bank question-bank.toml");
    println!("  4. Run: studyaid plan --subject maths:hard --subject english:easy --exam-date YYYY-MM-DD");

    Ok(())
}

fn write_unless_exists(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studyaid configuration

# Default study hours per day for `studyaid plan`
daily_hours = 4.0

# Default number of questions for `studyaid quiz`
question_count = 5

# Use this question bank instead of the built-in one
question_bank = "question-bank.toml"

# Where `studyaid plan --save` writes study_plan.json
output_dir = "./studyaid-output"
"#;
