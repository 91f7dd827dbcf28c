//! studyaid CLI: study planner, question generator and quiz player.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyaid", version, about = "Study planner, question generator and quiz player")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a day-by-day study plan up to an exam
    Plan {
        /// Subject and difficulty as NAME:DIFFICULTY (repeatable, e.g. "maths:hard")
        #[arg(long = "subject", required = true)]
        subjects: Vec<String>,

        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        exam_date: String,

        /// Study hours per day (1-12, default from config)
        #[arg(long)]
        hours: Option<f64>,

        /// Plan as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Also save the plan as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also save the plan as study_plan.json in the configured output directory
        #[arg(long)]
        save: bool,
    },

    /// Take a multiple-choice quiz from the question bank
    Quiz {
        /// Subject to be quizzed on
        #[arg(long)]
        subject: String,

        /// Difficulty: easy, medium, hard
        #[arg(long)]
        difficulty: String,

        /// Number of questions (1-50, default from config)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Generate practice questions from a text document
    Generate {
        /// Plain-text file with study material
        #[arg(long)]
        input: PathBuf,

        /// Question kind: all, mcq, very-short, short, long
        #[arg(long, default_value = "all")]
        kind: String,
    },

    /// List plannable subjects and question bank coverage
    Subjects,

    /// Validate a question bank file
    Validate {
        /// Bank file (default: configured or built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Create a starter config and an editable question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studyaid=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan {
            subjects,
            exam_date,
            hours,
            today,
            format,
            output,
            save,
        } => commands::plan::execute(
            subjects,
            exam_date,
            hours,
            today,
            format,
            output,
            save,
            cli.config,
        ),
        Commands::Quiz {
            subject,
            difficulty,
            count,
        } => commands::quiz::execute(subject, difficulty, count, cli.config),
        Commands::Generate { input, kind } => commands::generate::execute(input, kind),
        Commands::Subjects => commands::subjects::execute(cli.config),
        Commands::Validate { bank } => commands::validate::execute(bank, cli.config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
