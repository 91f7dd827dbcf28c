//! User configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level studyaid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyaidConfig {
    /// Default daily study budget for `plan`, in hours.
    #[serde(default = "default_daily_hours")]
    pub daily_hours: f64,
    /// Default number of questions for `quiz`.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Question bank file replacing the built-in bank.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    /// Directory `plan --save` writes `study_plan.json` into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_daily_hours() -> f64 {
    4.0
}
fn default_question_count() -> usize {
    5
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./studyaid-output")
}

impl Default for StudyaidConfig {
    fn default() -> Self {
        Self {
            daily_hours: default_daily_hours(),
            question_count: default_question_count(),
            question_bank: None,
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studyaid.toml` in the current directory
/// 2. `~/.config/studyaid/config.toml`
///
/// Environment variable override: `STUDYAID_QUESTION_BANK`.
pub fn load_config() -> Result<StudyaidConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudyaidConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studyaid.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudyaidConfig::default(),
    };

    if let Ok(bank) = std::env::var("STUDYAID_QUESTION_BANK") {
        if !bank.is_empty() {
            config.question_bank = Some(PathBuf::from(bank));
        }
    }

    config.question_bank = config.question_bank.as_deref().map(resolve_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

/// Parse and sanity-check a config document.
pub fn parse_config(content: &str) -> Result<StudyaidConfig> {
    let config: StudyaidConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.daily_hours.is_finite() && config.daily_hours > 0.0,
        "daily_hours must be a positive number"
    );
    anyhow::ensure!(config.question_count >= 1, "question_count must be at least 1");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studyaid"))
}
