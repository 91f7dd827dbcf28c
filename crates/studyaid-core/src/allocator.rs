//! Weighted study-time allocation.
//!
//! The daily budget is split across subjects in proportion to their
//! difficulty weight, and the same split is repeated for every day from
//! tomorrow up to and including the exam date.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::model::{Subject, SubjectRequest};

/// A span of study time, stored as fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyDuration(f64);

impl StudyDuration {
    pub fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    /// Whole hours, truncated.
    pub fn whole_hours(self) -> u32 {
        self.0.trunc() as u32
    }

    /// Leftover minutes rounded to the nearest integer.
    ///
    /// Never carried into the hour field, so this can be 60.
    pub fn minutes(self) -> u32 {
        ((self.0 - self.0.trunc()) * 60.0).round() as u32
    }
}

impl fmt::Display for StudyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.whole_hours();
        let minutes = self.minutes();
        let hr_unit = if hours == 1 { "hr" } else { "hrs" };
        let min_unit = if minutes == 1 { "min" } else { "mins" };

        if hours > 0 && minutes > 0 {
            write!(f, "{hours} {hr_unit} {minutes} {min_unit}")
        } else if hours > 0 {
            write!(f, "{hours} {hr_unit}")
        } else {
            write!(f, "{minutes} {min_unit}")
        }
    }
}

/// Time given to one subject on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub subject: Subject,
    pub duration: StudyDuration,
}

/// The allocations for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    /// One entry per requested subject, in request order.
    pub allocations: Vec<Allocation>,
}

impl DayPlan {
    /// Label such as `21-Oct-2026 (Wednesday)`.
    pub fn label(&self) -> String {
        self.date.format("%d-%b-%Y (%A)").to_string()
    }

    pub fn duration_for(&self, subject: &Subject) -> Option<StudyDuration> {
        self.allocations
            .iter()
            .find(|a| &a.subject == subject)
            .map(|a| a.duration)
    }

    /// Sum of the unrounded allocations.
    pub fn total(&self) -> StudyDuration {
        StudyDuration(self.allocations.iter().map(|a| a.duration.hours()).sum())
    }
}

/// A day-by-day study schedule leading up to an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// The "today" the plan was computed against.
    pub generated_on: NaiveDate,
    pub exam_date: NaiveDate,
    pub daily_hours: f64,
    pub days: Vec<DayPlan>,
}

impl StudyPlan {
    /// Subjects in the order they were requested.
    pub fn subjects(&self) -> Vec<&Subject> {
        self.days
            .first()
            .map(|d| d.allocations.iter().map(|a| &a.subject).collect())
            .unwrap_or_default()
    }

    /// Save the plan as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize study plan")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write study plan to {}", path.display()))?;
        Ok(())
    }

    /// Load a plan previously written by [`StudyPlan::save_json`].
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read study plan from {}", path.display()))?;
        let plan: StudyPlan =
            serde_json::from_str(&content).context("failed to parse study plan JSON")?;
        Ok(plan)
    }
}

/// Compute the study plan for `requests` up to `exam_date`.
///
/// Each subject receives `daily_hours * weight / total_weight` on every day
/// from `today + 1` through `exam_date`.
pub fn compute_plan(
    requests: &[SubjectRequest],
    exam_date: NaiveDate,
    daily_hours: f64,
    today: NaiveDate,
) -> Result<StudyPlan, PlanError> {
    if requests.is_empty() {
        return Err(PlanError::NoSubjects);
    }
    let days_left = (exam_date - today).num_days();
    if days_left <= 0 {
        return Err(PlanError::PastExamDate { exam_date, today });
    }
    if !daily_hours.is_finite() || daily_hours <= 0.0 {
        return Err(PlanError::InvalidDailyHours(daily_hours));
    }

    let total_weight: u32 = requests.iter().map(|r| r.difficulty().weight()).sum();
    let allocations: Vec<Allocation> = requests
        .iter()
        .map(|r| Allocation {
            subject: r.subject().clone(),
            duration: StudyDuration(
                daily_hours * f64::from(r.difficulty().weight()) / f64::from(total_weight),
            ),
        })
        .collect();

    tracing::debug!(total_weight, days_left, "allocating daily study time");

    let days: Vec<DayPlan> = today
        .iter_days()
        .skip(1)
        .take(days_left as usize)
        .map(|date| DayPlan {
            date,
            allocations: allocations.clone(),
        })
        .collect();

    tracing::info!(
        "generated study plan: {} day(s) x {} subject(s)",
        days.len(),
        requests.len()
    );

    Ok(StudyPlan {
        generated_on: today,
        exam_date,
        daily_hours,
        days,
    })
}
