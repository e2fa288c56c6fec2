//! Student record type: identity fields plus a per-subject score mapping.

use crate::core::error::GradebookError;
use crate::core::time;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Upper bound on a plausible student age.
pub const MAX_AGE: u32 = 150;
/// Scores are percentages on a fixed 0-100 scale.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Closed set of gender categories. Kept as an enum so the store never
/// carries free-form labels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Wire/display label, also the haystack used by roster search.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One student: identity fields, subject scores, creation timestamp.
///
/// `id` is the primary key and never changes after construction. The
/// creation timestamp is taken once and round-trips through serialization
/// at full precision (serialized as `createdAt`, RFC 3339).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Builds a record with an empty score sheet. Rejects an empty id or
    /// name and an age outside [0, 150].
    pub fn new(
        id: &str,
        name: &str,
        age: u32,
        gender: Gender,
    ) -> Result<Self, GradebookError> {
        if id.trim().is_empty() {
            return Err(GradebookError::ValidationError(
                "student id must not be empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(GradebookError::ValidationError(
                "student name must not be empty".to_string(),
            ));
        }
        if age > MAX_AGE {
            return Err(GradebookError::ValidationError(format!(
                "age {} is outside 0-{}",
                age, MAX_AGE
            )));
        }
        Ok(StudentRecord {
            id: id.to_string(),
            name: name.to_string(),
            age,
            gender,
            scores: BTreeMap::new(),
            created_at: time::now_utc(),
        })
    }

    /// Inserts or overwrites the score for `subject`. Returns false for a
    /// non-finite value or one outside [0, 100], leaving the sheet untouched.
    pub fn set_score(&mut self, subject: &str, value: f64) -> bool {
        if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return false;
        }
        self.scores.insert(subject.to_string(), value);
        true
    }

    /// Arithmetic mean of all scores; 0.0 with no scores recorded.
    pub fn average_score(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.values().sum::<f64>() / self.scores.len() as f64
    }

    /// Sum of all scores; 0.0 with no scores recorded.
    pub fn total_score(&self) -> f64 {
        self.scores.values().sum()
    }

    pub fn subject_count(&self) -> usize {
        self.scores.len()
    }
}
