//! Aggregate statistics over per-student average scores.

use serde::Serialize;

/// Summary of the whole roster, computed from each student's average score.
/// All fields are zero on an empty roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterStatistics {
    pub total_students: usize,
    pub average_score: f64,
    pub max_score: f64,
    pub min_score: f64,
    /// Students with an average of 90 or above.
    pub excellent_count: usize,
    /// Students with an average below 60.
    pub fail_count: usize,
}

impl RosterStatistics {
    pub fn zero() -> Self {
        RosterStatistics {
            total_students: 0,
            average_score: 0.0,
            max_score: 0.0,
            min_score: 0.0,
            excellent_count: 0,
            fail_count: 0,
        }
    }

    pub fn from_averages(averages: &[f64]) -> Self {
        if averages.is_empty() {
            return Self::zero();
        }
        let total = averages.len();
        let sum: f64 = averages.iter().sum();
        let max = averages.iter().cloned().fold(f64::MIN, f64::max);
        let min = averages.iter().cloned().fold(f64::MAX, f64::min);
        RosterStatistics {
            total_students: total,
            average_score: sum / total as f64,
            max_score: max,
            min_score: min,
            excellent_count: averages.iter().filter(|a| **a >= 90.0).count(),
            fail_count: averages.iter().filter(|a| **a < 60.0).count(),
        }
    }
}

/// One row of the fixed score-band distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBand {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub count: usize,
    pub percentage: f64,
}

const BANDS: [(&str, u32, u32); 5] = [
    ("excellent", 90, 100),
    ("good", 80, 89),
    ("fair", 70, 79),
    ("pass", 60, 69),
    ("fail", 0, 59),
];

/// Buckets averages into the five fixed bands. Bounds are inclusive integer
/// endpoints, so a fractional average strictly between two bands (e.g. 89.5)
/// lands in none of them.
pub fn score_histogram(averages: &[f64]) -> Vec<ScoreBand> {
    let total = averages.len();
    BANDS
        .iter()
        .map(|&(label, min, max)| {
            let count = averages
                .iter()
                .filter(|a| **a >= min as f64 && **a <= max as f64)
                .count();
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            ScoreBand {
                label,
                min,
                max,
                count,
                percentage,
            }
        })
        .collect()
}
