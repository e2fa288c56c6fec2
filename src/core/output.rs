//! Plain-string rendering helpers for roster tables and statistics.
//!
//! Everything here returns a `String` so the CLI and the menu shell can
//! print the same views and tests can assert on them directly.

use crate::core::record::StudentRecord;
use crate::core::stats::{RosterStatistics, ScoreBand};
use crate::core::time;
use std::fmt::Write as _;

/// Column-aligned roster table. Callers pass records already sorted the way
/// they want them displayed.
pub fn roster_table(records: &[&StudentRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<16} {:>4} {:<8} {:>8} {:>9}",
        "id", "name", "age", "gender", "average", "subjects"
    );
    let _ = writeln!(out, "{}", "-".repeat(62));
    for record in records {
        let _ = writeln!(
            out,
            "{:<12} {:<16} {:>4} {:<8} {:>8.2} {:>9}",
            record.id,
            record.name,
            record.age,
            record.gender.label(),
            record.average_score(),
            record.subject_count()
        );
    }
    let _ = writeln!(out, "\ntotal: {} student(s)", records.len());
    out
}

/// Full detail view for one record, scores listed per subject.
pub fn record_detail(record: &StudentRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id:      {}", record.id);
    let _ = writeln!(out, "name:    {}", record.name);
    let _ = writeln!(out, "age:     {}", record.age);
    let _ = writeln!(out, "gender:  {}", record.gender.label());
    let _ = writeln!(out, "created: {}", time::display_stamp(&record.created_at));
    if record.scores.is_empty() {
        let _ = writeln!(out, "scores:  (none recorded)");
    } else {
        let _ = writeln!(out, "scores:");
        for (subject, value) in &record.scores {
            let _ = writeln!(out, "  {:<20} {:>6.1}", subject, value);
        }
        let _ = writeln!(
            out,
            "average: {:.2}   total: {:.1}",
            record.average_score(),
            record.total_score()
        );
    }
    out
}

/// Aggregate statistics block.
pub fn statistics_block(stats: &RosterStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "students:        {}", stats.total_students);
    let _ = writeln!(out, "class average:   {:.2}", stats.average_score);
    let _ = writeln!(out, "highest average: {:.2}", stats.max_score);
    let _ = writeln!(out, "lowest average:  {:.2}", stats.min_score);
    let _ = writeln!(out, "excellent (>=90): {}", stats.excellent_count);
    let _ = writeln!(out, "failing (<60):    {}", stats.fail_count);
    out
}

/// Score-band distribution rows.
pub fn histogram_rows(bands: &[ScoreBand]) -> String {
    let mut out = String::new();
    for band in bands {
        let _ = writeln!(
            out,
            "{:<10} ({:>3}-{:>3}): {:>3}  ({:.1}%)",
            band.label, band.min, band.max, band.count, band.percentage
        );
    }
    out
}
