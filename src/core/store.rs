//! Roster store: the in-memory id → record table plus its flat-file
//! persistence.
//!
//! The store is the sole owner of roster state. Every mutating operation
//! rewrites the whole backing file; there is no incremental log. A single
//! process/thread is assumed to own the file at a time.

use crate::core::record::{Gender, StudentRecord, MAX_AGE};
use crate::core::stats::{self, RosterStatistics, ScoreBand};
use colored::Colorize;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Partial update for one record. Only supplied fields are applied;
/// `scores` is merged subject-by-subject, never replaced wholesale.
#[derive(Debug, Default, Clone)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub scores: Option<BTreeMap<String, f64>>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.scores.is_none()
    }
}

/// On-disk document shape: `{"records": {"<id>": {...}}}`.
#[derive(Debug, Default, Deserialize)]
struct RosterDocument {
    #[serde(default)]
    records: FxHashMap<String, StudentRecord>,
}

/// The roster: all student records keyed by id, backed by one JSON file.
///
/// Validation failures surface as boolean results so callers can branch
/// without error plumbing; I/O and parse failures during persistence are
/// logged and reported as `false`, never propagated.
#[derive(Debug)]
pub struct Roster {
    records: FxHashMap<String, StudentRecord>,
    data_file: PathBuf,
}

impl Roster {
    /// Opens the roster at `data_file`, loading any existing records. A
    /// missing file is a clean first run; an unreadable or corrupt file is
    /// logged and leaves the roster empty rather than aborting.
    pub fn open(data_file: &Path) -> Self {
        let mut roster = Roster {
            records: FxHashMap::default(),
            data_file: data_file.to_path_buf(),
        };
        roster.load();
        roster
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a new record and rewrites the backing file. Returns false if
    /// the id is already taken, leaving the existing record untouched.
    pub fn add(&mut self, record: StudentRecord) -> bool {
        if self.records.contains_key(&record.id) {
            return false;
        }
        self.records.insert(record.id.clone(), record);
        self.persist();
        true
    }

    /// Removes the record with `id` and rewrites the backing file. Returns
    /// false if no such record exists.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.records.remove(id).is_none() {
            return false;
        }
        self.persist();
        true
    }

    /// Applies a partial update to the record with `id`. A patch carrying an
    /// empty name or an out-of-range age is rejected wholesale; nothing is
    /// applied. Patch scores are merged through [`StudentRecord::set_score`],
    /// silently skipping out-of-range entries, and subjects not named in the
    /// patch are kept.
    pub fn update(&mut self, id: &str, patch: &RecordPatch) -> bool {
        let Some(record) = self.records.get_mut(id) else {
            return false;
        };
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return false;
            }
        }
        if let Some(age) = patch.age {
            if age > MAX_AGE {
                return false;
            }
        }

        if let Some(name) = &patch.name {
            record.name = name.clone();
        }
        if let Some(age) = patch.age {
            record.age = age;
        }
        if let Some(gender) = patch.gender {
            record.gender = gender;
        }
        if let Some(scores) = &patch.scores {
            for (subject, value) in scores {
                record.set_score(subject, *value);
            }
        }
        self.persist();
        true
    }

    /// Records a score for one student and rewrites the backing file.
    /// Returns false for an unknown id or an out-of-range value.
    pub fn set_score(&mut self, id: &str, subject: &str, value: f64) -> bool {
        let Some(record) = self.records.get_mut(id) else {
            return false;
        };
        if !record.set_score(subject, value) {
            return false;
        }
        self.persist();
        true
    }

    /// Exact-id lookup.
    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.records.get(id)
    }

    /// Case-sensitive substring search against each record's id, name, or
    /// gender label. The gender-label haystack is a documented quirk:
    /// searching "male" also matches every record whose label is "female".
    pub fn search(&self, keyword: &str) -> Vec<&StudentRecord> {
        self.records
            .values()
            .filter(|r| {
                r.id.contains(keyword)
                    || r.name.contains(keyword)
                    || r.gender.label().contains(keyword)
            })
            .collect()
    }

    /// Records whose average score lies in `[min, max]` inclusive.
    pub fn filter_by_average(&self, min: f64, max: f64) -> Vec<&StudentRecord> {
        self.records
            .values()
            .filter(|r| {
                let avg = r.average_score();
                avg >= min && avg <= max
            })
            .collect()
    }

    /// All records in the map's natural order. Display layers wanting a
    /// stable order sort by id themselves.
    pub fn list_all(&self) -> Vec<&StudentRecord> {
        self.records.values().collect()
    }

    /// Aggregate summary over all per-student averages; all zeros when the
    /// roster is empty.
    pub fn statistics(&self) -> RosterStatistics {
        RosterStatistics::from_averages(&self.averages())
    }

    /// Fixed five-band distribution of per-student averages.
    pub fn score_distribution(&self) -> Vec<ScoreBand> {
        stats::score_histogram(&self.averages())
    }

    fn averages(&self) -> Vec<f64> {
        self.records.values().map(|r| r.average_score()).collect()
    }

    /// Serializes every record into one pretty-printed JSON document and
    /// overwrites the backing file in place (no temp-file rename; a crash
    /// mid-write can corrupt the file). Failures are logged with their cause
    /// and reported as `false`.
    pub fn persist(&self) -> bool {
        let doc = serde_json::json!({ "records": &self.records });
        let body = match serde_json::to_string_pretty(&doc) {
            Ok(body) => body,
            Err(e) => {
                eprintln!("{} {}", "roster save failed:".red(), e);
                return false;
            }
        };
        if let Err(e) = fs::write(&self.data_file, body) {
            eprintln!(
                "{} {} ({})",
                "roster save failed:".red(),
                self.data_file.display(),
                e
            );
            return false;
        }
        true
    }

    /// Reads the backing file back into memory. A missing file is success
    /// with an empty roster (first run). Any read or parse failure is
    /// logged and reported as `false`, leaving the in-memory records
    /// exactly as they were.
    pub fn load(&mut self) -> bool {
        if !self.data_file.exists() {
            return true;
        }
        let body = match fs::read_to_string(&self.data_file) {
            Ok(body) => body,
            Err(e) => {
                eprintln!(
                    "{} {} ({})",
                    "roster load failed:".red(),
                    self.data_file.display(),
                    e
                );
                return false;
            }
        };
        match serde_json::from_str::<RosterDocument>(&body) {
            Ok(doc) => {
                self.records = doc.records;
                true
            }
            Err(e) => {
                eprintln!(
                    "{} {} ({})",
                    "roster load failed:".red(),
                    self.data_file.display(),
                    e
                );
                false
            }
        }
    }
}
