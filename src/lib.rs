//! Gradebook: a local-first student roster manager.
//!
//! Single-user, in-process, flat-file. The roster lives in memory, every
//! mutation rewrites one JSON document on disk, and state survives between
//! runs through that file alone.
//!
//! # Surfaces
//!
//! - `gradebook menu` — the interactive numbered menu (prompts, delete
//!   confirmation, tabular output).
//! - Direct subcommands (`add`, `remove`, `edit`, `get`, `score`, `list`,
//!   `stats`, `search`, `filter`) for one-shot/scripted use, with
//!   `--format json` on the read surfaces.
//!
//! # Data file
//!
//! `--data-file` (default `students_data.json`) holds
//! `{"records": {"<id>": {id, name, age, gender, scores, createdAt}}}` and
//! round-trips exactly, timestamps included. The file is overwritten in
//! place on every mutation; a missing file is a clean first run.
//!
//! # Crate structure
//!
//! - [`core::record`]: one student's identity and score sheet
//! - [`core::store`]: the id → record table plus persistence
//! - [`core::stats`]: aggregate statistics and the score-band histogram
//! - [`core::menu`]: the interactive shell (presentation only)

pub mod core;

use core::error::GradebookError;
use core::menu;
use core::output;
use core::record::{Gender, StudentRecord};
use core::store::{RecordPatch, Roster};

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "gradebook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Local-first student roster manager: CRUD, per-subject scores, statistics, flat-file persistence."
)]
struct Cli {
    /// Path to the roster data file.
    #[clap(long, global = true, default_value = "students_data.json")]
    data_file: PathBuf,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive menu shell.
    Menu,
    /// Add a new student.
    Add {
        #[clap(value_name = "ID")]
        id: String,
        #[clap(long)]
        name: String,
        #[clap(long)]
        age: u32,
        #[clap(long, value_enum)]
        gender: Gender,
    },
    /// Remove a student by id.
    Remove {
        #[clap(value_name = "ID")]
        id: String,
    },
    /// Edit a student's identity fields (only the flags you pass change).
    Edit {
        #[clap(value_name = "ID")]
        id: String,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        age: Option<u32>,
        #[clap(long, value_enum)]
        gender: Option<Gender>,
    },
    /// Show one student in full.
    Get {
        #[clap(value_name = "ID")]
        id: String,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Record a score for one subject.
    Score {
        #[clap(value_name = "ID")]
        id: String,
        #[clap(long)]
        subject: String,
        #[clap(long)]
        value: f64,
    },
    /// List all students, sorted by id.
    List {
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Aggregate statistics plus the score-band distribution.
    Stats {
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Substring search across id, name, and gender label (case-sensitive).
    Search {
        #[clap(value_name = "KEYWORD")]
        keyword: String,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Students whose average score lies in [min, max] inclusive.
    Filter {
        #[clap(long)]
        min: f64,
        #[clap(long)]
        max: f64,
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn print_records(records: &mut Vec<&StudentRecord>, format: OutputFormat) {
    records.sort_by(|a, b| a.id.cmp(&b.id));
    match format {
        OutputFormat::Text => print!("{}", output::roster_table(records)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(records).unwrap_or_default()
        ),
    }
}

pub fn run() -> Result<(), GradebookError> {
    let cli = Cli::parse();
    let mut roster = Roster::open(&cli.data_file);

    match cli.command {
        Command::Menu => {
            menu::run_menu(&mut roster)?;
        }
        Command::Add {
            id,
            name,
            age,
            gender,
        } => {
            let record = StudentRecord::new(&id, &name, age, gender)?;
            if !roster.add(record) {
                return Err(GradebookError::ValidationError(format!(
                    "student id '{}' already exists",
                    id
                )));
            }
            println!("added student {}", id);
        }
        Command::Remove { id } => {
            if !roster.remove(&id) {
                return Err(GradebookError::NotFound(format!("student '{}'", id)));
            }
            println!("removed student {}", id);
        }
        Command::Edit {
            id,
            name,
            age,
            gender,
        } => {
            let patch = RecordPatch {
                name,
                age,
                gender,
                scores: None,
            };
            if patch.is_empty() {
                return Err(GradebookError::ValidationError(
                    "nothing to edit: pass at least one of --name, --age, --gender".to_string(),
                ));
            }
            if roster.find(&id).is_none() {
                return Err(GradebookError::NotFound(format!("student '{}'", id)));
            }
            if !roster.update(&id, &patch) {
                return Err(GradebookError::ValidationError(
                    "edit rejected: name must be non-empty and age within 0-150".to_string(),
                ));
            }
            println!("updated student {}", id);
        }
        Command::Get { id, format } => {
            let Some(record) = roster.find(&id) else {
                return Err(GradebookError::NotFound(format!("student '{}'", id)));
            };
            match format {
                OutputFormat::Text => print!("{}", output::record_detail(record)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(record)?)
                }
            }
        }
        Command::Score { id, subject, value } => {
            if roster.find(&id).is_none() {
                return Err(GradebookError::NotFound(format!("student '{}'", id)));
            }
            if subject.trim().is_empty() {
                return Err(GradebookError::ValidationError(
                    "subject must not be empty".to_string(),
                ));
            }
            if !roster.set_score(&id, &subject, value) {
                return Err(GradebookError::ValidationError(format!(
                    "score {} is outside 0-100",
                    value
                )));
            }
            println!("recorded {} = {} for {}", subject, value, id);
        }
        Command::List { format } => {
            let mut records = roster.list_all();
            print_records(&mut records, format);
        }
        Command::Stats { format } => {
            let stats = roster.statistics();
            let bands = roster.score_distribution();
            match format {
                OutputFormat::Text => {
                    print!("{}", output::statistics_block(&stats));
                    println!("\nscore distribution:");
                    print!("{}", output::histogram_rows(&bands));
                }
                OutputFormat::Json => {
                    let doc = serde_json::json!({
                        "statistics": stats,
                        "distribution": bands,
                    });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
            }
        }
        Command::Search { keyword, format } => {
            let mut records = roster.search(&keyword);
            print_records(&mut records, format);
        }
        Command::Filter { min, max, format } => {
            let mut records = roster.filter_by_average(min, max);
            print_records(&mut records, format);
        }
    }
    Ok(())
}
