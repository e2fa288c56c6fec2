//! Interactive line-oriented menu shell.
//!
//! A thin presentation layer over [`Roster`]: it prompts, validates input,
//! confirms destructive operations, and prints the rendered views from
//! [`output`]. It owns no roster state of its own. The loop is generic over
//! `BufRead`/`Write` so tests can drive it with scripted input.

use crate::core::output;
use crate::core::record::{Gender, StudentRecord, MAX_AGE, MAX_SCORE, MIN_SCORE};
use crate::core::store::{RecordPatch, Roster};
use std::io::{self, BufRead, Write};

/// Runs the menu against real stdin/stdout until exit or EOF.
pub fn run_menu(roster: &mut Roster) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu_loop(roster, &mut stdin.lock(), &mut stdout.lock())
}

/// The menu loop itself. EOF on `input` ends the loop cleanly.
pub fn menu_loop<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        print_menu(out)?;
        let Some(choice) = prompt(input, out, "select an option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_student(roster, input, out)?,
            "2" => delete_student(roster, input, out)?,
            "3" => edit_student(roster, input, out)?,
            "4" => query_student(roster, input, out)?,
            "5" => add_score(roster, input, out)?,
            "6" => show_all(roster, out)?,
            "7" => show_statistics(roster, out)?,
            "8" => search_students(roster, input, out)?,
            "9" => {
                writeln!(out, "goodbye")?;
                break;
            }
            _ => writeln!(out, "invalid option, choose 1-9")?,
        }
    }
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "        student roster manager")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "1. add student")?;
    writeln!(out, "2. delete student")?;
    writeln!(out, "3. edit student")?;
    writeln!(out, "4. query student")?;
    writeln!(out, "5. add score")?;
    writeln!(out, "6. show all students")?;
    writeln!(out, "7. statistics")?;
    writeln!(out, "8. search students")?;
    writeln!(out, "9. exit")?;
    writeln!(out, "{}", "=".repeat(40))
}

/// Writes `message`, reads one trimmed line. `None` means EOF.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt variant that rejects an empty answer with `complaint` and returns
/// `None` for both EOF and the empty case, so handlers can bail uniformly.
fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    complaint: &str,
) -> io::Result<Option<String>> {
    match prompt(input, out, message)? {
        None => Ok(None),
        Some(answer) if answer.is_empty() => {
            writeln!(out, "{}", complaint)?;
            Ok(None)
        }
        Some(answer) => Ok(Some(answer)),
    }
}

fn parse_gender(label: &str) -> Option<Gender> {
    match label {
        "male" => Some(Gender::Male),
        "female" => Some(Gender::Female),
        _ => None,
    }
}

fn add_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- add student ---")?;
    let Some(id) = prompt_required(input, out, "student id: ", "id must not be empty")? else {
        return Ok(());
    };
    if roster.find(&id).is_some() {
        writeln!(out, "student id '{}' already exists", id)?;
        return Ok(());
    }
    let Some(name) = prompt_required(input, out, "name: ", "name must not be empty")? else {
        return Ok(());
    };
    let Some(age_text) = prompt_required(input, out, "age: ", "age must not be empty")? else {
        return Ok(());
    };
    let age: u32 = match age_text.parse() {
        Ok(age) if age <= MAX_AGE => age,
        Ok(_) | Err(_) => {
            writeln!(out, "age must be a number between 0 and {}", MAX_AGE)?;
            return Ok(());
        }
    };
    let Some(gender_text) =
        prompt_required(input, out, "gender (male/female): ", "gender must not be empty")?
    else {
        return Ok(());
    };
    let Some(gender) = parse_gender(&gender_text) else {
        writeln!(out, "gender must be 'male' or 'female'")?;
        return Ok(());
    };

    match StudentRecord::new(&id, &name, age, gender) {
        Ok(record) => {
            if roster.add(record) {
                writeln!(out, "student added")?;
            } else {
                writeln!(out, "could not add student")?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn delete_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- delete student ---")?;
    let Some(id) = prompt_required(input, out, "student id: ", "id must not be empty")? else {
        return Ok(());
    };
    let Some(record) = roster.find(&id) else {
        writeln!(out, "no student with id '{}'", id)?;
        return Ok(());
    };
    write!(out, "{}", output::record_detail(record))?;
    let Some(answer) = prompt(input, out, "confirm delete? (y/n): ")? else {
        return Ok(());
    };
    if answer.eq_ignore_ascii_case("y") {
        if roster.remove(&id) {
            writeln!(out, "student removed")?;
        } else {
            writeln!(out, "delete failed")?;
        }
    } else {
        writeln!(out, "delete cancelled")?;
    }
    Ok(())
}

fn edit_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- edit student ---")?;
    let Some(id) = prompt_required(input, out, "student id: ", "id must not be empty")? else {
        return Ok(());
    };
    let Some(record) = roster.find(&id) else {
        writeln!(out, "no student with id '{}'", id)?;
        return Ok(());
    };
    write!(out, "{}", output::record_detail(record))?;
    writeln!(out, "1. name  2. age  3. gender  4. cancel")?;
    let Some(choice) = prompt(input, out, "field to edit: ")? else {
        return Ok(());
    };

    let mut patch = RecordPatch::default();
    match choice.as_str() {
        "1" => {
            let Some(name) =
                prompt_required(input, out, "new name: ", "name must not be empty")?
            else {
                return Ok(());
            };
            patch.name = Some(name);
        }
        "2" => {
            let Some(age_text) =
                prompt_required(input, out, "new age: ", "age must not be empty")?
            else {
                return Ok(());
            };
            match age_text.parse::<u32>() {
                Ok(age) if age <= MAX_AGE => patch.age = Some(age),
                Ok(_) | Err(_) => {
                    writeln!(out, "age must be a number between 0 and {}", MAX_AGE)?;
                    return Ok(());
                }
            }
        }
        "3" => {
            let Some(gender_text) = prompt_required(
                input,
                out,
                "new gender (male/female): ",
                "gender must not be empty",
            )?
            else {
                return Ok(());
            };
            match parse_gender(&gender_text) {
                Some(gender) => patch.gender = Some(gender),
                None => {
                    writeln!(out, "gender must be 'male' or 'female'")?;
                    return Ok(());
                }
            }
        }
        "4" => {
            writeln!(out, "edit cancelled")?;
            return Ok(());
        }
        _ => {
            writeln!(out, "invalid choice")?;
            return Ok(());
        }
    }

    if roster.update(&id, &patch) {
        writeln!(out, "student updated")?;
    } else {
        writeln!(out, "update failed")?;
    }
    Ok(())
}

fn query_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- query student ---")?;
    let Some(id) = prompt_required(input, out, "student id: ", "id must not be empty")? else {
        return Ok(());
    };
    match roster.find(&id) {
        Some(record) => write!(out, "{}", output::record_detail(record))?,
        None => writeln!(out, "no student with id '{}'", id)?,
    }
    Ok(())
}

fn add_score<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- add score ---")?;
    let Some(id) = prompt_required(input, out, "student id: ", "id must not be empty")? else {
        return Ok(());
    };
    let Some(record) = roster.find(&id) else {
        writeln!(out, "no student with id '{}'", id)?;
        return Ok(());
    };
    writeln!(out, "student: {}", record.name)?;
    let Some(subject) =
        prompt_required(input, out, "subject: ", "subject must not be empty")?
    else {
        return Ok(());
    };
    let Some(value_text) =
        prompt_required(input, out, "score (0-100): ", "score must not be empty")?
    else {
        return Ok(());
    };
    let Ok(value) = value_text.parse::<f64>() else {
        writeln!(out, "score must be a number")?;
        return Ok(());
    };
    if roster.set_score(&id, &subject, value) {
        writeln!(out, "score recorded")?;
    } else {
        writeln!(
            out,
            "score must be between {} and {}",
            MIN_SCORE, MAX_SCORE
        )?;
    }
    Ok(())
}

fn show_all<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- all students ---")?;
    if roster.is_empty() {
        writeln!(out, "no students yet")?;
        return Ok(());
    }
    let mut records = roster.list_all();
    records.sort_by(|a, b| a.id.cmp(&b.id));
    write!(out, "{}", output::roster_table(&records))
}

fn show_statistics<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- statistics ---")?;
    if roster.is_empty() {
        writeln!(out, "no students yet")?;
        return Ok(());
    }
    write!(out, "{}", output::statistics_block(&roster.statistics()))?;
    writeln!(out, "\n--- score distribution ---")?;
    write!(out, "{}", output::histogram_rows(&roster.score_distribution()))
}

fn search_students<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- search students ---")?;
    let Some(keyword) = prompt_required(
        input,
        out,
        "keyword (id/name/gender): ",
        "keyword must not be empty",
    )?
    else {
        return Ok(());
    };
    let mut results = roster.search(&keyword);
    if results.is_empty() {
        writeln!(out, "no matching students")?;
        return Ok(());
    }
    results.sort_by(|a, b| a.id.cmp(&b.id));
    writeln!(out, "found {} match(es):", results.len())?;
    write!(out, "{}", output::roster_table(&results))
}
