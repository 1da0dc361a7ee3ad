//! Output formatting for human and JSON modes
//!
//! Each report produces one of the result types below, which can be rendered
//! either as delimited text (one header row, then one row per record) or as
//! pretty-printed JSON. Task warnings go to stderr in human mode and are part
//! of the document in JSON mode.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Band, BandCounts};
use crate::error::Result;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Non-fatal problem found while processing one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskWarning {
    /// Neither point field is set
    MissingPoints {
        /// Task name
        task: String,
        /// Link to the task
        permalink_url: String,
    },
    /// A point field holds a label without a numeric prefix
    MalformedPoints {
        /// Task name
        task: String,
        /// Field the label was read from
        field_id: String,
        /// The raw label
        raw: String,
    },
    /// A completed task has no completing user
    MissingCompleter {
        /// Task name
        task: String,
    },
}

impl TaskWarning {
    /// Write the warning as human-readable text
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::MissingPoints {
                task,
                permalink_url,
            } => {
                writeln!(out, "{}", "--- MISSING POINTS ---".red().bold())?;
                writeln!(
                    out,
                    "{}",
                    format!("Task: {task}, has no points. Go to {permalink_url} to update").red()
                )
            },
            Self::MalformedPoints { task, raw, .. } => writeln!(
                out,
                "{}",
                format!("Bad point value: {raw:?} on task {task}").yellow()
            ),
            Self::MissingCompleter { task } => {
                writeln!(out, "{}", format!("Task {task} has no completed_by").yellow())
            },
        }
    }
}

/// Write each warning to `out`
pub fn write_warnings<W: Write>(warnings: &[TaskWarning], out: &mut W) -> io::Result<()> {
    for warning in warnings {
        warning.write_human(out)?;
    }
    Ok(())
}

/// Format a point value with at least one decimal place (`5.0`, `2.5`)
#[must_use]
pub fn format_points(points: f64) -> String {
    if points.fract().abs() < f64::EPSILON {
        format!("{points:.1}")
    } else {
        points.to_string()
    }
}

/// Format a timestamp the way the API does, empty when absent
#[must_use]
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)).unwrap_or_default()
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(out)
}

/// Render a report to stdout, and its warnings to stderr in human mode
fn render_to_stdio(
    mode: OutputMode,
    warnings: &[TaskWarning],
    write: impl FnOnce(&mut io::StdoutLock<'static>) -> Result<()>,
) -> Result<()> {
    if mode == OutputMode::Human {
        write_warnings(warnings, &mut io::stderr().lock())?;
    }
    let mut stdout = io::stdout().lock();
    write(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

// =============================================================================
// TASK LISTING (code-orange, support-board)
// =============================================================================

/// One task row of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Task name
    pub name: String,
    /// Completion flag
    pub completed: bool,
    /// Completion time
    pub completed_at: Option<DateTime<Utc>>,
    /// Completing user id
    pub completed_by: Option<String>,
    /// Link to the task
    pub permalink_url: String,
    /// Assignee display name, `unknown` when unassigned
    pub assignee: String,
}

/// Result of a listing report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListing {
    /// Task rows in source order
    pub rows: Vec<TaskRow>,
}

impl TaskListing {
    /// Column headers
    pub const HEADER: [&'static str; 6] =
        ["name", "completed", "completed_at", "completed_by", "permalink_url", "assignee.name"];

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> Result<()> {
        render_to_stdio(mode, &[], |out| self.write_to(out, mode))
    }

    /// Write the result to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> Result<()> {
        match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => write_json(out, self),
        }
    }

    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut csv = csv_writer(out);
        csv.write_record(Self::HEADER)?;
        for row in &self.rows {
            csv.write_record([
                row.name.clone(),
                row.completed.to_string(),
                format_timestamp(row.completed_at),
                row.completed_by.clone().unwrap_or_default(),
                row.permalink_url.clone(),
                row.assignee.clone(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}

// =============================================================================
// SPECIFIC TASKS
// =============================================================================

/// One row of the specific-tasks report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecificTaskRow {
    /// Task name
    pub name: String,
    /// Completion flag
    pub completed: bool,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Link to the task
    pub permalink_url: String,
    /// Assignee display name, `unknown` when unassigned
    pub assignee: String,
    /// Age band
    pub band: Band,
}

/// Result of the specific-tasks report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecificTasksReport {
    /// Rows sorted by creation date, oldest first
    pub rows: Vec<SpecificTaskRow>,
    /// Tasks per age band
    pub bands: BandCounts,
}

impl SpecificTasksReport {
    /// Column headers
    pub const HEADER: [&'static str; 5] =
        ["name", "completed", "created_at", "permalink_url", "assignee.name"];

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> Result<()> {
        render_to_stdio(mode, &[], |out| self.write_to(out, mode))
    }

    /// Write the result to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> Result<()> {
        match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => write_json(out, self),
        }
    }

    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        {
            let mut csv = csv_writer(&mut *out);
            csv.write_record(Self::HEADER)?;
            for row in &self.rows {
                csv.write_record([
                    row.name.clone(),
                    row.completed.to_string(),
                    format_timestamp(row.created_at),
                    row.permalink_url.clone(),
                    row.assignee.clone(),
                ])?;
            }
            csv.flush()?;
        }

        writeln!(out, "Oldest tasks: {}", self.bands.oldest)?;
        writeln!(out, "Old tasks: {}", self.bands.old)?;
        writeln!(out, "This year tasks: {}", self.bands.this_year)?;
        Ok(())
    }
}

// =============================================================================
// SUPPORT TAGS
// =============================================================================

/// Task count for one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Tag display name
    pub name: String,
    /// Tag id
    pub id: String,
    /// Number of tasks carrying the tag
    pub tasks: usize,
}

/// Result of the support-tags report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCountReport {
    /// Counts in configured tag order
    pub tags: Vec<TagCount>,
}

impl TagCountReport {
    /// Column headers
    pub const HEADER: [&'static str; 3] = ["tag", "id", "tasks"];

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> Result<()> {
        render_to_stdio(mode, &[], |out| self.write_to(out, mode))
    }

    /// Write the result to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> Result<()> {
        match mode {
            OutputMode::Human => {
                let mut csv = csv_writer(out);
                csv.write_record(Self::HEADER)?;
                for tag in &self.tags {
                    csv.write_record([tag.name.as_str(), tag.id.as_str(), &tag.tasks.to_string()])?;
                }
                csv.flush()?;
                Ok(())
            },
            OutputMode::Json => write_json(out, self),
        }
    }
}

// =============================================================================
// VELOCITY
// =============================================================================

/// Points completed by one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPoints {
    /// User id
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Points completed
    pub points: f64,
}

/// Result of the velocity report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityReport {
    /// Project the tasks came from
    pub project_id: String,
    /// Completion lower bound
    pub since: String,
    /// Sum of all resolved points, attributed or not
    pub total_points: f64,
    /// Per-user subtotals in first-seen order
    pub users: Vec<UserPoints>,
    /// Tasks that could not be fully counted
    pub warnings: Vec<TaskWarning>,
}

impl VelocityReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> Result<()> {
        render_to_stdio(mode, &self.warnings, |out| self.write_to(out, mode))
    }

    /// Write the result to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> Result<()> {
        match mode {
            OutputMode::Human => {
                writeln!(
                    out,
                    "Total points completed: {}, since {}",
                    format_points(self.total_points),
                    self.since
                )?;
                for user in &self.users {
                    writeln!(out, "{}: {}", user.name, format_points(user.points))?;
                }
                Ok(())
            },
            OutputMode::Json => write_json(out, self),
        }
    }
}

// =============================================================================
// PROJECT STATS (epics)
// =============================================================================

/// Counts for one epic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpicRow {
    /// Epic name, `Not Set` for tasks without one
    pub epic: String,
    /// Completed tasks
    pub completed: u32,
    /// Incomplete tasks
    pub incomplete: u32,
}

/// Result of the project-stats report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpicReport {
    /// Project the tasks came from
    pub project_id: String,
    /// Number of tasks in the project
    pub total_tasks: usize,
    /// Epics by completed count, highest first
    pub epics: Vec<EpicRow>,
}

impl EpicReport {
    /// Column headers
    pub const HEADER: [&'static str; 3] = ["epic", "completed", "incomplete"];

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> Result<()> {
        render_to_stdio(mode, &[], |out| self.write_to(out, mode))
    }

    /// Write the result to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> Result<()> {
        match mode {
            OutputMode::Human => {
                writeln!(out, "Total tasks: {}", self.total_tasks)?;
                let mut csv = csv_writer(out);
                csv.write_record(Self::HEADER)?;
                for row in &self.epics {
                    csv.write_record([
                        row.epic.clone(),
                        row.completed.to_string(),
                        row.incomplete.to_string(),
                    ])?;
                }
                csv.flush()?;
                Ok(())
            },
            OutputMode::Json => write_json(out, self),
        }
    }
}
