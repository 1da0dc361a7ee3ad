//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};

use super::commands;
use asana_stats::api::AsanaClient;
use asana_stats::config::{CompletedSince, Config};
use asana_stats::output::OutputMode;

/// asana-stats - Asana task reports
#[derive(Parser, Debug)]
#[command(
    name = "asana-stats",
    version,
    about = "Asana task reports: velocity, epics and support boards",
    long_about = "Query the Asana task API and summarize task data.\n\n\
                  Pick exactly one report flag. The API token is read from ASANA_TOKEN."
)]
#[command(group(
    ArgGroup::new("report")
        .multiple(false)
        .args([
            "support_board",
            "code_orange",
            "velocity_tracking",
            "support_tags",
            "project_stats",
            "specific_tasks",
        ])
))]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Settings file (default: ~/.asana-stats/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List support board tasks completed since today
    #[arg(long)]
    pub support_board: bool,

    /// List tasks tagged Code Orange
    #[arg(long)]
    pub code_orange: bool,

    /// Story points completed per user
    #[arg(long, visible_alias = "velo-tracking")]
    pub velocity_tracking: bool,

    /// Task counts per support pod tag
    #[arg(long)]
    pub support_tags: bool,

    /// Completed/incomplete task counts per epic
    #[arg(long)]
    pub project_stats: bool,

    /// List the tasks named in the task id file
    #[arg(short = 's', long)]
    pub specific_tasks: bool,

    /// Project id overriding the report's default project
    #[arg(short, long, value_name = "ID")]
    pub project_id: Option<String>,

    /// Only tasks completed on or after this date (YYYY-MM-DD or ISO-8601 date-time)
    #[arg(short, long, value_name = "DATE")]
    pub completed_since: Option<CompletedSince>,

    /// File with one task id per line (specific-tasks)
    #[arg(long, value_name = "PATH")]
    pub task_id_file: Option<PathBuf>,
}

/// Report selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// `--support-board`
    SupportBoard,
    /// `--code-orange`
    CodeOrange,
    /// `--velocity-tracking`
    Velocity,
    /// `--support-tags`
    SupportTags,
    /// `--project-stats`
    ProjectStats,
    /// `--specific-tasks`
    SpecificTasks,
}

impl Cli {
    /// The selected report, if any
    #[must_use]
    pub const fn report(&self) -> Option<Report> {
        if self.support_board {
            Some(Report::SupportBoard)
        } else if self.code_orange {
            Some(Report::CodeOrange)
        } else if self.velocity_tracking {
            Some(Report::Velocity)
        } else if self.support_tags {
            Some(Report::SupportTags)
        } else if self.specific_tasks {
            Some(Report::SpecificTasks)
        } else if self.project_stats {
            Some(Report::ProjectStats)
        } else {
            None
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(report) = cli.report() else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "No command specified"
                })
            );
        } else {
            println!("No command specified");
        }
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref()).context("configuration error")?;
    let client = AsanaClient::from_config(&config)?;
    let project_id = cli.project_id.as_deref();

    match report {
        Report::SupportBoard => commands::support_board(
            &client,
            &config,
            project_id,
            cli.completed_since,
            output_mode,
        ),
        Report::CodeOrange => commands::code_orange(&client, &config, output_mode),
        Report::Velocity => {
            commands::velocity(&client, &config, project_id, cli.completed_since, output_mode)
        },
        Report::SupportTags => commands::support_tags(&client, &config, output_mode),
        Report::ProjectStats => commands::project_stats(&client, &config, project_id, output_mode),
        Report::SpecificTasks => {
            commands::specific_tasks(&client, &config, cli.task_id_file.as_deref(), output_mode)
        },
    }
}
