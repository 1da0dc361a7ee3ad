//! Configuration
//!
//! The API token comes from `ASANA_TOKEN`. Project, tag and custom field ids
//! default to the values the team uses and can be overridden in
//! `~/.asana-stats/config.toml` (or a file passed with `--config`).
//!
//! ```toml
//! timeout_secs = 10
//!
//! [projects]
//! sprint = "1203953156205290"
//!
//! [[tags.support]]
//! id = "1209562201506706"
//! name = "pod-og"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;
use crate::core::models::{BandYears, PointFields};
use crate::paths;

/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "ASANA_TOKEN";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV_VAR: &str = "ASANA_BASE_URL";

/// Configuration problems, all reported before any request is sent
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API token is not set
    #[error("ASANA_TOKEN is not set; export a personal access token to run reports")]
    MissingToken,

    /// An explicitly requested settings file does not exist
    #[error("settings file not found: {0}")]
    NotFound(PathBuf),

    /// The settings file could not be read
    #[error("failed to read settings file {path}: {source}")]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`Settings`]
    #[error("invalid settings file {path}: {source}")]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// A completed-since value is not a date or date-time
    #[error("invalid date {0:?}: expected YYYY-MM-DD or an ISO-8601 date-time")]
    InvalidDate(String),
}

/// Project ids used by the reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Sprint project tallied by the velocity report
    pub sprint: String,
    /// Backlog project broken down by the project-stats report
    pub backlog: String,
    /// Support board project
    pub support_board: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            sprint: "1203953156205290".to_string(),
            backlog: "1205425343659456".to_string(),
            support_board: "1201157086826331".to_string(),
        }
    }
}

/// A tag id with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Tag id
    pub id: String,
    /// Display name
    pub name: String,
}

impl TagEntry {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Tag ids used by the reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    /// Tag marking code-orange tasks
    pub code_orange: String,
    /// Support pod tags counted by the support-tags report, in print order
    pub support: Vec<TagEntry>,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            code_orange: "1208541407042522".to_string(),
            support: vec![
                TagEntry::new("1209562201506706", "pod-og"),
                TagEntry::new("1209562201506707", "pod-as"),
                TagEntry::new("1209562201506708", "pod-platform"),
                TagEntry::new("1209562201506710", "pod-unknown"),
                TagEntry::new("1209562201506709", "pod-events"),
            ],
        }
    }
}

/// Custom field ids and names read from tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Primary story points field id
    pub points: String,
    /// Estimated story points field id, used when `points` is unset
    pub estimated_points: String,
    /// Display name of the epic field
    pub epic_name: String,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            points: "1199932036644229".to_string(),
            estimated_points: "1202399449289965".to_string(),
            epic_name: "Eng Epic".to_string(),
        }
    }
}

/// Settings file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Records requested per page
    pub page_size: u32,
    /// Task id file for the specific-tasks report
    pub task_id_file: PathBuf,
    /// Project ids
    pub projects: ProjectSettings,
    /// Tag ids
    pub tags: TagSettings,
    /// Custom field ids
    pub fields: FieldSettings,
    /// Years for the specific-tasks age bands
    pub bands: BandYears,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            page_size: 100,
            task_id_file: PathBuf::from(paths::DEFAULT_TASK_ID_FILE),
            projects: ProjectSettings::default(),
            tags: TagSettings::default(),
            fields: FieldSettings::default(),
            bands: BandYears::default(),
        }
    }
}

impl Settings {
    /// Load settings
    ///
    /// With `path`, that file must exist. Without it, the global config file
    /// is read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_file(path),
            None => {
                let path = paths::global_config();
                if path.exists() {
                    Self::load_file(&path)
                } else {
                    log::debug!("no settings file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("loading settings from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Point fields in priority order
    #[must_use]
    pub fn point_fields(&self) -> PointFields {
        PointFields::new(&self.fields.points, &self.fields.estimated_points)
    }
}

/// Everything a report run needs: credential plus settings
///
/// Built once at startup and passed by reference to each report.
#[derive(Clone)]
pub struct Config {
    /// API token
    pub token: String,
    /// Loaded settings
    pub settings: Settings,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn load(settings_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_lookup(settings_path, |key| std::env::var(key).ok())
    }

    /// Load configuration, reading environment variables through `lookup`
    ///
    /// The token is checked first so a missing credential is reported even
    /// when the settings file is also broken.
    pub fn from_lookup(
        settings_path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let token = lookup(TOKEN_ENV_VAR)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let mut settings = Settings::load(settings_path)?;
        if let Some(base_url) = lookup(BASE_URL_ENV_VAR).filter(|u| !u.trim().is_empty()) {
            settings.base_url = base_url;
        }

        Ok(Self { token, settings })
    }

    /// Create a configuration directly
    #[must_use]
    pub fn new(token: impl Into<String>, settings: Settings) -> Self {
        Self {
            token: token.into(),
            settings,
        }
    }
}

/// Inclusive lower bound for completion-time filters
///
/// Accepts `YYYY-MM-DD` (expanded to local midnight, `YYYY-MM-DDT00:00:00`)
/// or a full ISO-8601 date-time, kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSince(String);

impl CompletedSince {
    /// Midnight at the start of `date`
    #[must_use]
    pub fn start_of(date: NaiveDate) -> Self {
        Self(format!("{}T00:00:00", date.format("%Y-%m-%d")))
    }

    /// Midnight `days` days before `today`
    #[must_use]
    pub fn days_before(today: NaiveDate, days: i64) -> Self {
        Self::start_of(today - Duration::days(days))
    }

    /// The filter value sent to the API
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CompletedSince {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::start_of(date));
        }
        let valid = DateTime::parse_from_rfc3339(s).is_ok()
            || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
            || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok();
        if valid { Ok(Self(s.to_string())) } else { Err(ConfigError::InvalidDate(s.to_string())) }
    }
}

impl fmt::Display for CompletedSince {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
