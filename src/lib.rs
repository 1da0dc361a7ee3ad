//! asana-stats - reporting CLI for Asana
//!
//! This library provides the report pipelines behind the CLI: task sources,
//! custom field extraction, story point resolution, aggregation and output
//! formatting.
//!
//! ```no_run
//! use asana_stats::api::AsanaClient;
//! use asana_stats::config::Config;
//! use asana_stats::output::OutputMode;
//! use asana_stats::reports;
//!
//! let config = Config::load(None)?;
//! let client = AsanaClient::from_config(&config)?;
//! let report = reports::project_stats(&client, &config, None)?;
//! report.render(OutputMode::Human)?;
//! # Ok::<(), asana_stats::error::Error>(())
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;
pub mod reports;
