//! CLI layer for asana-stats
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`commands`] - One command per report

pub mod app;
pub mod commands;

// Re-export main entry point
pub use app::run;
