//! Core domain logic for asana-stats
//!
//! This module contains pure business logic with no I/O dependencies.
//! All remote interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`Task`, `CustomField`, `User`, point and epic types)
//! - `services/` - Field extraction, point resolution and aggregation
//! - `ports/` - Trait definitions for the task source and user directory

pub mod models;
pub mod ports;
pub mod services;
