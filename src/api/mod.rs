//! Asana REST API adapter
//!
//! Implements the [`TaskSource`](crate::core::ports::TaskSource) and
//! [`UserDirectory`](crate::core::ports::UserDirectory) ports over HTTP.
//!
//! ## Design
//!
//! - **Blocking and lazy**: list endpoints return an iterator that fetches the
//!   next page only when the previous one is exhausted
//! - **Errors carry HTTP semantics**: `ApiError` knows the status it came from
//! - **No retries**: a failed request surfaces immediately

mod client;
mod error;
mod pages;
mod types;

pub use client::{AsanaClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorBody, ErrorCode};
pub use pages::Paginated;
pub use types::{DataEnvelope, NextPage, Page};
