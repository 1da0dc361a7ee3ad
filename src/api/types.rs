//! Wire types for the Asana REST API
//!
//! Every response wraps its payload in `data`; list endpoints add a
//! `next_page` cursor.

use serde::Deserialize;

/// Single-resource response envelope
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    /// The resource
    pub data: T,
}

/// One page of a list response
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Cursor for the following page; `None` on the last page
    #[serde(default)]
    pub next_page: Option<NextPage>,
}

/// Pagination cursor
#[derive(Debug, Clone, Deserialize)]
pub struct NextPage {
    /// Opaque offset token to pass back as `offset`
    pub offset: String,
}

impl<T> Page<T> {
    /// Build a page directly, mostly for tests
    #[must_use]
    pub fn new(data: Vec<T>, next_offset: Option<&str>) -> Self {
        Self {
            data,
            next_page: next_offset.map(|offset| NextPage {
                offset: offset.to_string(),
            }),
        }
    }

    /// Offset of the following page, if any
    #[must_use]
    pub fn next_offset(&self) -> Option<&str> {
        self.next_page.as_ref().map(|p| p.offset.as_str())
    }
}
