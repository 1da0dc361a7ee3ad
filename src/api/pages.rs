//! Lazy pagination over list endpoints

use super::error::ApiError;
use super::types::Page;

/// Iterator that walks a paginated list one page at a time
///
/// `fetch` receives `None` for the first page and the previous page's offset
/// afterwards. A page is requested only once the previous one has been fully
/// consumed. The first error is yielded once and ends the iteration.
pub struct Paginated<T, F> {
    fetch: F,
    buffer: std::vec::IntoIter<T>,
    next_offset: Option<String>,
    started: bool,
    done: bool,
}

impl<T, F> Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, ApiError>,
{
    /// Create a paginator; nothing is fetched until the first `next()`
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            buffer: Vec::new().into_iter(),
            next_offset: None,
            started: false,
            done: false,
        }
    }
}

impl<T, F> Iterator for Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, ApiError>,
{
    type Item = Result<T, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            if self.done || (self.started && self.next_offset.is_none()) {
                self.done = true;
                return None;
            }

            self.started = true;
            match (self.fetch)(self.next_offset.as_deref()) {
                Ok(page) => {
                    self.next_offset = page.next_offset().map(String::from);
                    self.buffer = page.data.into_iter();
                },
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                },
            }
        }
    }
}

impl<T, F> std::fmt::Debug for Paginated<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginated")
            .field("next_offset", &self.next_offset)
            .field("started", &self.started)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
