//! Pagination descriptor returned with every product list

use serde::{Deserialize, Serialize};

/// Server-provided pagination metadata.
///
/// `self_uri`, `next` and `prev` are opaque relative URIs; the client fetches
/// them verbatim and never rebuilds offsets from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(rename = "self")]
    pub self_uri: String,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    pub pages: u32,
    pub current: u32,
}

impl Navigation {
    /// Navigation for the window starting at 1-based `start` of size `limit`
    /// over `total` records, with URIs rooted at `path`.
    ///
    /// Mirrors how the product API paginates so fakes and tests agree with it.
    pub fn for_window(total: usize, start: usize, limit: usize, path: &str) -> Self {
        let limit = limit.max(1);
        let start = start.max(1);
        let pages = page_count(total, limit);
        let current = ((start - 1) / limit + 1) as u32;

        let uri = |s: usize| format!("{path}?start={s}&limit={limit}");

        let next = (current < pages).then(|| uri(start + limit));
        let prev = (current > 1).then(|| uri(start.saturating_sub(limit).max(1)));

        Self {
            self_uri: uri(start),
            next,
            prev,
            pages,
            current,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// "Displaying page X of Y pages"
    pub fn display_status(&self) -> String {
        format!("Displaying page {} of {} pages", self.current, self.pages)
    }
}

/// Number of pages needed to show `total` records `limit` at a time.
pub fn page_count(total: usize, limit: usize) -> u32 {
    total.div_ceil(limit.max(1)) as u32
}
