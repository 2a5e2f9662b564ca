//! Request sequencing for list and edit fetches
//!
//! Every fetch takes a [`RequestToken`] from a [`RequestSeq`]. Responses carry
//! their token back so the handler can drop any response that is not for the
//! most recently issued request.

use shopfront_api::ListQuery;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic token source
#[derive(Debug, Default, Clone)]
pub struct RequestSeq {
    last: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token; it supersedes every earlier one
    pub fn next_token(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }

    /// Whether `token` is the most recently issued one
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.last != 0 && token.0 == self.last
    }

    pub fn latest(&self) -> Option<RequestToken> {
        (self.last != 0).then_some(RequestToken(self.last))
    }
}

/// Which component issued a list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    /// Initial load, reload, next or previous page
    Page,
    /// Search panel submit
    Search,
}

/// How a list fetch addresses the backend
#[derive(Debug, Clone, PartialEq)]
pub enum ListRequest {
    /// Query parameters against `/products`
    Query(ListQuery),
    /// A server-provided navigation URI, used verbatim
    Uri(String),
}
