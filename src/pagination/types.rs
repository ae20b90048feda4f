//! Pagination types
//!
//! Defines the page, next-page and progress types shared by the link
//! header paginator and the fetch loop.

use super::link::LinkHeader;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use tracing::trace;
use url::Url;

/// One fetched page: raw body plus its Link header, if any
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the page was fetched from
    pub url: Url,
    /// Raw response body (expected to be a JSON array)
    pub body: String,
    /// Raw Link header value
    pub link: Option<String>,
}

impl Page {
    /// Parse the body as a JSON array and return its elements
    pub fn records(&self) -> Result<Vec<JsonValue>> {
        match serde_json::from_str::<JsonValue>(&self.body)? {
            JsonValue::Array(items) => Ok(items),
            _ => Err(Error::unexpected_shape(&self.url, "a JSON array")),
        }
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this URL
    Continue {
        /// URL of the next page, used verbatim
        url: Url,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: Url) -> Self {
        Self::Continue { url }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.total_fetched += records as u64;
    }
}

/// Link header pagination (RFC 8288)
///
/// Extracts the next page URL from the Link header.
/// Format: `Link: <https://api.github.com/...?page=2>; rel="next", ...`
#[derive(Debug, Clone)]
pub struct LinkHeaderPaginator {
    /// Rel value to follow
    pub rel: String,
    /// Base URL relative link targets resolve against
    pub base_url: Url,
}

impl LinkHeaderPaginator {
    /// Create a paginator following `rel="next"` links
    pub fn new(base_url: Url) -> Self {
        Self {
            rel: "next".to_string(),
            base_url,
        }
    }

    /// Follow a different relation type
    #[must_use]
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }

    /// Process a fetched page and determine if there is a next page
    pub fn process_page(
        &self,
        link: Option<&str>,
        records_count: usize,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.add_page(records_count);

        let header = LinkHeader::parse(&self.base_url, link.filter(|l| !l.trim().is_empty()))?;
        if let Some(entry) = header.find(&self.rel) {
            trace!(next = %entry.target, "Following link");
            return Ok(NextPage::with_url(entry.target.clone()));
        }

        Ok(NextPage::Done)
    }
}
