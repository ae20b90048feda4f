//! Pagination module
//!
//! Supports: Link Header (RFC 8288), as served by the GitHub REST API
//!
//! # Overview
//!
//! [`PaginatedFetcher`] issues a GET, appends the page's JSON array
//! elements to the result, parses the `Link` response header and follows
//! the `rel="next"` entry until none remains. The termination signal is
//! the absence of a Link header or of a `next` entry in it; servers give
//! no page or total count.

mod fetcher;
mod link;
mod types;

pub use fetcher::PaginatedFetcher;
pub use link::{parse_links, LinkEntry, LinkHeader};
pub use types::{LinkHeaderPaginator, NextPage, Page, PaginationState};
