//! Paginated fetcher
//!
//! Follows `rel="next"` links until the server stops advertising one and
//! concatenates every page's array elements in fetch order.

use super::types::{LinkHeaderPaginator, NextPage, Page, PaginationState};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::Collection;
use reqwest::header::LINK;
use tracing::debug;
use url::Url;

/// Fetches every page of a Link-header paginated listing
///
/// There is no page cap: a server that keeps advertising `next` links keeps
/// the loop going. Dropping the returned future stops it.
#[derive(Debug, Clone)]
pub struct PaginatedFetcher {
    http: HttpClient,
    paginator: LinkHeaderPaginator,
}

impl PaginatedFetcher {
    /// Create a fetcher resolving relative links against `base_url`
    pub fn new(http: HttpClient, base_url: Url) -> Self {
        Self {
            http,
            paginator: LinkHeaderPaginator::new(base_url),
        }
    }

    /// Fetch all pages starting at `start`
    ///
    /// `start` must already carry any query authentication; next links are
    /// used verbatim. Any failed page fails the whole call.
    pub async fn fetch_all(&self, start: Url) -> Result<Collection> {
        let mut state = PaginationState::new();
        let mut collection = Collection::new();
        let mut url = start;

        loop {
            let page = self.fetch_page(&url).await?;
            let records = page.records()?;
            debug!(
                page = state.pages + 1,
                records = records.len(),
                path = url.path(),
                "Fetched page"
            );

            let next = self
                .paginator
                .process_page(page.link.as_deref(), records.len(), &mut state)?;
            collection.extend(records);

            match next {
                NextPage::Continue { url: next_url } => url = next_url,
                NextPage::Done => break,
            }
        }

        debug!(
            pages = state.pages,
            total = state.total_fetched,
            "Pagination complete"
        );
        Ok(collection)
    }

    /// Fetch one page and its Link header
    ///
    /// The response is consumed here; nothing outlives the call.
    pub async fn fetch_page(&self, url: &Url) -> Result<Page> {
        let response = self.http.get(url).await?;

        let link = {
            let values: Vec<&str> = response
                .headers()
                .get_all(LINK)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .collect();
            (!values.is_empty()).then(|| values.join(", "))
        };

        let body = response.text().await.map_err(|e| Error::fetch(url, e))?;

        Ok(Page {
            url: url.clone(),
            body,
            link,
        })
    }
}
