//! HTTP client module
//!
//! Thin wrapper over `reqwest` that stamps every request with the configured
//! User-Agent and turns non-success statuses into errors.
//!
//! # Features
//!
//! - **User-Agent**: GitHub rejects requests without one
//! - **Timeouts**: Per-request timeout, surfaced as a fetch error
//! - **No retries**: Failures propagate to the caller unchanged

mod client;

pub(crate) use client::default_user_agent;
pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
