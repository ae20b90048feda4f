//! # GitHub OAuth2 client
//!
//! OAuth2 authorization-code client for GitHub, plus paginated listings of
//! the authenticated user's organizations and teams.
//!
//! ## Features
//!
//! - **Authorization-code flow**: login URL, code-for-token exchange, profile fetch
//! - **Link header pagination**: follows `rel="next"` until the server stops
//! - **Provider trait**: `OAuth2Provider` plus a generic `OAuthFlow` driver
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use github_oauth2::{GitHubClient, OAuth2Provider, Result};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = GitHubClient::from_credentials("app-id", "app-secret")?;
//!     let return_url = Url::parse("https://example.com/callback")?;
//!
//!     // Redirect the user here
//!     let login = client.build_login_url(&return_url)?;
//!
//!     // ...then, with the `code` from the callback:
//!     if let Some(token) = client.exchange_code(&return_url, "code").await? {
//!         let profile = client.fetch_profile(&token).await?;
//!         let orgs = client.list_organizations(&token).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │           OAuthFlow<P: OAuth2Provider>                   │
//! │  request_authentication()   verify_authentication()      │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────────┐
//! │                      GitHubClient                        │
//! │  build_login_url  exchange_code  fetch_profile  list_*   │
//! └──────────────┬───────────────────────────┬───────────────┘
//!                │                           │
//!          ┌─────┴──────┐          ┌─────────┴──────────┐
//!          │ HttpClient │◄─────────│ PaginatedFetcher   │
//!          └────────────┘          │  └─ LinkHeader     │
//!                                  └────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP client
pub mod http;

/// Link header parsing and pagination
pub mod pagination;

/// OAuth2 provider, GitHub client and flow orchestration
pub mod auth;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{
    AccessToken, AuthenticatedUser, AuthenticationResult, FailureReason, GitHubClient,
    OAuth2Provider, OAuthFlow,
};
pub use config::{ClientConfig, Endpoints};
pub use error::{Error, Result};
pub use pagination::{parse_links, LinkEntry, LinkHeader, PaginatedFetcher};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
