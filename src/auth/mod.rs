//! Authentication module
//!
//! Supports: OAuth2 authorization-code flow against GitHub
//!
//! [`OAuth2Provider`] captures the provider-specific steps (login URL, code
//! exchange, profile fetch). [`GitHubClient`] implements it and adds the
//! paginated organization and team listings. [`OAuthFlow`] drives any
//! provider through a callback.

mod flow;
mod github;
mod provider;
mod types;

pub use flow::OAuthFlow;
pub use github::{GitHubClient, PROVIDER_NAME};
pub use provider::OAuth2Provider;
pub use types::{AccessToken, AuthenticatedUser, AuthenticationResult, FailureReason};
