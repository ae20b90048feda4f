//! OAuth2 provider abstraction
//!
//! Provides the [`OAuth2Provider`] trait: the three provider-specific steps
//! of the authorization-code flow. [`crate::auth::OAuthFlow`] drives any
//! implementation.

use super::types::AccessToken;
use crate::error::Result;
use crate::types::StringMap;
use async_trait::async_trait;
use url::Url;

/// Trait for OAuth2 authorization-code providers
///
/// Implementations hold only immutable configuration; the caller threads the
/// access token through each call.
#[async_trait]
pub trait OAuth2Provider: Send + Sync {
    /// Provider identifier (e.g. "github")
    fn name(&self) -> &str;

    /// Build the authorization URL the user is redirected to
    ///
    /// `return_url` is sent verbatim as `redirect_uri`.
    fn build_login_url(&self, return_url: &Url) -> Result<Url>;

    /// Exchange an authorization code for an access token
    ///
    /// `Ok(None)` means the provider declined the exchange; transport and
    /// HTTP status failures are errors.
    async fn exchange_code(&self, return_url: &Url, code: &str) -> Result<Option<AccessToken>>;

    /// Fetch the authenticated user's profile as a flat string map
    async fn fetch_profile(&self, token: &AccessToken) -> Result<StringMap>;
}
