//! Authorization-code flow orchestration
//!
//! Drives any [`OAuth2Provider`] through login redirect, callback
//! verification, token exchange and profile fetch. CSRF state and nonce
//! handling belong to the hosting web framework.

use super::provider::OAuth2Provider;
use super::types::{AuthenticatedUser, AuthenticationResult, FailureReason};
use crate::error::{Error, Result};
use tracing::debug;
use url::Url;

/// Profile keys tried, in order, for the display name
const USER_NAME_KEYS: &[&str] = &["username", "login", "name"];

/// Generic OAuth2 authorization-code flow over a provider
#[derive(Debug, Clone)]
pub struct OAuthFlow<P> {
    provider: P,
}

impl<P: OAuth2Provider> OAuthFlow<P> {
    /// Create a flow for the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get the provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// URL to redirect the user to; the provider calls back to `return_url`
    pub fn request_authentication(&self, return_url: &Url) -> Result<Url> {
        self.provider.build_login_url(return_url)
    }

    /// Complete authentication from the provider's callback request
    ///
    /// `callback_url` is the full URL the provider redirected to;
    /// `return_url` must equal the one given to
    /// [`request_authentication`](Self::request_authentication).
    pub async fn verify_authentication(
        &self,
        callback_url: &Url,
        return_url: &Url,
    ) -> Result<AuthenticationResult> {
        let provider = self.provider.name();

        if let Some(error) = query_value(callback_url, "error") {
            debug!(provider, error = %error, "Provider denied authorization");
            return Ok(AuthenticationResult::failed(
                provider,
                FailureReason::Denied {
                    error,
                    description: query_value(callback_url, "error_description"),
                },
            ));
        }

        let Some(code) = query_value(callback_url, "code").filter(|c| !c.is_empty()) else {
            return Ok(AuthenticationResult::failed(
                provider,
                FailureReason::MissingCode,
            ));
        };

        let Some(access_token) = self.provider.exchange_code(return_url, &code).await? else {
            return Ok(AuthenticationResult::failed(
                provider,
                FailureReason::ExchangeFailed,
            ));
        };

        let profile = self.provider.fetch_profile(&access_token).await?;
        let provider_user_id = profile
            .get("id")
            .cloned()
            .ok_or_else(|| Error::deserialization("profile has no 'id' field"))?;
        let user_name = USER_NAME_KEYS
            .iter()
            .find_map(|key| profile.get(*key).filter(|v| !v.is_empty()))
            .cloned()
            .unwrap_or_else(|| provider_user_id.clone());

        Ok(AuthenticationResult::Succeeded(AuthenticatedUser {
            provider: provider.to_string(),
            provider_user_id,
            user_name,
            extra_data: profile,
            access_token,
        }))
    }
}

/// First value of a query parameter
fn query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
