//! GitHub OAuth2 client
//!
//! Implements [`OAuth2Provider`] for GitHub OAuth apps and adds paginated
//! listings of the user's organizations and teams.
//!
//! GitHub answers the token exchange with a form-encoded body
//! (`access_token=...&scope=...&token_type=bearer`) and reports a failed
//! exchange with an empty body or an `error=...` body, both with HTTP 200.

use super::provider::OAuth2Provider;
use super::types::AccessToken;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::PaginatedFetcher;
use crate::types::{Collection, JsonValue, StringMap};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Provider name reported by [`GitHubClient`]
pub const PROVIDER_NAME: &str = "github";

/// OAuth2 client for GitHub
///
/// Stateless apart from its configuration: safe to share between tasks.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    config: ClientConfig,
    authorize_url: Url,
    token_url: Url,
    api_root: Url,
    http: HttpClient,
    fetcher: PaginatedFetcher,
}

impl GitHubClient {
    /// Create a client; fails if the configuration is invalid
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let authorize_url = Url::parse(&config.endpoints.authorize_url)?;
        let token_url = Url::parse(&config.endpoints.token_url)?;
        let api_root = Url::parse(&config.endpoints.api_root)?;

        let http = HttpClient::with_config(config.http_config())?;
        let fetcher = PaginatedFetcher::new(http.clone(), api_root.clone());

        Ok(Self {
            config,
            authorize_url,
            token_url,
            api_root,
            http,
            fetcher,
        })
    }

    /// Create a client from credentials with default settings
    pub fn from_credentials(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::new(ClientConfig::new(app_id, app_secret)?)
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List the organizations the user belongs to
    pub async fn list_organizations(&self, token: &AccessToken) -> Result<Collection> {
        let url = self.api_url(&["user", "orgs"], token)?;
        self.fetcher.fetch_all(url).await
    }

    /// List the teams the user belongs to, across organizations
    pub async fn list_user_teams(&self, token: &AccessToken) -> Result<Collection> {
        let url = self.api_url(&["user", "teams"], token)?;
        self.fetcher.fetch_all(url).await
    }

    /// List the teams of an organization
    ///
    /// `org` is the organization login; it is percent-encoded as a single
    /// path segment.
    pub async fn list_teams(&self, org: &str, token: &AccessToken) -> Result<Collection> {
        let url = self.api_url(&["user", "orgs", org, "teams"], token)?;
        self.fetcher.fetch_all(url).await
    }

    /// Build `{api_root}/{segments...}?access_token=...`
    fn api_url(&self, segments: &[&str], token: &AccessToken) -> Result<Url> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::config(format!("API root '{}' cannot be a base", self.api_root))
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("access_token", token.as_str());
        Ok(url)
    }
}

#[async_trait]
impl OAuth2Provider for GitHubClient {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn build_login_url(&self, return_url: &Url) -> Result<Url> {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.app_id)
            .append_pair("redirect_uri", return_url.as_str())
            .append_pair("scope", &self.config.scopes);
        Ok(url)
    }

    async fn exchange_code(&self, return_url: &Url, code: &str) -> Result<Option<AccessToken>> {
        let mut url = self.token_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.app_id)
            .append_pair("redirect_uri", return_url.as_str())
            .append_pair("client_secret", &self.config.app_secret)
            .append_pair("code", code);

        let body = self.http.get_text(&url).await?;
        let token = parse_token_response(&body);
        if token.is_none() {
            debug!("Token endpoint returned no access token");
        }
        Ok(token)
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<StringMap> {
        let url = self.api_url(&["user"], token)?;
        let body = self.http.get_text(&url).await?;
        profile_from_json(&body)
    }
}

/// Extract `access_token` from a form-encoded token response
///
/// An empty body, a missing field or an empty value all mean the exchange
/// failed.
pub(crate) fn parse_token_response(body: &str) -> Option<AccessToken> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    url::form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
        .map(AccessToken::from)
}

/// Flatten a profile JSON object into string values
///
/// Strings are kept, numbers and booleans are rendered as text and nulls
/// are dropped. Nested arrays or objects cannot be represented.
pub(crate) fn profile_from_json(body: &str) -> Result<StringMap> {
    let JsonValue::Object(fields) = serde_json::from_str::<JsonValue>(body)? else {
        return Err(Error::deserialization("profile is not a JSON object"));
    };

    let mut profile = StringMap::with_capacity(fields.len());
    for (key, value) in fields {
        let value = match value {
            JsonValue::String(s) => s,
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            JsonValue::Null => continue,
            JsonValue::Array(_) | JsonValue::Object(_) => {
                return Err(Error::deserialization(format!(
                    "field '{key}' is not a scalar value"
                )));
            }
        };
        profile.insert(key, value);
    }
    Ok(profile)
}
