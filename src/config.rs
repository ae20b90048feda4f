//! Client configuration
//!
//! [`ClientConfig`] holds the OAuth application credentials, the User-Agent
//! sent with every request, the requested scopes and the provider
//! endpoints. It can be built in code or loaded from a JSON/YAML file.

use crate::error::{Error, Result};
use crate::http::{default_user_agent, HttpClientConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Endpoints
// ============================================================================

/// Default authorization endpoint
pub const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

/// Default token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// Default REST API root
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Provider endpoints
///
/// Resource endpoints hang off `api_root`:
/// `/user`, `/user/orgs`, `/user/teams` and `/user/orgs/{org}/teams`.
/// Override for GitHub Enterprise (`https://ghe.example.com/api/v3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Browser-facing authorization endpoint
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,

    /// Code-for-token exchange endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// REST API root; also the base for relative Link header targets
    #[serde(default = "default_api_root")]
    pub api_root: String,
}

fn default_authorize_url() -> String {
    DEFAULT_AUTHORIZE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authorize_url: default_authorize_url(),
            token_url: default_token_url(),
            api_root: default_api_root(),
        }
    }
}

impl Endpoints {
    /// Use the same API root for every endpoint (handy for mock servers)
    ///
    /// Authorization and token endpoints become
    /// `{root}/login/oauth/authorize` and `{root}/login/oauth/access_token`.
    pub fn with_root(root: impl Into<String>) -> Self {
        let root = root.into();
        let trimmed = root.trim_end_matches('/');
        Self {
            authorize_url: format!("{trimmed}/login/oauth/authorize"),
            token_url: format!("{trimmed}/login/oauth/access_token"),
            api_root: root,
        }
    }

    /// Parse and check every endpoint
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("authorize_url", &self.authorize_url),
            ("token_url", &self.token_url),
            ("api_root", &self.api_root),
        ] {
            let url = Url::parse(value)
                .map_err(|e| Error::config(format!("Invalid {name} '{value}': {e}")))?;
            if url.cannot_be_a_base() {
                return Err(Error::config(format!(
                    "Invalid {name} '{value}': not a hierarchical URL"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Client Config
// ============================================================================

fn default_timeout_secs() -> u64 {
    30
}

/// OAuth client configuration
///
/// `app_id` and `app_secret` must be non-blank; every constructor in this
/// crate runs [`ClientConfig::validate`].
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// OAuth application (client) id
    #[serde(default)]
    pub app_id: String,

    /// OAuth application secret
    #[serde(default)]
    pub app_secret: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Requested scopes, as sent in the `scope` parameter (empty = provider default)
    #[serde(default)]
    pub scopes: String,

    /// Provider endpoints
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .field("scopes", &self.scopes)
            .field("endpoints", &self.endpoints)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Create a validated configuration with default user agent, scopes and endpoints
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Result<Self> {
        Self::builder(app_id, app_secret).build()
    }

    /// Create a new config builder
    pub fn builder(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self {
                app_id: app_id.into(),
                app_secret: app_secret.into(),
                user_agent: default_user_agent(),
                scopes: String::new(),
                endpoints: Endpoints::default(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }

    /// Load and validate a configuration file (`.json`, `.yaml` or `.yml`)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::load_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file without validating it
    ///
    /// Fields the file omits take their defaults (blank credentials
    /// included), so callers can fill them in before calling
    /// [`ClientConfig::validate`].
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Err(Error::config(format!(
                "Unsupported config file '{}' (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    /// Check credentials and endpoints
    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(Error::missing_field("app_id"));
        }
        if self.app_secret.trim().is_empty() {
            return Err(Error::missing_field("app_secret"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        self.endpoints.validate()
    }

    /// HTTP client settings derived from this configuration
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .user_agent(self.user_agent.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the User-Agent header value
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the requested scopes (e.g. `"read:org user:email"`)
    #[must_use]
    pub fn scopes(mut self, scopes: impl Into<String>) -> Self {
        self.config.scopes = scopes.into();
        self
    }

    /// Set the provider endpoints
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    /// Set the per-request timeout in seconds
    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
