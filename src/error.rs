//! Error types for the GitHub OAuth2 client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! A failed token exchange is not an error: `exchange_code` returns
//! `Ok(None)` for it.

use thiserror::Error;
use url::Url;

/// Query parameters whose values never appear in error messages
const REDACTED_PARAMS: &[&str] = &["access_token", "client_secret"];

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    // ============================================================================
    // Parse Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unexpected response from {url}: expected {expected}")]
    UnexpectedShape { url: String, expected: String },

    #[error("Malformed Link header: {message}")]
    LinkHeader { message: String },

    #[error("Failed to deserialize profile: {message}")]
    Deserialization { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a transport error for a request to `url`
    pub fn fetch(url: &Url, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: redact_url(url),
            source,
        }
    }

    /// Create an HTTP status error for a request to `url`
    pub fn http_status(url: &Url, status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            url: redact_url(url),
            status,
            body: body.into(),
        }
    }

    /// Create an unexpected shape error
    pub fn unexpected_shape(url: &Url, expected: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            url: redact_url(url),
            expected: expected.into(),
        }
    }

    /// Create a Link header error
    pub fn link_header(message: impl Into<String>) -> Self {
        Self::LinkHeader {
            message: message.into(),
        }
    }

    /// Create a deserialization error
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }

    /// Check if this is a fetch error (transport failure or non-success status)
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::HttpStatus { .. })
    }

    /// URL of the request that failed, for fetch errors
    ///
    /// Credential query parameters are redacted.
    pub fn failed_url(&self) -> Option<&str> {
        match self {
            Error::Fetch { url, .. } | Error::HttpStatus { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    /// HTTP status of the failed request, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Fetch { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Render a URL with credential query values replaced by `REDACTED`
pub(crate) fn redact_url(url: &Url) -> String {
    let needs_redaction = url
        .query_pairs()
        .any(|(key, _)| REDACTED_PARAMS.contains(&key.as_ref()));
    if !needs_redaction {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if REDACTED_PARAMS.contains(&key.as_ref()) {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;
