//! Auth value types
//!
//! Access tokens and the outcome of a completed authorization-code flow.

use crate::types::StringMap;
use std::fmt;

/// Opaque OAuth2 bearer token
///
/// GitHub OAuth app tokens do not expire, so no expiry is tracked.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token value
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw token
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Why a callback did not produce an authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The provider redirected back with an `error` parameter
    Denied {
        /// Error code (e.g. `access_denied`)
        error: String,
        /// Optional `error_description`
        description: Option<String>,
    },
    /// The callback carried no `code` parameter
    MissingCode,
    /// The token endpoint returned no access token
    ExchangeFailed,
}

/// A user authenticated through the provider
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Provider name (e.g. "github")
    pub provider: String,
    /// Provider's user id (profile `id`)
    pub provider_user_id: String,
    /// Display name: `username`, `login` or `name`, else the id
    pub user_name: String,
    /// Full profile as returned by the provider
    pub extra_data: StringMap,
    /// Token used to fetch the profile
    pub access_token: AccessToken,
}

/// Outcome of verifying a provider callback
#[derive(Debug, Clone)]
pub enum AuthenticationResult {
    /// Authentication did not complete
    Failed {
        /// Provider name
        provider: String,
        /// Reason for the failure
        reason: FailureReason,
    },
    /// Authentication completed
    Succeeded(AuthenticatedUser),
}

impl AuthenticationResult {
    /// Create a failed result
    pub fn failed(provider: impl Into<String>, reason: FailureReason) -> Self {
        Self::Failed {
            provider: provider.into(),
            reason,
        }
    }

    /// Check if authentication completed
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Name of the provider that produced this result
    pub fn provider(&self) -> &str {
        match self {
            Self::Failed { provider, .. } => provider,
            Self::Succeeded(user) => &user.provider,
        }
    }

    /// The authenticated user, if any
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Succeeded(user) => Some(user),
            Self::Failed { .. } => None,
        }
    }
}
