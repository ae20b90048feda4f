//! CLI module
//!
//! Command-line interface over [`crate::GitHubClient`].
//!
//! # Commands
//!
//! - `login-url` - Print the authorization URL
//! - `exchange` - Trade an authorization code for an access token
//! - `profile` - Fetch the authenticated user's profile
//! - `orgs`, `user-teams`, `teams` - Paginated listings

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
