//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GitHub OAuth2 client CLI
#[derive(Parser, Debug)]
#[command(name = "github-oauth2")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// OAuth application id (overrides the config file)
    #[arg(long, global = true)]
    pub app_id: Option<String>,

    /// OAuth application secret (overrides the config file)
    #[arg(long, global = true)]
    pub app_secret: Option<String>,

    /// User-Agent header (overrides the config file)
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Requested scopes (overrides the config file)
    #[arg(long, global = true)]
    pub scopes: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the authorization URL to send the user to
    LoginUrl {
        /// Callback URL registered for the OAuth app
        #[arg(long)]
        return_url: String,
    },

    /// Exchange an authorization code for an access token
    Exchange {
        /// Callback URL used for the login redirect
        #[arg(long)]
        return_url: String,

        /// Authorization code from the callback
        #[arg(long)]
        code: String,
    },

    /// Fetch the authenticated user's profile
    Profile {
        /// Access token
        #[arg(long)]
        token: String,
    },

    /// List the user's organizations
    Orgs {
        /// Access token
        #[arg(long)]
        token: String,
    },

    /// List the user's teams
    UserTeams {
        /// Access token
        #[arg(long)]
        token: String,
    },

    /// List an organization's teams
    Teams {
        /// Organization login
        #[arg(long)]
        org: String,

        /// Access token
        #[arg(long)]
        token: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
