//! CLI runner - executes commands

use crate::auth::{AccessToken, GitHubClient, OAuth2Provider};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::json;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = GitHubClient::new(self.load_config()?)?;

        match &self.cli.command {
            Commands::LoginUrl { return_url } => {
                let url = client.build_login_url(&parse_url(return_url)?)?;
                self.emit(&json!({ "url": url.as_str() }))
            }
            Commands::Exchange { return_url, code } => {
                let token = client
                    .exchange_code(&parse_url(return_url)?, code)
                    .await?
                    .ok_or_else(|| {
                        anyhow::anyhow!("Token exchange failed: provider returned no access token")
                    })?;
                self.emit(&json!({ "access_token": token.into_inner() }))
            }
            Commands::Profile { token } => {
                let profile = client.fetch_profile(&AccessToken::new(token.as_str())).await?;
                self.emit(&profile)
            }
            Commands::Orgs { token } => {
                let orgs = client
                    .list_organizations(&AccessToken::new(token.as_str()))
                    .await?;
                self.emit(&orgs)
            }
            Commands::UserTeams { token } => {
                let teams = client
                    .list_user_teams(&AccessToken::new(token.as_str()))
                    .await?;
                self.emit(&teams)
            }
            Commands::Teams { org, token } => {
                let teams = client
                    .list_teams(org, &AccessToken::new(token.as_str()))
                    .await?;
                self.emit(&teams)
            }
        }
    }

    /// Build the client config from the config file and flag overrides
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load_file(path)?,
            None => {
                let app_id = self
                    .cli
                    .app_id
                    .clone()
                    .ok_or_else(|| Error::config("App id not specified (use --app-id or -C)"))?;
                let app_secret = self.cli.app_secret.clone().ok_or_else(|| {
                    Error::config("App secret not specified (use --app-secret or -C)")
                })?;
                ClientConfig::builder(app_id, app_secret).build()?
            }
        };

        if let Some(app_id) = &self.cli.app_id {
            config.app_id.clone_from(app_id);
        }
        if let Some(app_secret) = &self.cli.app_secret {
            config.app_secret.clone_from(app_secret);
        }
        if let Some(user_agent) = &self.cli.user_agent {
            config.user_agent.clone_from(user_agent);
        }
        if let Some(scopes) = &self.cli.scopes {
            config.scopes.clone_from(scopes);
        }

        config.validate()?;
        Ok(config)
    }

    /// Print a value to stdout in the selected format
    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{output}");
        Ok(())
    }
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| Error::config(format!("Invalid return URL '{value}': {e}")))
}
