//! Command execution context
//!
//! Merges CLI flags with the config file and builds the API client once per
//! command.

use std::sync::Arc;

use log::warn;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::github::API_BASE_URL;
use crate::client::{GithubClient, GithubOrgClient};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Output format preference
    pub format: OutputFormat,
    /// API base URL the org endpoint is built from
    pub api_host: String,
    client: Arc<GithubClient>,
}

impl CommandContext {
    /// Load the config file and build the client.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        Self::from_config(opts, &config)
    }

    /// Build the context from an already loaded config.
    pub fn from_config(opts: &GlobalOptions, config: &Config) -> Result<Self> {
        let token = opts.token.clone().or_else(|| config.token.clone());
        let api_host = opts
            .api_host
            .clone()
            .or_else(|| config.api_host.clone())
            .unwrap_or_else(|| API_BASE_URL.to_string());
        let format = resolve_format(opts.format, config);

        let client = Arc::new(GithubClient::new(token)?);

        Ok(Self {
            format,
            api_host,
            client,
        })
    }

    /// Client for one organization, sharing this context's HTTP client.
    pub fn org_client(&self, org: &str) -> GithubOrgClient<Arc<GithubClient>> {
        GithubOrgClient::new(org, Arc::clone(&self.client)).with_api_base(&self.api_host)
    }

    /// Whether requests will be authenticated
    pub fn has_token(&self) -> bool {
        self.client.has_token()
    }
}

/// CLI format, else the config preference, else table.
fn resolve_format(cli: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = cli {
        return format;
    }

    match config.preferences.format.as_deref() {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            warn!("Unknown format {:?} in config, using table", name);
            OutputFormat::Table
        }),
        None => OutputFormat::Table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    fn config_with(token: Option<&str>, api_host: Option<&str>, format: Option<&str>) -> Config {
        Config {
            token: token.map(str::to_string),
            api_host: api_host.map(str::to_string),
            preferences: Preferences {
                format: format.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let ctx = CommandContext::from_config(&GlobalOptions::default(), &Config::default()).unwrap();

        assert_eq!(ctx.api_host, API_BASE_URL);
        assert_eq!(ctx.format, OutputFormat::Table);
        assert!(!ctx.has_token());
        assert_eq!(
            ctx.org_client("google").org_url(),
            "https://api.github.com/orgs/google"
        );
    }

    #[test]
    fn test_config_values_apply() {
        let config = config_with(Some("ghp_config"), Some("http://ghe.local/api/v3/"), Some("json"));

        let ctx = CommandContext::from_config(&GlobalOptions::default(), &config).unwrap();

        assert!(ctx.has_token());
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(
            ctx.org_client("acme").org_url(),
            "http://ghe.local/api/v3/orgs/acme"
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = config_with(None, Some("http://ghe.local"), Some("json"));
        let opts = GlobalOptions {
            format: Some(OutputFormat::Table),
            api_host: Some("http://127.0.0.1:9999".to_string()),
            token: Some("ghp_cli".to_string()),
            ..Default::default()
        };

        let ctx = CommandContext::from_config(&opts, &config).unwrap();

        assert_eq!(ctx.api_host, "http://127.0.0.1:9999");
        assert_eq!(ctx.format, OutputFormat::Table);
        assert!(ctx.has_token());
    }

    #[test]
    fn test_unknown_config_format_falls_back_to_table() {
        let config = config_with(None, None, Some("yaml"));
        assert_eq!(resolve_format(None, &config), OutputFormat::Table);
    }
}
