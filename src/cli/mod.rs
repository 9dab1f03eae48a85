//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completion;
pub mod context;
pub mod init;
pub mod org;
pub mod repos;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// ghorg - list an organization's public GitHub repositories by license
#[derive(Parser, Debug)]
#[command(name = "ghorg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json) [default: table]
    #[arg(
        long,
        global = true,
        env = "GHORG_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GHORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// GitHub token (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "GHORG_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// API base URL (GitHub Enterprise or a test server)
    #[arg(long, global = true, env = "GHORG_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHORG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a GitHub token and default output format
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Show an organization's metadata
    Org {
        /// Organization login (e.g. "google")
        org: String,
    },

    /// List an organization's public repositories
    Repos {
        /// Organization login (e.g. "google")
        org: String,

        /// Only list repositories under this license key (e.g. "apache-2.0")
        #[arg(long, short = 'l')]
        license: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   ghorg completion bash > /etc/bash_completion.d/ghorg
  zsh:    ghorg completion zsh > \"${fpath[1]}/_ghorg\"
  fish:   ghorg completion fish > ~/.config/fish/completions/ghorg.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
