//! ghorg - list an organization's public GitHub repositories, filtered by license

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod utils;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Install env_logger: `warn` by default, `debug` with --debug, `RUST_LOG` wins.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("ghorg version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org { org } => cli::org::show(&opts, &org).await,
        Commands::Repos { org, license } => {
            cli::repos::list(&opts, &org, license.as_deref()).await
        }
        Commands::Completion { shell } => {
            cli::completion::run(shell);
            Ok(())
        }
    }
}
