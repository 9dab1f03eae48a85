//! Status command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ghorg Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created)".dimmed()
        );
    }

    let ctx = CommandContext::new(opts)?;

    if ctx.has_token() {
        println!("{} GitHub token configured", "✓".green());
    } else {
        println!(
            "{} No GitHub token (anonymous requests are rate limited)",
            "⚠".yellow()
        );
        println!("  → Run 'ghorg init' or set GHORG_TOKEN");
    }

    println!("API host: {}", ctx.api_host);
    println!("Output format: {:?}", ctx.format);

    Ok(())
}
