//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, Select, theme::ColorfulTheme};

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for an optional GitHub token and a default output format, keeping
/// any other settings already present in the config file.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;

    println!("{}", "Welcome to ghorg!".bold().green());
    println!("A token raises the GitHub rate limit. Leave it empty to stay anonymous.\n");

    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("GitHub personal access token")
        .allow_empty_password(true)
        .interact()?;

    if !token.trim().is_empty() {
        config.token = Some(token.trim().to_string());
    }

    let formats = [OutputFormat::Table, OutputFormat::Json];
    let labels = ["table", "json"];
    let current = config
        .preferences
        .format
        .as_deref()
        .and_then(OutputFormat::from_name)
        .and_then(|f| formats.iter().position(|candidate| *candidate == f))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Default output format")
        .items(&labels)
        .default(current)
        .interact()?;
    config.preferences.format = Some(labels[selection].to_string());

    config.save_at(opts.config_ref())?;

    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
