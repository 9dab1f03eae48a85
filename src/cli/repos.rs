//! Repository listing command implementation

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::RepoDisplay;
use crate::output::Formattable;

/// Run the repos command
///
/// Lists the organization's public repositories in the order GitHub returns
/// them, keeping only those under `license` when one is given.
pub async fn list(opts: &GlobalOptions, org: &str, license: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.org_client(org);

    debug!("Listing public repos for {} (license: {:?})", org, license);
    let entries = client.public_repo_entries(license).await?;

    let display: Vec<RepoDisplay> = entries.into_iter().map(RepoDisplay::from).collect();
    display.print(ctx.format)
}
