//! Organization command implementation

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::output::Formattable;

/// Run the org command: show one organization's metadata
pub async fn show(opts: &GlobalOptions, org: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.org_client(org);

    debug!("Fetching org metadata from {}", client.org_url());
    let payload = client.org().await?;

    vec![OrgDisplay::from(payload)].print(ctx.format)
}
