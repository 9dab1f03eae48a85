//! Org and repository display models

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::client::RepoEntry;
use crate::utils::access_nested_map;

/// Placeholder for fields absent from the payload
const MISSING: &str = "--";

/// Longest description shown in a table cell
const MAX_DESCRIPTION_LEN: usize = 60;

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render the scalar at `path`, or `--` when absent or `null`.
fn field(payload: &Value, path: &[&str]) -> String {
    match access_nested_map(payload, path) {
        Ok(Value::String(s)) => s.clone(),
        Ok(Value::Null) | Err(_) => MISSING.to_string(),
        Ok(other) => other.to_string(),
    }
}

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "LOGIN")]
    pub login: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    /// Public repository count as reported by GitHub
    #[tabled(rename = "REPOS")]
    pub public_repos: String,

    #[tabled(rename = "REPOS URL")]
    pub repos_url: String,
}

impl From<&Value> for OrgDisplay {
    fn from(org: &Value) -> Self {
        Self {
            login: field(org, &["login"]),
            name: field(org, &["name"]),
            description: truncate_string(&field(org, &["description"]), MAX_DESCRIPTION_LEN),
            public_repos: field(org, &["public_repos"]),
            repos_url: field(org, &["repos_url"]),
        }
    }
}

/// Repository display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    #[tabled(rename = "REPO")]
    pub name: String,

    /// License key, `--` when GitHub found none
    #[tabled(rename = "LICENSE")]
    pub license: String,
}

impl From<RepoEntry> for RepoDisplay {
    fn from(entry: RepoEntry) -> Self {
        Self {
            name: entry.name,
            license: entry.license.unwrap_or_else(|| MISSING.to_string()),
        }
    }
}
