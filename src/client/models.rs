//! Typed views over repository payloads

use serde::{Deserialize, Serialize};

/// One public repository as reported by the repos listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Repository name
    pub name: String,

    /// License key (e.g. `apache-2.0`), if GitHub detected one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}
