//! Test fixtures and builders for GitHub payloads
//!
//! The recorded Google payloads live under `tests/fixtures/` so the binary
//! tests can serve the same data from a mock HTTP server.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use serde_json::{Map, Value, json};

/// Org endpoint that the recorded payload was captured from
pub const ORG_URL: &str = "https://api.github.com/orgs/google";

/// `repos_url` inside the recorded org payload
pub const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

/// Every repo name in the recorded repos payload, in payload order
pub const EXPECTED_REPOS: &[&str] = &[
    "episodes.dart",
    "cpp-netlib",
    "dagger",
    "ios-webkit-debug-proxy",
    "google.github.io",
    "kratu",
    "build-debian-cloud",
    "traceur-compiler",
    "firmata.py",
];

/// Repos in the recorded payload licensed under `apache-2.0`
pub const APACHE2_REPOS: &[&str] = &["dagger", "kratu", "traceur-compiler", "firmata.py"];

/// Recorded `GET /orgs/google` response
pub fn org_payload() -> Value {
    serde_json::from_str(include_str!("../../tests/fixtures/org_payload.json"))
        .expect("org fixture is valid JSON")
}

/// Recorded `GET /orgs/google/repos` response
pub fn repos_payload() -> Value {
    serde_json::from_str(include_str!("../../tests/fixtures/repos_payload.json"))
        .expect("repos fixture is valid JSON")
}

// ============================================================================
// RepoPayloadBuilder
// ============================================================================

/// Builder for creating repo payload objects.
///
/// # Example
/// ```ignore
/// let repo = RepoPayloadBuilder::new("test_repo1")
///     .license("my_license")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RepoPayloadBuilder {
    name: String,
    license: Option<Value>,
}

impl RepoPayloadBuilder {
    /// Create a new builder for a repo without license data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license: None,
        }
    }

    /// Set `license.key`.
    pub fn license(mut self, key: impl Into<String>) -> Self {
        self.license = Some(json!({ "key": key.into() }));
        self
    }

    /// Set `license` to an explicit `null`, as GitHub does for unlicensed repos.
    pub fn null_license(mut self) -> Self {
        self.license = Some(Value::Null);
        self
    }

    /// Build the payload object.
    pub fn build(self) -> Value {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name));
        if let Some(license) = self.license {
            map.insert("license".to_string(), license);
        }
        Value::Object(map)
    }
}

/// Org payload pointing at `repos_url`.
pub fn org_with_repos_url(repos_url: &str) -> Value {
    json!({ "repos_url": repos_url })
}
