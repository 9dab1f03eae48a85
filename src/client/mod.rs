//! GitHub API client
//!
//! [`JsonFetcher`] is the seam between the organization client and the
//! network: [`GithubClient`] talks HTTP, and tests substitute a mock.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod org;

pub use github::GithubClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockFetcher;
pub use models::RepoEntry;
pub use org::GithubOrgClient;

/// Fetches a URL and decodes the body as JSON.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Perform one GET request against `url` and return the decoded body.
    ///
    /// Implementations must not retry or cache: one call is one round trip.
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

#[async_trait]
impl<F: JsonFetcher + ?Sized> JsonFetcher for Arc<F> {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        (**self).fetch_json(url).await
    }
}
