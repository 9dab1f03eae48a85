//! Mock JSON fetcher for testing
//!
//! Replays canned responses instead of making real HTTP calls and records
//! every URL it was asked for, so tests can assert on both the result and
//! the exact network traffic a client would have produced.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::JsonFetcher;
use crate::error::{ApiError, Result};

/// Mock fetcher for testing.
///
/// Responses come from two places, checked in order:
/// 1. a queue of responses handed out one per call, whatever the URL
/// 2. responses registered for a specific URL
///
/// A call matching neither fails with [`ApiError::NotFound`].
///
/// # Example
/// ```ignore
/// let mock = MockFetcher::new()
///     .with_response("https://api.github.com/orgs/google", json!({"repos_url": "..."}))
///     .await;
///
/// let org = mock.fetch_json("https://api.github.com/orgs/google").await?;
/// assert_eq!(mock.call_count().await, 1);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Responses keyed by URL
    responses: Arc<Mutex<HashMap<String, Value>>>,
    /// Responses consumed in order, one per call
    queued: Arc<Mutex<VecDeque<Value>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// URLs requested, in call order
    requested_urls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `payload` whenever `url` is requested.
    pub async fn with_response(self, url: impl Into<String>, payload: Value) -> Self {
        self.responses.lock().await.insert(url.into(), payload);
        self
    }

    /// Return `payloads` one per call, in order, regardless of URL.
    pub async fn with_sequence(self, payloads: Vec<Value>) -> Self {
        self.queued.lock().await.extend(payloads);
        self
    }

    /// Configure an error to return on the next call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Number of fetches performed so far.
    pub async fn call_count(&self) -> usize {
        self.requested_urls.lock().await.len()
    }

    /// Every URL requested, in call order.
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requested_urls.lock().await.clone()
    }

    /// Panic unless exactly one fetch was made, against `url`.
    pub async fn assert_called_once_with(&self, url: &str) {
        let urls = self.requested_urls().await;
        assert_eq!(urls, vec![url.to_string()], "expected exactly one fetch of {url}");
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.requested_urls.lock().await.push(url.to_string());

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        if let Some(payload) = self.queued.lock().await.pop_front() {
            return Ok(payload);
        }

        self.responses
            .lock()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(url.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_unknown_url_is_not_found() {
        let mock = MockFetcher::new();

        let result = mock.fetch_json("https://example.com").await;
        assert!(result.is_err());
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_with_response() {
        let mock = MockFetcher::new()
            .with_response("http://example.com", json!({"payload": true}))
            .await;

        let value = mock.fetch_json("http://example.com").await.unwrap();
        assert_eq!(value, json!({"payload": true}));
        mock.assert_called_once_with("http://example.com").await;
    }

    #[tokio::test]
    async fn test_mock_sequence_takes_precedence_and_drains() {
        let mock = MockFetcher::new()
            .with_response("http://holberton.io", json!({"payload": false}))
            .await
            .with_sequence(vec![json!(1), json!(2)])
            .await;

        assert_eq!(mock.fetch_json("http://holberton.io").await.unwrap(), json!(1));
        assert_eq!(mock.fetch_json("http://other").await.unwrap(), json!(2));
        assert_eq!(
            mock.fetch_json("http://holberton.io").await.unwrap(),
            json!({"payload": false})
        );
        assert_eq!(
            mock.requested_urls().await,
            vec!["http://holberton.io", "http://other", "http://holberton.io"]
        );
    }

    #[tokio::test]
    async fn test_mock_with_error() {
        let mock = MockFetcher::new()
            .with_response("http://example.com", json!({}))
            .await
            .with_error(ApiError::Unauthorized)
            .await;

        let result = mock.fetch_json("http://example.com").await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.fetch_json("http://example.com").await;
        assert!(result.is_ok());
        assert_eq!(mock.call_count().await, 2);
    }
}
