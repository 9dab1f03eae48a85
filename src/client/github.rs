//! HTTP implementation of [`JsonFetcher`] for the GitHub REST API

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use super::JsonFetcher;
use crate::error::{ApiError, Result};

/// GitHub API base URL
pub const API_BASE_URL: &str = "https://api.github.com";

/// GitHub rejects requests that do not identify their client.
const USER_AGENT: &str = concat!("ghorg/", env!("CARGO_PKG_VERSION"));

/// Media type recommended by the GitHub REST API
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Wait applied when GitHub signals a rate limit without saying for how long
const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// GitHub API client
///
/// Every [`fetch_json`](JsonFetcher::fetch_json) call is a single GET with no
/// retry, no timeout and no response caching.
pub struct GithubClient {
    http: HttpClient,
    token: Option<String>,
}

impl GithubClient {
    /// Create a new client, optionally authenticated with a personal access token.
    pub fn new(token: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, token })
    }

    /// Whether requests carry an `Authorization` header
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Parse a header as a number, ignoring malformed values
fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<T>().ok())
}

/// How long GitHub asks us to back off, if the response is a rate limit.
///
/// Secondary limits send `retry-after`; the primary limit sends
/// `x-ratelimit-remaining: 0` with an epoch `x-ratelimit-reset`.
fn rate_limit_wait(headers: &HeaderMap) -> Option<Duration> {
    if let Some(secs) = header_number::<u64>(headers, "retry-after") {
        return Some(Duration::from_secs(secs));
    }

    let exhausted = header_number::<u64>(headers, "x-ratelimit-remaining") == Some(0);
    if !exhausted {
        return None;
    }

    let wait = header_number::<i64>(headers, "x-ratelimit-reset")
        .map(|reset| Duration::from_secs((reset - Utc::now().timestamp()).max(0) as u64))
        .unwrap_or(DEFAULT_RATE_LIMIT_WAIT);
    Some(wait)
}

#[async_trait]
impl JsonFetcher for GithubClient {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let mut request = self.http.get(url).header(ACCEPT, GITHUB_JSON);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if status.is_success() {
            let body = response.text().await.map_err(ApiError::from)?;
            let value = serde_json::from_str(&body).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
            })?;
            return Ok(value);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                match rate_limit_wait(response.headers()) {
                    Some(wait) => {
                        warn!("GitHub rate limit hit, retry after {:?}", wait);
                        Err(ApiError::RateLimit(wait).into())
                    }
                    None if status == StatusCode::TOO_MANY_REQUESTS => {
                        Err(ApiError::RateLimit(DEFAULT_RATE_LIMIT_WAIT).into())
                    }
                    None => Err(ApiError::Forbidden.into()),
                }
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(url.to_string()).into()),
            status if status.is_client_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Bad request: {}", status));
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}
