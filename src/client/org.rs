//! Organization client: org metadata and license-filtered public repos

use log::debug;
use serde_json::Value;

use super::github::API_BASE_URL;
use super::{JsonFetcher, RepoEntry};
use crate::error::{ApiError, Error, Result};
use crate::utils::{Memoized, access_nested_map};

/// Client for one GitHub organization.
///
/// The org payload, the repos URL and the repos payload are each fetched at
/// most once per client and reused by every later query, so any number of
/// [`public_repos`](Self::public_repos) calls costs two requests in total.
/// A new client starts with empty caches.
pub struct GithubOrgClient<F: JsonFetcher> {
    org_name: String,
    api_base: String,
    fetcher: F,
    org: Memoized<Value>,
    public_repos_url: Memoized<String>,
    repos_payload: Memoized<Vec<Value>>,
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// Create a client for `org_name` against the public GitHub API.
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self {
            org_name: org_name.into(),
            api_base: API_BASE_URL.to_string(),
            fetcher,
            org: Memoized::new("org"),
            public_repos_url: Memoized::new("public_repos_url"),
            repos_payload: Memoized::new("repos_payload"),
        }
    }

    /// Point the org endpoint at another API host (GitHub Enterprise, test servers).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Organization this client queries
    #[allow(dead_code)]
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// The underlying fetcher
    #[allow(dead_code)]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Org metadata endpoint
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_base, self.org_name)
    }

    /// Org metadata payload.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                self.fetcher.fetch_json(&url).await
            })
            .await
    }

    /// `repos_url` from the org payload.
    pub async fn public_repos_url(&self) -> Result<&str> {
        let url = self
            .public_repos_url
            .get_or_try_init(|| async {
                let org = self.org().await?;
                let value = access_nested_map(org, &["repos_url"])?;
                let url = value.as_str().ok_or_else(|| {
                    ApiError::InvalidResponse(format!(
                        "repos_url for {} is {}, expected a string",
                        self.org_name,
                        json_kind(value)
                    ))
                })?;
                Ok::<_, Error>(url.to_string())
            })
            .await?;

        Ok(url.as_str())
    }

    /// Repository objects from the repos listing, in the order GitHub returned them.
    pub async fn repos_payload(&self) -> Result<&[Value]> {
        let repos = self
            .repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                match self.fetcher.fetch_json(url).await? {
                    Value::Array(repos) => {
                        debug!("Fetched {} repositories for {}", repos.len(), self.org_name);
                        Ok::<_, Error>(repos)
                    }
                    other => Err(Error::from(ApiError::InvalidResponse(format!(
                        "{} returned {}, expected an array of repositories",
                        url,
                        json_kind(&other)
                    )))),
                }
            })
            .await?;

        Ok(repos.as_slice())
    }

    /// Names of the org's public repos, optionally only those under `license`.
    #[allow(dead_code)]
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let entries = self.public_repo_entries(license).await?;
        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }

    /// Same selection as [`public_repos`](Self::public_repos), with each repo's license key.
    pub async fn public_repo_entries(&self, license: Option<&str>) -> Result<Vec<RepoEntry>> {
        let repos = self.repos_payload().await?;

        let entries = repos
            .iter()
            .filter(|repo| license.is_none_or(|key| has_license(repo, key)))
            .map(repo_entry)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "{} of {} repositories match license filter {:?}",
            entries.len(),
            repos.len(),
            license
        );
        Ok(entries)
    }
}

/// Whether `repo.license.key` equals `license_key`.
///
/// Missing or `null` license data counts as "no license" rather than an error.
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    license_key_of(repo) == Some(license_key)
}

fn license_key_of(repo: &Value) -> Option<&str> {
    access_nested_map(repo, &["license", "key"])
        .ok()
        .and_then(Value::as_str)
}

fn repo_entry(repo: &Value) -> Result<RepoEntry> {
    let name = access_nested_map(repo, &["name"])?;
    let name = name.as_str().ok_or_else(|| {
        ApiError::InvalidResponse(format!("repository name is {}", json_kind(name)))
    })?;

    Ok(RepoEntry {
        name: name.to_string(),
        license: license_key_of(repo).map(str::to_string),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
