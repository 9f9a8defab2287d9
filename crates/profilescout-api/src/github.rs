use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::retry::{is_retryable_status, with_retry, RetryConfig, Retryable};

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub refuses anything above this for `per_page`
pub const MAX_PER_PAGE: u32 = 100;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("API request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl Retryable for GitHubError {
    fn is_retryable(&self) -> bool {
        match self {
            GitHubError::RequestFailed { status, .. } => reqwest::StatusCode::from_u16(*status)
                .map(is_retryable_status)
                .unwrap_or(false),
            GitHubError::NetworkError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            // The hourly window won't reset during a backoff
            GitHubError::RateLimitExceeded => false,
            GitHubError::NotFound(_) | GitHubError::ParseError(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
    base_url: String,
    retry_config: RetryConfig,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, GITHUB_API_BASE.to_string(), DEFAULT_TIMEOUT)
    }

    /// For GitHub Enterprise, or pointing at a local stub
    pub fn with_base_url(token: Option<String>, base_url: String, timeout: Duration) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("ProfileScout/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            token: token.filter(|t| !t.is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_config: RetryConfig::default(),
        })
    }

    /// Swap the retry configuration
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// URL of a user's profile endpoint
    pub fn user_url(&self, login: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(login))
    }

    /// Fetch a user's public profile
    pub async fn get_user(&self, login: &str) -> Result<GitHubUser> {
        let url = self.user_url(login);
        debug!("Fetching user {}", login);

        with_retry(&self.retry_config, || async {
            self.get_json(&url, &[], || login.to_string()).await
        })
        .await
    }

    /// Fetch one page of a repository listing
    ///
    /// `repos_url` is the `repos_url` field of a user payload. Pages are
    /// 1-based, like the API's.
    pub async fn get_repo_page(
        &self,
        repos_url: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GitHubRepo>> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE).to_string();
        let page = page.max(1).to_string();
        debug!("Fetching {} page={} per_page={}", repos_url, page, per_page);

        with_retry(&self.retry_config, || async {
            let query = [("per_page", per_page.as_str()), ("page", page.as_str())];
            self.get_json(repos_url, &query, || repos_url.to_string()).await
        })
        .await
    }

    async fn get_json<T, F>(&self, url: &str, query: &[(&str, &str)], not_found: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> String,
    {
        let mut request = self.client.get(url).query(query);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound(not_found()));
        }

        if is_rate_limited(status, response.headers()) {
            return Err(GitHubError::RateLimitExceeded);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::RequestFailed {
                status: status.as_u16(),
                message: api_message(&body),
            });
        }

        // Decode by hand so malformed bodies surface as ParseError
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// GitHub signals an exhausted quota with 429, or a 403 plus a zeroed
/// remaining counter
fn is_rate_limited(status: reqwest::StatusCode, headers: &reqwest::header::HeaderMap) -> bool {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == reqwest::StatusCode::FORBIDDEN
        && headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim() == "0")
}

/// Pull `message` out of a GitHub error body, falling back to the raw text
fn api_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }

    serde_json::from_str::<ApiError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string())
}

/// A user profile from `/users/{login}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub repos_url: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry of a `repos_url` listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    pub language: Option<String>,
}
