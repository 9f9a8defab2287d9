// GitHub provider implementation - bridges the API client with the core's source traits
use async_trait::async_trait;
use profilescout_api::{GitHubClient, GitHubError, GitHubRepo, GitHubUser};

use crate::{
    error::{PageFetchError, ResolutionError},
    models::{Account, Repository},
    repo_list::PageSource,
    resolver::AccountSource,
};

/// Wrapper around GitHubClient that implements AccountSource and PageSource
pub struct GitHubProvider {
    client: GitHubClient,
}

impl GitHubProvider {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountSource for GitHubProvider {
    async fn fetch_account(&self, login: &str) -> Result<Account, ResolutionError> {
        let user = self
            .client
            .get_user(login)
            .await
            .map_err(|e| resolution_error(login, e))?;

        Ok(github_to_account(user))
    }
}

#[async_trait]
impl PageSource for GitHubProvider {
    async fn fetch_page(
        &self,
        handle: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, PageFetchError> {
        let repos = self
            .client
            .get_repo_page(handle, page, per_page)
            .await
            .map_err(page_error)?;

        Ok(repos.into_iter().map(github_to_repo).collect())
    }
}

/// Convert a GitHub user payload into our Account snapshot
fn github_to_account(gh: GitHubUser) -> Account {
    Account {
        id: gh.id,
        login: gh.login,
        name: gh.name,
        avatar_url: gh.avatar_url,
        profile_url: gh.html_url,
        bio: gh.bio,
        public_repo_count: gh.public_repos,
        following_count: gh.following,
        follower_count: gh.followers,
        created_at: gh.created_at,
        repository_page_handle: gh.repos_url,
    }
}

/// Convert a GitHub repo payload into our Repository row
fn github_to_repo(gh: GitHubRepo) -> Repository {
    Repository {
        name: gh.name,
        description: gh.description.filter(|d| !d.trim().is_empty()),
        star_count: gh.stargazers_count,
        url: gh.html_url,
        language: gh.language,
    }
}

fn resolution_error(login: &str, err: GitHubError) -> ResolutionError {
    match err {
        GitHubError::NotFound(_) => ResolutionError::NotFound(format!("@{}", login)),
        GitHubError::RateLimitExceeded => ResolutionError::RateLimited,
        GitHubError::ParseError(e) => ResolutionError::Malformed(e.to_string()),
        other => ResolutionError::Transport(other.to_string()),
    }
}

fn page_error(err: GitHubError) -> PageFetchError {
    match err {
        GitHubError::RateLimitExceeded => PageFetchError::RateLimited,
        GitHubError::ParseError(e) => PageFetchError::Malformed(e.to_string()),
        other => PageFetchError::Transport(other.to_string()),
    }
}
