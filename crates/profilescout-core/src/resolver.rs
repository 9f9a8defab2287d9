// Handle -> account lookup
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::ResolutionError;
use crate::handle::Handle;
use crate::models::Account;

/// Anything that can look up a profile by login
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn fetch_account(&self, login: &str) -> Result<Account, ResolutionError>;
}

/// Turns a validated handle into an account snapshot
///
/// No caching: every call goes to the source.
#[derive(Clone)]
pub struct AccountResolver {
    source: Arc<dyn AccountSource>,
}

impl AccountResolver {
    pub fn new(source: Arc<dyn AccountSource>) -> Self {
        Self { source }
    }

    pub async fn resolve(&self, handle: &Handle) -> Result<Account, ResolutionError> {
        debug!("Resolving {}", handle);

        let account = match self.source.fetch_account(handle.login()).await {
            Ok(account) => account,
            Err(err) => {
                warn!("Could not resolve {}: {}", handle, err);
                return Err(err);
            }
        };

        // Without a page handle the repository list has nowhere to go
        if account.repository_page_handle.trim().is_empty() {
            return Err(ResolutionError::Malformed(format!(
                "profile of {} has no repository listing",
                handle
            )));
        }

        info!(
            "Resolved {} ({} public repositories)",
            handle, account.public_repo_count
        );
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn account(login: &str, repos_url: &str) -> Account {
        Account {
            id: 583231,
            login: login.to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".to_string(),
            profile_url: format!("https://github.com/{}", login),
            bio: None,
            public_repo_count: 8,
            following_count: 9,
            follower_count: 17000,
            created_at: None,
            repository_page_handle: repos_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolve_passes_bare_login() {
        let mut source = MockAccountSource::new();
        source
            .expect_fetch_account()
            .with(eq("octocat"))
            .times(1)
            .returning(|login| Ok(account(login, "https://api.github.com/users/octocat/repos")));

        let resolver = AccountResolver::new(Arc::new(source));
        let handle = Handle::from_input("octocat").unwrap();
        let resolved = resolver.resolve(&handle).await.unwrap();

        assert_eq!(resolved.login, "octocat");
        assert_eq!(resolved.follower_count, 17000);
    }

    #[tokio::test]
    async fn test_unknown_handle_is_an_error() {
        let mut source = MockAccountSource::new();
        source
            .expect_fetch_account()
            .returning(|login| Err(ResolutionError::NotFound(login.to_string())));

        let resolver = AccountResolver::new(Arc::new(source));
        let handle = Handle::from_input("no-such-user-here").unwrap();

        assert_eq!(
            resolver.resolve(&handle).await,
            Err(ResolutionError::NotFound("no-such-user-here".to_string()))
        );
    }

    #[tokio::test]
    async fn test_account_without_page_handle_is_rejected() {
        let mut source = MockAccountSource::new();
        source
            .expect_fetch_account()
            .returning(|login| Ok(account(login, "")));

        let resolver = AccountResolver::new(Arc::new(source));
        let handle = Handle::from_input("octocat").unwrap();

        assert!(matches!(
            resolver.resolve(&handle).await,
            Err(ResolutionError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_every_resolve_hits_the_source() {
        let mut source = MockAccountSource::new();
        source
            .expect_fetch_account()
            .times(2)
            .returning(|login| Ok(account(login, "https://api.github.com/users/octocat/repos")));

        let resolver = AccountResolver::new(Arc::new(source));
        let handle = Handle::from_input("octocat").unwrap();
        resolver.resolve(&handle).await.unwrap();
        resolver.resolve(&handle).await.unwrap();
    }
}
