// GitHub REST client - the only crate that talks HTTP
pub mod github;
pub mod retry;

// Re-export common types
pub use github::{GitHubClient, GitHubError, GitHubRepo, GitHubUser, MAX_PER_PAGE};
pub use retry::{RetryConfig, Retryable};
