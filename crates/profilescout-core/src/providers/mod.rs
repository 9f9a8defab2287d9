// Source implementations backed by real platforms
pub mod github;

pub use github::GitHubProvider;
