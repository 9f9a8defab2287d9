use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a resolved profile
///
/// Replaced wholesale on every search, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub profile_url: String,
    pub bio: Option<String>,
    pub public_repo_count: u32,
    pub following_count: u32,
    pub follower_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    /// Opaque URL the repository pages hang off
    pub repository_page_handle: String,
}

impl Account {
    /// Name to show in the profile card, login when the profile has none
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// One row of the repository table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub star_count: u32,
    /// Doubles as identity when merging pages
    pub url: String,
    pub language: Option<String>,
}
