use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use profilescout_api::{RetryConfig, MAX_PER_PAGE};

use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::repo_list::{ListOptions, DEFAULT_PER_PAGE};
use crate::sort::SortSpec;

/// Main configuration structure
///
/// This gets loaded from config file, env vars, and CLI args.
/// Priority: CLI > Env > File > Defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub network: NetworkConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load config from `path`, or the default location when `None`
    ///
    /// A missing file is not an error, you just get defaults.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Get the config file path
    /// Uses XDG on Linux, Application Support on macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("profilescout");

        Ok(config_dir.join("config.toml"))
    }

    /// Controller options derived from the github and ui sections
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            per_page: self.github.per_page(),
            default_page_size: self.ui.page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubConfig {
    /// GitHub personal access token, only used to lift the anonymous rate limit
    /// Get one at https://github.com/settings/tokens
    pub token: Option<String>,

    /// API URL (for GitHub Enterprise)
    #[serde(default = "default_github_url")]
    pub api_url: String,

    /// Repositories requested per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl GitHubConfig {
    /// Page size clamped to what the API accepts
    pub fn per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

fn default_github_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_github_url(),
            per_page: default_per_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Retries for transient failures (5xx, timeouts); 0 turns retrying off
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl NetworkConfig {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_retries,
            initial_delay_ms: self.initial_delay_ms,
            max_delay_ms: self.max_delay_ms.max(self.initial_delay_ms),
            ..RetryConfig::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_delay() -> u64 {
    1000
}

fn default_max_delay() -> u64 {
    30000
}

fn default_timeout() -> u64 {
    30
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay(),
            max_delay_ms: default_max_delay(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Rows per table page, one of 5, 10, 15, 20
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Order applied after each search: "stars_desc", "name_asc", "none", ...
    #[serde(default = "default_initial_sort")]
    pub initial_sort: String,

    /// How long an error banner stays up
    #[serde(default = "default_error_timeout")]
    pub error_timeout_secs: u64,
}

impl UiConfig {
    /// Configured page size, or the default when it isn't one of the choices
    pub fn page_size(&self) -> NonZeroUsize {
        match NonZeroUsize::new(self.page_size) {
            Some(size) if PAGE_SIZE_CHOICES.contains(&size.get()) => size,
            _ => {
                warn!(
                    "page_size {} is not one of {:?}, using {}",
                    self.page_size, PAGE_SIZE_CHOICES, DEFAULT_PAGE_SIZE
                );
                DEFAULT_PAGE_SIZE
            }
        }
    }

    /// Parsed initial sort; unparseable values fall back to the default
    pub fn initial_sort(&self) -> Option<SortSpec> {
        SortSpec::parse_setting(&self.initial_sort).unwrap_or_else(|e| {
            warn!("Ignoring initial_sort: {}", e);
            SortSpec::parse_setting(&default_initial_sort()).ok().flatten()
        })
    }

    pub fn error_timeout(&self) -> Duration {
        Duration::from_secs(self.error_timeout_secs)
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE.get()
}

fn default_initial_sort() -> String {
    "stars_desc".to_string() // most starred first, like the profile page always did
}

fn default_error_timeout() -> u64 {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            initial_sort: default_initial_sort(),
            error_timeout_secs: default_error_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::ColumnKey;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.network.max_retries, 3);
        assert_eq!(config.ui.page_size, 5);
        assert_eq!(config.ui.error_timeout(), Duration::from_secs(5));
        assert_eq!(
            config.ui.initial_sort(),
            Some(SortSpec::descending(ColumnKey::Stars))
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("per_page"));
        assert!(toml.contains("initial_sort"));
        assert_eq!(Config::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config = Config::from_toml(
            r#"
            [github]
            per_page = 30

            [ui]
            page_size = 10
            initial_sort = "name"
            "#,
        )
        .unwrap();

        assert_eq!(config.github.per_page(), 30);
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.network, NetworkConfig::default());
        assert_eq!(config.ui.page_size().get(), 10);
        assert_eq!(
            config.ui.initial_sort(),
            Some(SortSpec::ascending(ColumnKey::Name))
        );
        assert_eq!(config.ui.error_timeout_secs, 5);
    }

    #[test]
    fn test_out_of_range_values_are_tamed() {
        let config = Config::from_toml(
            r#"
            [github]
            per_page = 5000

            [ui]
            page_size = 7
            initial_sort = "description_asc"
            "#,
        )
        .unwrap();

        assert_eq!(config.github.per_page(), 100);
        assert_eq!(config.ui.page_size().get(), 5);
        assert_eq!(
            config.ui.initial_sort(),
            Some(SortSpec::descending(ColumnKey::Stars))
        );
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = Config::from_toml("[ui\npage_size = ").unwrap_err();
        assert!(matches!(err, crate::Error::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("profilescout-test-does-not-exist.toml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_retry_config_from_network_section() {
        let network = NetworkConfig {
            max_retries: 0,
            initial_delay_ms: 200,
            max_delay_ms: 100,
            timeout_secs: 0,
        };
        let retry = network.retry_config();
        assert_eq!(retry.max_retries, 0);
        assert_eq!(retry.max_delay_ms, 200);
        assert_eq!(network.timeout(), Duration::from_secs(1));
    }
}
