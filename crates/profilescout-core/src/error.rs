use thiserror::Error;

/// Raw search input we refuse before touching the network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    #[error("Type a username to search for")]
    Empty,

    #[error("Leave out the leading '@', it is added for you")]
    ReservedPrefix,
}

/// Why a handle could not be turned into an account
///
/// Resolution is all-or-nothing: there is never a half-filled account
/// sitting next to one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Oops, the username {0} does not exist")]
    NotFound(String),

    #[error("GitHub rate limit exceeded, try again later or set GITHUB_TOKEN")]
    RateLimited,

    #[error("Could not reach GitHub: {0}")]
    Transport(String),

    #[error("Unexpected profile response: {0}")]
    Malformed(String),
}

/// A repository page that did not arrive
///
/// Recorded by the list controller; whatever was merged before stays put.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageFetchError {
    #[error("GitHub rate limit exceeded")]
    RateLimited,

    #[error("Could not load repositories: {0}")]
    Transport(String),

    #[error("Unexpected repository response: {0}")]
    Malformed(String),
}

/// All the ways things can go wrong in ProfileScout
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    InvalidInput(#[from] InputValidationError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    PageFetch(#[from] PageFetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
