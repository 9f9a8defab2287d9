// Search-box input -> validated login
use std::fmt;
use std::str::FromStr;

use crate::error::InputValidationError;

/// Character GitHub puts in front of a login when mentioning someone
pub const RESERVED_PREFIX: char = '@';

/// A login that passed input validation
///
/// Stored bare; `Display` renders it the way the site does, `@login`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Validate what the user typed
    ///
    /// Input that already carries the prefix is rejected rather than
    /// silently stripped.
    pub fn from_input(raw: &str) -> Result<Self, InputValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(InputValidationError::Empty);
        }

        if trimmed.starts_with(RESERVED_PREFIX) {
            return Err(InputValidationError::ReservedPrefix);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The bare login, without prefix
    pub fn login(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", RESERVED_PREFIX, self.0)
    }
}

impl FromStr for Handle {
    type Err = InputValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s)
    }
}
