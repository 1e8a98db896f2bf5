//! Crate-level error surfaced by repositories and services.
//!
//! # Invariants
//! - Configuration problems are detected before any request is sent.
//! - Every remote failure keeps its HTTP status when one exists.

use crate::config::ConfigError;
use crate::remote::error::RemoteError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LookbookResult<T> = Result<T, LookbookError>;

#[derive(Debug)]
pub enum LookbookError {
    /// Required credential is missing or settings are invalid.
    Configuration(ConfigError),
    /// The store or the text helper failed or could not be reached.
    Remote(RemoteError),
}

impl LookbookError {
    /// HTTP status of the underlying remote failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote(err) => err.status(),
            Self::Configuration(_) => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// One-line text for an error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(err) => format!("{err}. Please check your configuration."),
            Self::Remote(err) => err.to_string(),
        }
    }
}

impl Display for LookbookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "{err}"),
            Self::Remote(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LookbookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::Remote(err) => Some(err),
        }
    }
}

impl From<ConfigError> for LookbookError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value)
    }
}

impl From<RemoteError> for LookbookError {
    fn from(value: RemoteError) -> Self {
        Self::Remote(value)
    }
}
