use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the `news` binary.
///
/// Serializable so `--json` runs can report failures in the same format as
/// results, with location tracking kept.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum NewsError {
    /// Error from this app (logger, directories)
    #[error("News Error: {message} {location}")]
    News {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (config, client construction, page wiring)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Invalid command-line input
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}

impl NewsError {
    #[track_caller]
    pub fn news(message: impl Into<String>) -> Self {
        NewsError::News {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn core(error: impl std::fmt::Display) -> Self {
        NewsError::Core {
            message: error.to_string(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        NewsError::Usage {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }
}
