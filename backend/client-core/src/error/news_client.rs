use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum NewsClientError {
    /// The request never produced a response (offline, DNS, refused, timed out).
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The server answered with a non-2xx status.
    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl NewsClientError {
    #[track_caller]
    pub fn server(status: impl Into<HttpStatusCode>, message: impl Into<String>) -> Self {
        NewsClientError::Server {
            status: status.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, NewsClientError::Http { .. })
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            NewsClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get error category for log lines.
    pub fn error_category(&self) -> &'static str {
        match self {
            NewsClientError::Http { is_timeout: true, .. } => "timeout",
            NewsClientError::Http { is_connection: true, .. } => "connection",
            NewsClientError::Http { .. } => "transport",
            NewsClientError::Json { .. } => "json",
            NewsClientError::UrlParse { .. } => "url",
            NewsClientError::Server { status, .. } if status.is_client_error() => "client_error",
            NewsClientError::Server { status, .. } if status.is_server_error() => "server_error",
            NewsClientError::Server { .. } => "rejected",
        }
    }
}

impl From<url::ParseError> for NewsClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        NewsClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for NewsClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        NewsClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for NewsClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        NewsClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
