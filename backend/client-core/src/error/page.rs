use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PageError {
    #[error("Mount Point Error: no element with id '{id}' {location}")]
    MissingElement {
        id: &'static str,
        location: ErrorLocation,
    },

    #[error("Unbound Handler Error: '{id}' was not bound at start {location}")]
    Unbound {
        id: &'static str,
        location: ErrorLocation,
    },
}

impl PageError {
    #[track_caller]
    pub fn missing_element(id: &'static str) -> Self {
        PageError::MissingElement {
            id,
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn unbound(id: &'static str) -> Self {
        PageError::Unbound {
            id,
            location: ErrorLocation::here(),
        }
    }
}
