use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing Field Error: '{field}' not found in form '{form}' {location}")]
    MissingField {
        form: &'static str,
        field: &'static str,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn missing_field(form: &'static str, field: &'static str) -> Self {
        ModelError::MissingField {
            form,
            field,
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ModelError::Validation {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }
}
