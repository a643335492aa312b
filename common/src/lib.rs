//! Shared building blocks for the news client.
//!
//! This crate holds the small types every other crate leans on: error
//! location tracking, HTTP status categorisation and the redacting wrapper
//! for secrets typed into forms.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Pure data carried by requests and responses
//! - **client-core**: HTTP client, page seams and handlers
//! - **news**: Command-line wiring

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
