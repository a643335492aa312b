//! Data carried between the news pages and the server.
//!
//! Everything here is request-scoped: a form struct lives for one submit,
//! an [`Article`] for one render. No business logic beyond reading fields
//! and shaping request bodies.

pub mod article;
pub mod article_query;
pub mod error;
pub mod form;

#[cfg(test)]
mod tests;

pub use article::{Article, PublishedDate};
pub use article_query::{ArticleQuery, SortDirection, SortOrder};
pub use article_query::builder::ArticleQueryBuilder;
pub use error::model_error::ModelError;
pub use form::{Credentials, FieldSource, FormRequest, Registration, SettingsUpdate};
