pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod news_client;
pub mod page;
pub mod render;

#[cfg(test)]
mod tests;

pub use app::{App, MountPoint};
pub use news_client::NewsClient;

pub const NEWS_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const NEWS_SERVER_PORT: u16 = 8080;
pub const NEWS_SERVER_BASE_URL: &str =
    const_format::concatcp!("http://", NEWS_SERVER_HOSTNAME, ":", NEWS_SERVER_PORT);

/// Env var that overrides `server.base_url` from the config file.
pub const BASE_URL_ENV_VAR: &str = "NEWS_CLIENT_BASE_URL";

pub const LOGIN_ENDPOINT: &str = "login";
pub const REGISTER_ENDPOINT: &str = "register";
pub const SETTINGS_ENDPOINT: &str = "settings";
pub const ARTICLES_FETCH_ALL_ENDPOINT: &str = "articles/fetchAll";
pub const ARTICLES_FETCH_ENDPOINT: &str = "articles/fetch";

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
