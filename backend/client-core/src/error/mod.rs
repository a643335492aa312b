pub mod config;
pub mod news_client;
pub mod page;

pub use config::ConfigError;
pub use news_client::NewsClientError;
pub use page::PageError;
