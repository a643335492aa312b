mod app;
mod auth;
mod helpers;
mod news;
mod news_client;
mod settings;
