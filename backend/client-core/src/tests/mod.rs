mod app;
mod config;
mod render;
