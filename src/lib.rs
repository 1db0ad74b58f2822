pub mod app;
pub mod cache;
pub mod client;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
