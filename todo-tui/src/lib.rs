pub mod api;
pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod engine;
pub mod fetch;
pub mod logging;
pub mod runtime;
pub mod time_utils;
pub mod types;
pub mod ui;
