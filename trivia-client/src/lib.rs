pub mod config;
pub mod http_api;
pub mod runner;
pub mod terminal;
