pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod router;
pub mod state;
