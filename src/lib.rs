//! Client library and CLI plumbing for https://pacifices.cloud hosted servers.
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

pub use client::{ServerClient, Verb};
pub use config::Config;
pub use error::ClientError;
pub use models::server::ServerSpec;
