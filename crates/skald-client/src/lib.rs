mod client;
mod config;
mod wire;

pub use client::LmClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
