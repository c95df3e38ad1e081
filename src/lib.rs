// Mercado Libre SDK - library root

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
mod http;
pub mod response;
pub mod sites;

pub use client::{MeliClient, MeliClientBuilder, TokenState};
pub use config::Config;
pub use error::SdkError;
pub use response::ApiResponse;

// Re-export for callers using the explicit-method entry point
pub use reqwest::Method;
