//! # skinpro-client
//!
//! Core HTTP client infrastructure for the SkinPro API.
//!
//! This crate provides the foundational HTTP client with:
//! - Automatic retry with exponential backoff, tracked per URL
//! - Availability probing for connection-level failures
//! - Payload-shape header normalization (JSON vs. multipart form data)
//! - Cache-busting query timestamps
//! - Connection pooling and request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Application Layer              │
//! │                (skinpro-rest)               │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │                 HttpClient                  │
//! │  - Raw HTTP with retry and probing          │
//! │  - Request building and normalization       │
//! │  - Response handling                        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use skinpro_client::{ClientConfig, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), skinpro_client::Error> {
//!     let client = HttpClient::new(ClientConfig::default())?;
//!
//!     let items: serde_json::Value = client
//!         .execute_json(client.get("https://skinpro.example.com/item/list"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod multipart;
mod request;
mod response;
mod retry;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use multipart::{FilePart, FormPayload};
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;
pub use retry::{BackoffStrategy, RetryConfig, RetryLedger};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("skinpro-api/", env!("CARGO_PKG_VERSION"));
