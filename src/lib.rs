//! # skinpro-api
//!
//! Client library for the SkinPro skin catalog REST API.
//!
//! The backend catalogs cosmetic "skins" and the games they belong to;
//! this library centralizes all outgoing HTTP to it, with retry and
//! backoff for transient failures, availability probing, and multipart
//! image upload.
//!
//! ## Crates
//!
//! - **skinpro-client** - Core HTTP client infrastructure: per-URL retry
//!   with exponential backoff, availability probing, header normalization,
//!   cache-busting
//! - **skinpro-rest** - Catalog operations: item and game CRUD, image upload
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use skinpro_api::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new("https://skinpro.example.com")?;
//!
//!     for item in client.list_items().await? {
//!         println!("{} [{}]", item.name, item.rarity.wire_name());
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export both crates for convenient access
pub use skinpro_client as client;
pub use skinpro_rest as rest;

// Re-export commonly used types at the top level
pub use skinpro_client::{ClientConfig, HttpClient, RetryConfig};
pub use skinpro_rest::{CatalogClient, Game, ImageAttachment, Item, NewGame, NewItem, Rarity};
