//! # skinpro-rest
//!
//! SkinPro catalog API client: item and game CRUD with image upload.
//!
//! ## Features
//!
//! - **Item CRUD** - List, create, update, and delete cataloged skins
//! - **Game CRUD** - The same for the games skins belong to
//! - **Image upload** - Writes go out as multipart form data with optional
//!   image attachments
//! - **Rarity tiers** - Typed rarity values with the catalog's display colors
//!
//! ## Example
//!
//! ```rust,ignore
//! use skinpro_rest::{CatalogClient, ImageAttachment, NewItem, Rarity};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), skinpro_rest::Error> {
//!     let client = CatalogClient::new("https://skinpro.example.com")?;
//!
//!     let items = client.list_items().await?;
//!     println!("{} items cataloged", items.len());
//!
//!     let new_item = NewItem {
//!         name: "AWP Dragon Lore".into(),
//!         description: "Classic sniper skin".into(),
//!         game_id: "7".into(),
//!         category: "sniper".into(),
//!         rarity: Rarity::Legendary,
//!     };
//!     let image = ImageAttachment::new("lore.png", "image/png", image_bytes);
//!     let created = client.create_item(&new_item, Some(&image)).await?;
//!
//!     client.delete_item(&created.id).await?;
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::{Error, Result};
pub use types::{Game, ImageAttachment, Item, NewGame, NewItem, Rarity};

// Re-export skinpro-client types that users might need
pub use skinpro_client::{ClientConfig, ClientConfigBuilder, RetryConfig};
