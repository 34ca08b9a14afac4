//! Wire types for the SkinPro catalog.
//!
//! Field names on the wire are the backend's Portuguese names (`nome`,
//! `descricao`, `jogoId`, ...); the Rust side uses English equivalents.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A cataloged skin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "jogoId", default)]
    pub game_id: String,
    /// Display name of the game, when the backend joins it in.
    #[serde(rename = "jogoNome", default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "raridade", default)]
    pub rarity: Rarity,
    #[serde(rename = "imgUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Fields for creating or updating a skin. Server-derived fields (id, image
/// URL) are absent; the image travels as a multipart attachment instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "jogoId")]
    pub game_id: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "raridade", default)]
    pub rarity: Rarity,
}

/// A game ("jogo") that skins belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "logoUrl", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(rename = "bgUrl", default, skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
}

/// Fields for creating or updating a game. Logo and background images travel
/// as multipart attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGame {
    #[serde(rename = "nome")]
    pub name: String,
}

/// Item rarity tiers, with the catalog's display color per tier.
///
/// Wire values are the backend's Portuguese names; anything unrecognized is
/// preserved in `Other` rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Other(String),
}

impl Rarity {
    /// The value sent over the wire.
    pub fn wire_name(&self) -> &str {
        match self {
            Rarity::Common => "comum",
            Rarity::Uncommon => "incomum",
            Rarity::Rare => "raro",
            Rarity::Epic => "epico",
            Rarity::Legendary => "lendario",
            Rarity::Mythic => "mitico",
            Rarity::Other(name) => name,
        }
    }

    /// Hex color used to display this tier.
    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#9E9E9E",
            Rarity::Uncommon => "#4CAF50",
            Rarity::Rare => "#2196F3",
            Rarity::Epic => "#9C27B0",
            Rarity::Legendary => "#FFEB3B",
            Rarity::Mythic => "#F44336",
            Rarity::Other(_) => "#FFFFFF",
        }
    }
}

impl From<String> for Rarity {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "comum" => Rarity::Common,
            "incomum" => Rarity::Uncommon,
            "raro" => Rarity::Rare,
            "epico" => Rarity::Epic,
            "lendario" => Rarity::Legendary,
            "mitico" => Rarity::Mythic,
            _ => Rarity::Other(value),
        }
    }
}

impl From<Rarity> for String {
    fn from(value: Rarity) -> Self {
        value.wire_name().to_string()
    }
}

/// A user-selected image: name, MIME type, and raw bytes, treated as an
/// opaque attachment for multipart payloads.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageAttachment {
    /// Create an attachment from a picker's name/type/bytes triple.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}
