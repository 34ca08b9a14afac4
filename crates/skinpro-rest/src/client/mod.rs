//! SkinPro catalog API client.
//!
//! This client wraps `HttpClient` from `skinpro-client` and provides typed
//! methods for the catalog's item and game endpoints.

use skinpro_client::{ClientConfig, HttpClient};

use crate::error::{Error, Result};

mod games;
mod items;

/// SkinPro catalog API client.
///
/// Provides typed methods for both resource kinds:
/// - Item (skin) CRUD with optional image upload
/// - Game ("jogo") CRUD with optional logo and background upload
///
/// # Example
///
/// ```rust,ignore
/// use skinpro_rest::CatalogClient;
///
/// let client = CatalogClient::new("https://skinpro.example.com")?;
///
/// let items = client.list_items().await?;
/// client.delete_item(&items[0].id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new catalog client with custom HTTP configuration.
    pub fn with_config(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self::from_http(base_url, http))
    }

    /// Create a catalog client from an existing HTTP client.
    pub fn from_http(base_url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an endpoint path.
    ///
    /// Full URLs pass through unchanged; anything else is joined onto the
    /// base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Build a `resource/action/{id}` URL, rejecting ids that would produce
    /// a malformed path segment.
    pub(crate) fn id_url(&self, path: &str, id: &str) -> Result<String> {
        if !is_valid_id(id) {
            return Err(Error::InvalidId(id.to_string()));
        }
        Ok(self.url(&format!("{path}/{id}")))
    }
}

/// Record ids are opaque tokens from the backend; anything outside this
/// charset would mangle the URL path.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}
