//! Item (skin) operations.

use skinpro_client::FormPayload;
use tracing::instrument;

use crate::endpoints;
use crate::error::Result;
use crate::types::{ImageAttachment, Item, NewItem};

impl super::CatalogClient {
    /// List all cataloged items.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let request = self.http.get(self.url(endpoints::ITEM_LIST));
        let response = self.http.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Create an item, optionally attaching an image.
    #[instrument(skip(self, item, image), fields(name = %item.name))]
    pub async fn create_item(
        &self,
        item: &NewItem,
        image: Option<&ImageAttachment>,
    ) -> Result<Item> {
        let request = self
            .http
            .post(self.url(endpoints::ITEM_CREATE))
            .multipart(item_form(item, image));
        let response = self.http.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Update an item by id, optionally replacing its image.
    #[instrument(skip(self, item, image), fields(name = %item.name))]
    pub async fn update_item(
        &self,
        id: &str,
        item: &NewItem,
        image: Option<&ImageAttachment>,
    ) -> Result<Item> {
        let url = self.id_url(endpoints::ITEM_UPDATE, id)?;
        let request = self.http.put(url).multipart(item_form(item, image));
        let response = self.http.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Delete an item by id.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        let url = self.id_url(endpoints::ITEM_DELETE, id)?;
        let request = self.http.delete(url);
        self.http.execute(request).await?;
        Ok(())
    }
}

/// Multipart fields for an item write, wire-named.
fn item_form(item: &NewItem, image: Option<&ImageAttachment>) -> FormPayload {
    let mut form = FormPayload::new()
        .text("nome", item.name.clone())
        .text("descricao", item.description.clone())
        .text("jogoId", item.game_id.clone())
        .text("categoria", item.category.clone())
        .text("raridade", item.rarity.wire_name().to_string());

    if let Some(image) = image {
        form = form.file(
            "image",
            image.file_name.clone(),
            image.content_type.clone(),
            image.bytes.clone(),
        );
    }

    form
}
