//! Game ("jogo") operations.

use skinpro_client::FormPayload;
use tracing::instrument;

use crate::endpoints;
use crate::error::Result;
use crate::types::{Game, ImageAttachment, NewGame};

impl super::CatalogClient {
    /// List all games.
    #[instrument(skip(self))]
    pub async fn list_games(&self) -> Result<Vec<Game>> {
        let request = self.http.get(self.url(endpoints::GAME_LIST));
        let response = self.http.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Create a game, optionally attaching a logo and background image.
    #[instrument(skip(self, game, logo, background), fields(name = %game.name))]
    pub async fn create_game(
        &self,
        game: &NewGame,
        logo: Option<&ImageAttachment>,
        background: Option<&ImageAttachment>,
    ) -> Result<Game> {
        let request = self
            .http
            .post(self.url(endpoints::GAME_CREATE))
            .multipart(game_form(game, logo, background));
        let response = self.http.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Update a game by id, optionally replacing its images.
    #[instrument(skip(self, game, logo, background), fields(name = %game.name))]
    pub async fn update_game(
        &self,
        id: &str,
        game: &NewGame,
        logo: Option<&ImageAttachment>,
        background: Option<&ImageAttachment>,
    ) -> Result<Game> {
        let url = self.id_url(endpoints::GAME_UPDATE, id)?;
        let request = self.http.put(url).multipart(game_form(game, logo, background));
        let response = self.http.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Delete a game by id.
    #[instrument(skip(self))]
    pub async fn delete_game(&self, id: &str) -> Result<()> {
        let url = self.id_url(endpoints::GAME_DELETE, id)?;
        let request = self.http.delete(url);
        self.http.execute(request).await?;
        Ok(())
    }
}

/// Multipart fields for a game write, wire-named.
fn game_form(
    game: &NewGame,
    logo: Option<&ImageAttachment>,
    background: Option<&ImageAttachment>,
) -> FormPayload {
    let mut form = FormPayload::new().text("nome", game.name.clone());

    if let Some(logo) = logo {
        form = form.file(
            "logo",
            logo.file_name.clone(),
            logo.content_type.clone(),
            logo.bytes.clone(),
        );
    }
    if let Some(background) = background {
        form = form.file(
            "bg",
            background.file_name.clone(),
            background.content_type.clone(),
            background.bytes.clone(),
        );
    }

    form
}
