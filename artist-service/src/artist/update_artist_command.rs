use artist_api::model::{
    artist::{ArtistModel, artist_id_convert},
    error::ArtistError,
};

use super::{
    observer::{ArtistEvent, ArtistObserverArc},
    repository::ArtistRepositoryArc,
    stamper::MetadataStamperArc,
};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct UpdateArtistCommand {
    artist_repository: ArtistRepositoryArc,
    metadata_stamper: MetadataStamperArc,
    observer: ArtistObserverArc,
}

#[derive(Debug)]
pub struct UpdateArtistCommandInput<'a> {
    /// Unparsed identifier as received from the client.
    pub id: &'a str,
    pub name: &'a str,
    pub image: &'a str,
}

#[derive(Debug)]
pub struct UpdateArtistCommandResult {
    pub artist: ArtistModel,
}

impl UpdateArtistCommand {
    pub fn new(
        artist_repository: ArtistRepositoryArc,
        metadata_stamper: MetadataStamperArc,
        observer: ArtistObserverArc,
    ) -> Self {
        Self {
            artist_repository,
            metadata_stamper,
            observer,
        }
    }

    /// Replaces name and image of a stored artist.
    ///
    /// # Errors
    ///
    /// Fails with `INVALID_ID` before touching the store if the identifier is
    /// malformed, and with `NOT_FOUND` if no artist has it.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: UpdateArtistCommandInput<'_>,
    ) -> AppResult<UpdateArtistCommandResult> {
        let id = artist_id_convert::parse(input.id)?;

        let mut artist: ArtistModel = self
            .artist_repository
            .get_artist(&id)
            .await?
            .ok_or_else(|| ArtistError::not_found(&id))?
            .into();

        artist.name = input.name.into();
        artist.image = input.image.into();
        self.metadata_stamper.stamp(&mut artist.metadata);

        self.artist_repository.put_artist(artist.clone().into()).await?;
        self.observer.record(ArtistEvent::ArtistUpdated {
            artist_id: artist.id,
        });

        Ok(UpdateArtistCommandResult { artist })
    }
}
