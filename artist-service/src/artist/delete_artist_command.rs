use artist_api::model::artist::ArtistId;

use super::{
    observer::{ArtistEvent, ArtistObserverArc},
    repository::ArtistRepositoryArc,
};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct DeleteArtistCommand {
    artist_repository: ArtistRepositoryArc,
    observer: ArtistObserverArc,
}

impl DeleteArtistCommand {
    pub fn new(artist_repository: ArtistRepositoryArc, observer: ArtistObserverArc) -> Self {
        Self {
            artist_repository,
            observer,
        }
    }

    /// Deleting an artist that does not exist succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: ArtistId) -> AppResult<()> {
        self.artist_repository.delete_artist(&id).await?;
        self.observer.record(ArtistEvent::ArtistDeleted { artist_id: id });
        Ok(())
    }
}
