use artist_api::model::artist::{ArtistId, ArtistModel, MetadataModel};

use super::{
    notifier::ArtistEventDispatcher,
    observer::{ArtistEvent, ArtistObserverArc},
    repository::ArtistRepositoryArc,
    stamper::MetadataStamperArc,
};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct CreateArtistCommand {
    artist_repository: ArtistRepositoryArc,
    metadata_stamper: MetadataStamperArc,
    event_dispatcher: ArtistEventDispatcher,
    observer: ArtistObserverArc,
}

#[derive(Debug)]
pub struct CreateArtistCommandInput<'a> {
    pub name: &'a str,
    pub image: &'a str,
}

#[derive(Debug)]
pub struct CreateArtistCommandResult {
    pub artist: ArtistModel,
}

impl CreateArtistCommand {
    pub fn new(
        artist_repository: ArtistRepositoryArc,
        metadata_stamper: MetadataStamperArc,
        event_dispatcher: ArtistEventDispatcher,
        observer: ArtistObserverArc,
    ) -> Self {
        Self {
            artist_repository,
            metadata_stamper,
            event_dispatcher,
            observer,
        }
    }

    /// Stores a new artist under a freshly generated identifier.
    ///
    /// The "artist created" event is published only after the artist has
    /// been stored, and failing to publish it does not fail the command.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        input: CreateArtistCommandInput<'_>,
    ) -> AppResult<CreateArtistCommandResult> {
        let mut metadata = MetadataModel::default();
        self.metadata_stamper.stamp(&mut metadata);

        let artist = ArtistModel {
            id: ArtistId::generate(),
            name: input.name.into(),
            image: input.image.into(),
            metadata,
        };

        if let Err(err) = self.artist_repository.put_artist(artist.clone().into()).await {
            self.observer.record(ArtistEvent::ArtistCreateFailed {
                artist_id: artist.id,
                error: err.to_string(),
            });
            return Err(err);
        }
        self.observer.record(ArtistEvent::ArtistCreated {
            artist_id: artist.id,
        });

        self.event_dispatcher.dispatch_artist_created(&artist).await;

        Ok(CreateArtistCommandResult { artist })
    }
}
