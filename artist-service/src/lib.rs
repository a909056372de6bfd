pub mod artist;
pub mod config;
pub mod error;
pub mod tracing;

use artist::{
    adapter::ArtistAdapter,
    create_artist_command::CreateArtistCommand,
    delete_artist_command::DeleteArtistCommand,
    notifier::{ArtistEventDispatcher, ArtistNotifierArc},
    observer::ArtistObserverArc,
    query_manager::ArtistQueryManager,
    repository::ArtistRepositoryArc,
    stamper::MetadataStamperArc,
    update_artist_command::UpdateArtistCommand,
};

/// Wires the artist commands and queries around shared collaborators.
pub fn create_artist_service(
    artist_repository: ArtistRepositoryArc,
    artist_notifier: ArtistNotifierArc,
    metadata_stamper: MetadataStamperArc,
    observer: ArtistObserverArc,
) -> ArtistAdapter {
    let event_dispatcher = ArtistEventDispatcher::new(artist_notifier, observer.clone());

    let artist_query_manager = ArtistQueryManager::new(artist_repository.clone(), observer.clone());
    let create_artist_command = CreateArtistCommand::new(
        artist_repository.clone(),
        metadata_stamper.clone(),
        event_dispatcher,
        observer.clone(),
    );
    let update_artist_command = UpdateArtistCommand::new(
        artist_repository.clone(),
        metadata_stamper,
        observer.clone(),
    );
    let delete_artist_command = DeleteArtistCommand::new(artist_repository, observer);

    ArtistAdapter::new(
        artist_query_manager,
        create_artist_command,
        update_artist_command,
        delete_artist_command,
    )
}
