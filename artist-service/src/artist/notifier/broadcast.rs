use artist_api::model::artist::ArtistModel;
use async_trait::async_trait;
use tokio::{
    sync::broadcast::{self, Receiver, Sender, error::RecvError},
    task::JoinHandle,
};
use tracing::{info, warn};

use crate::{
    artist::notifier::{ArtistCreatedEvent, ArtistNotifier},
    error::{AppError, AppResult},
};

/// In-process event bus for artist events.
#[derive(Debug, Clone)]
pub struct BroadcastArtistNotifier {
    sender: Sender<ArtistCreatedEvent>,
}

impl BroadcastArtistNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        BroadcastArtistNotifier { sender }
    }

    pub fn subscribe(&self) -> Receiver<ArtistCreatedEvent> {
        self.sender.subscribe()
    }

    /// Spawns a subscriber that logs every event until the notifier is dropped.
    pub fn spawn_event_log(&self) -> JoinHandle<()> {
        let mut receiver = self.subscribe();
        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => info!(
                        artist_id = %event.artist.id,
                        occurred_at = %event.occurred_at,
                        "Artist created event received"
                    ),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Artist event subscriber lagged behind");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}

#[async_trait]
impl ArtistNotifier for BroadcastArtistNotifier {
    async fn raise_artist_created_event(&self, artist: &ArtistModel) -> AppResult<()> {
        self.sender
            .send(ArtistCreatedEvent::new(artist.clone()))
            .map_err(|_| {
                AppError::Internal(format!("no subscribers for artist `{}`", artist.id).into())
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use artist_api::model::artist::{ArtistId, MetadataModel};

    use super::*;

    fn artist() -> ArtistModel {
        ArtistModel {
            id: ArtistId::generate(),
            name: "Bonobo".into(),
            image: "bonobo.png".into(),
            metadata: MetadataModel::default(),
        }
    }

    #[tokio::test]
    async fn deliver_to_subscribers() {
        let notifier = BroadcastArtistNotifier::new(4);
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();
        let artist = artist();

        notifier.raise_artist_created_event(&artist).await.unwrap();

        assert_eq!(first.recv().await.unwrap().artist, artist);
        assert_eq!(second.recv().await.unwrap().artist, artist);
    }

    #[tokio::test]
    async fn fail_without_subscribers() {
        let notifier = BroadcastArtistNotifier::new(4);
        assert!(matches!(
            notifier.raise_artist_created_event(&artist()).await,
            Err(AppError::Internal(_))
        ));
    }
}
