use std::{fmt::Debug, sync::Arc};

use artist_api::model::artist::ArtistModel;
use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    artist::observer::{ArtistEvent, ArtistObserverArc},
    error::AppResult,
};

pub mod broadcast;
pub mod memory;

/// Published after an artist has been stored for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCreatedEvent {
    pub artist: ArtistModel,
    pub occurred_at: OffsetDateTime,
}

impl ArtistCreatedEvent {
    pub fn new(artist: ArtistModel) -> Self {
        ArtistCreatedEvent {
            artist,
            occurred_at: OffsetDateTime::now_utc(),
        }
    }
}

#[async_trait]
pub trait ArtistNotifier: Debug {
    async fn raise_artist_created_event(&self, artist: &ArtistModel) -> AppResult<()>;
}

pub type ArtistNotifierArc = Arc<dyn ArtistNotifier + Send + Sync>;

/// Best-effort delivery of artist events.
///
/// Failures never reach the caller, they are reported to the observer only.
#[derive(Debug, Clone)]
pub struct ArtistEventDispatcher {
    notifier: ArtistNotifierArc,
    observer: ArtistObserverArc,
}

impl ArtistEventDispatcher {
    pub fn new(notifier: ArtistNotifierArc, observer: ArtistObserverArc) -> Self {
        ArtistEventDispatcher { notifier, observer }
    }

    pub async fn dispatch_artist_created(&self, artist: &ArtistModel) {
        if let Err(err) = self.notifier.raise_artist_created_event(artist).await {
            self.observer.record(ArtistEvent::NotificationFailed {
                artist_id: artist.id,
                error: err.to_string(),
            });
        }
    }
}
