//! Structured events emitted by the artist service.
//!
//! The service never logs on its own. Everything worth reporting is handed to
//! an [`ArtistObserver`], which decides where it ends up.

use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

use artist_api::model::artist::ArtistId;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistEvent {
    ArtistsListed {
        count: usize,
        cursor: String,
    },
    ArtistFetchFailed {
        artist_id: ArtistId,
        error: String,
    },
    ArtistCreated {
        artist_id: ArtistId,
    },
    ArtistCreateFailed {
        artist_id: ArtistId,
        error: String,
    },
    ArtistUpdated {
        artist_id: ArtistId,
    },
    ArtistDeleted {
        artist_id: ArtistId,
    },
    /// A created artist was stored but its event could not be published.
    NotificationFailed {
        artist_id: ArtistId,
        error: String,
    },
}

pub trait ArtistObserver: Debug {
    fn record(&self, event: ArtistEvent);
}

pub type ArtistObserverArc = Arc<dyn ArtistObserver + Send + Sync>;

/// Forwards events to the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingArtistObserver;

impl ArtistObserver for TracingArtistObserver {
    fn record(&self, event: ArtistEvent) {
        match event {
            ArtistEvent::ArtistsListed { count, cursor } => {
                info!(count, cursor = %cursor, "Results found");
            }
            ArtistEvent::ArtistFetchFailed { artist_id, error } => {
                warn!(%artist_id, error = %error, "Failed to fetch artist");
            }
            ArtistEvent::ArtistCreated { artist_id } => {
                info!(%artist_id, "Artist created");
            }
            ArtistEvent::ArtistCreateFailed { artist_id, error } => {
                error!(%artist_id, error = %error, "Failed to create artist");
            }
            ArtistEvent::ArtistUpdated { artist_id } => {
                info!(%artist_id, "Artist updated");
            }
            ArtistEvent::ArtistDeleted { artist_id } => {
                info!(%artist_id, "Artist deleted");
            }
            ArtistEvent::NotificationFailed { artist_id, error } => {
                error!(%artist_id, error = %error, "Failed to raise artist created event");
            }
        }
    }
}

/// Keeps every recorded event.
#[derive(Debug, Default)]
pub struct MemoryArtistObserver {
    events: Mutex<Vec<ArtistEvent>>,
}

impl MemoryArtistObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ArtistEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ArtistObserver for MemoryArtistObserver {
    fn record(&self, event: ArtistEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
