use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use artist_api::model::artist::ArtistModel;
use async_trait::async_trait;

use crate::{
    artist::notifier::ArtistNotifier,
    error::{AppError, AppResult},
};

/// Records published artists instead of delivering them.
#[derive(Debug, Default)]
pub struct MemoryArtistNotifier {
    published: Mutex<Vec<ArtistModel>>,
    failing: AtomicBool,
}

impl MemoryArtistNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following publish fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn published(&self) -> Vec<ArtistModel> {
        self.published
            .lock()
            .map(|published| published.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ArtistNotifier for MemoryArtistNotifier {
    async fn raise_artist_created_event(&self, artist: &ArtistModel) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Internal("notifier is unavailable".into()));
        }
        self.published
            .lock()
            .map_err(|_| AppError::Internal("notifier state is poisoned".into()))?
            .push(artist.clone());
        Ok(())
    }
}
