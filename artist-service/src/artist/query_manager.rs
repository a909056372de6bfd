use artist_api::model::{
    artist::{ArtistId, ArtistModel},
    error::ArtistError,
};

use super::{
    observer::{ArtistEvent, ArtistObserverArc},
    repository::ArtistRepositoryArc,
};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct ArtistQueryManager {
    artist_repository: ArtistRepositoryArc,
    observer: ArtistObserverArc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistListResult {
    pub artists: Vec<ArtistModel>,
    pub count: usize,
    pub cursor: String,
}

impl ArtistQueryManager {
    pub fn new(artist_repository: ArtistRepositoryArc, observer: ArtistObserverArc) -> Self {
        ArtistQueryManager {
            artist_repository,
            observer,
        }
    }

    /// Fetches a single artist.
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when no artist has the identifier, or the
    /// repository error unchanged.
    pub async fn query_single(&self, id: ArtistId) -> AppResult<ArtistModel> {
        let result = self
            .artist_repository
            .get_artist(&id)
            .await
            .and_then(|record| record.ok_or_else(|| ArtistError::not_found(&id).into()));

        match result {
            Ok(record) => Ok(record.into()),
            Err(err) => {
                self.observer.record(ArtistEvent::ArtistFetchFailed {
                    artist_id: id,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    pub async fn query_list(&self, limit: i32, cursor: &str) -> AppResult<ArtistListResult> {
        let artist_list = self.artist_repository.list_artists(limit, cursor).await?;
        let count = artist_list.items.len();

        self.observer.record(ArtistEvent::ArtistsListed {
            count,
            cursor: artist_list.cursor.clone(),
        });

        Ok(ArtistListResult {
            artists: artist_list.items.into_iter().map(Into::into).collect(),
            count,
            cursor: artist_list.cursor,
        })
    }
}
