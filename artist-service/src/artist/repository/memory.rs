use std::{collections::BTreeMap, sync::Arc};

use artist_api::model::artist::ArtistId;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    artist::repository::{
        ArtistRecord, ArtistRecordList, ArtistRepository, decode_cursor, into_page,
    },
    config::PaginationConfig,
    error::AppResult,
};

/// In-memory implementation of the artist repository.
#[derive(Debug)]
pub struct MemoryArtistRepository {
    artists: Arc<RwLock<BTreeMap<ArtistId, ArtistRecord>>>,
    pagination: PaginationConfig,
}

impl Default for MemoryArtistRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryArtistRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self::with_pagination(PaginationConfig::default())
    }

    pub fn with_pagination(pagination: PaginationConfig) -> Self {
        Self {
            artists: Arc::new(RwLock::new(BTreeMap::new())),
            pagination,
        }
    }

    /// Creates a new memory repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `artists` - Initial list of artists to populate the repository
    pub fn with_data(artists: Vec<ArtistRecord>) -> Self {
        Self {
            artists: Arc::new(RwLock::new(
                artists
                    .into_iter()
                    .map(|artist| (artist.id, artist))
                    .collect(),
            )),
            pagination: PaginationConfig::default(),
        }
    }
}

#[async_trait]
impl ArtistRepository for MemoryArtistRepository {
    async fn list_artists(&self, limit: i32, cursor: &str) -> AppResult<ArtistRecordList> {
        let start = decode_cursor(cursor)?;
        let page_size = self.pagination.page_size(limit);

        let artists = self.artists.read().await;
        let items: Vec<_> = match start {
            Some(start) => artists
                .range(start..)
                .take(page_size + 1)
                .map(|(_, artist)| artist.clone())
                .collect(),
            None => artists.values().take(page_size + 1).cloned().collect(),
        };

        Ok(into_page(items, page_size))
    }

    async fn get_artist(&self, id: &ArtistId) -> AppResult<Option<ArtistRecord>> {
        let artists = self.artists.read().await;
        Ok(artists.get(id).cloned())
    }

    async fn put_artist(&self, record: ArtistRecord) -> AppResult<()> {
        self.artists.write().await.insert(record.id, record);
        Ok(())
    }

    async fn delete_artist(&self, id: &ArtistId) -> AppResult<()> {
        self.artists.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ArtistRecord {
        ArtistRecord {
            id: ArtistId::generate(),
            name: name.into(),
            image: format!("{name}.png"),
            create_time: None,
            update_time: None,
        }
    }

    #[tokio::test]
    async fn put_get_delete() {
        let repository = MemoryArtistRepository::new();
        let artist = record("Radiohead");

        repository.put_artist(artist.clone()).await.unwrap();
        assert_eq!(
            repository.get_artist(&artist.id).await.unwrap(),
            Some(artist.clone())
        );

        let mut renamed = artist.clone();
        renamed.name = "On A Friday".into();
        repository.put_artist(renamed.clone()).await.unwrap();
        assert_eq!(repository.get_artist(&artist.id).await.unwrap(), Some(renamed));

        repository.delete_artist(&artist.id).await.unwrap();
        assert_eq!(repository.get_artist(&artist.id).await.unwrap(), None);
        repository.delete_artist(&artist.id).await.unwrap();
    }

    #[tokio::test]
    async fn paginate() {
        let mut artists: Vec<_> = ["Air", "Blur", "Cream", "Doves", "Eels"]
            .into_iter()
            .map(record)
            .collect();
        artists.sort_by_key(|artist| artist.id);
        let repository = MemoryArtistRepository::with_data(artists.clone());

        let first = repository.list_artists(2, "").await.unwrap();
        assert_eq!(first.items, artists[..2]);
        assert_eq!(first.cursor, artists[2].id.to_string());

        let second = repository.list_artists(2, &first.cursor).await.unwrap();
        assert_eq!(second.items, artists[2..4]);

        let last = repository.list_artists(2, &second.cursor).await.unwrap();
        assert_eq!(last.items, artists[4..]);
        assert!(last.cursor.is_empty());

        let all = repository.list_artists(0, "").await.unwrap();
        assert_eq!(all.items.len(), 5);
        assert!(all.cursor.is_empty());
    }

    #[tokio::test]
    async fn reject_malformed_cursor() {
        let repository = MemoryArtistRepository::new();
        assert!(repository.list_artists(10, "page-2").await.is_err());
    }
}
