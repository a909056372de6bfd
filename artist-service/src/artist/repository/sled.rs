use std::{fmt, path::Path};

use artist_api::model::artist::ArtistId;
use async_trait::async_trait;

use crate::{
    artist::repository::{
        ArtistRecord, ArtistRecordList, ArtistRepository, decode_cursor, into_page,
    },
    config::PaginationConfig,
    error::AppResult,
};

const ARTISTS_TREE: &str = "artists";

/// Artist repository backed by an embedded sled database.
///
/// Records are JSON documents keyed by the 16 raw bytes of the artist UUID,
/// so the natural key order of the tree matches identifier order.
pub struct SledArtistRepository {
    artists: ::sled::Tree,
    pagination: PaginationConfig,
}

impl SledArtistRepository {
    /// Opens (or creates) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, pagination: PaginationConfig) -> AppResult<Self> {
        let db = ::sled::open(path)?;
        Self::from_db(&db, pagination)
    }

    /// Opens a database that is removed once dropped.
    pub fn temporary(pagination: PaginationConfig) -> AppResult<Self> {
        let db = ::sled::Config::new().temporary(true).open()?;
        Self::from_db(&db, pagination)
    }

    fn from_db(db: &::sled::Db, pagination: PaginationConfig) -> AppResult<Self> {
        Ok(Self {
            artists: db.open_tree(ARTISTS_TREE)?,
            pagination,
        })
    }

    fn decode(value: &[u8]) -> AppResult<ArtistRecord> {
        Ok(serde_json::from_slice(value)?)
    }
}

#[async_trait]
impl ArtistRepository for SledArtistRepository {
    async fn list_artists(&self, limit: i32, cursor: &str) -> AppResult<ArtistRecordList> {
        let start = decode_cursor(cursor)?;
        let page_size = self.pagination.page_size(limit);

        let entries = match start {
            Some(start) => self.artists.range(start.as_bytes().to_vec()..),
            None => self.artists.iter(),
        };
        let items = entries
            .take(page_size + 1)
            .map(|entry| {
                let (_, value) = entry?;
                Self::decode(&value)
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(into_page(items, page_size))
    }

    async fn get_artist(&self, id: &ArtistId) -> AppResult<Option<ArtistRecord>> {
        self.artists
            .get(id.as_bytes())?
            .map(|value| Self::decode(&value))
            .transpose()
    }

    async fn put_artist(&self, record: ArtistRecord) -> AppResult<()> {
        let value = serde_json::to_vec(&record)?;
        self.artists.insert(record.id.as_bytes(), value)?;
        self.artists.flush_async().await?;
        Ok(())
    }

    async fn delete_artist(&self, id: &ArtistId) -> AppResult<()> {
        self.artists.remove(id.as_bytes())?;
        self.artists.flush_async().await?;
        Ok(())
    }
}

impl fmt::Debug for SledArtistRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SledArtistRepository")
            .field("tree", &ARTISTS_TREE)
            .field("pagination", &self.pagination)
            .finish()
    }
}
