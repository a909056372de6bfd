use std::{fmt::Debug, sync::Arc};

use artist_api::model::{
    artist::{ArtistId, ArtistModel, MetadataModel},
    error::ArtistError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    config::{DatabaseConfig, PaginationConfig},
    error::AppResult,
};

pub mod memory;
pub mod sled;

/// Stored shape of an artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub id: ArtistId,
    pub name: String,
    pub image: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub update_time: Option<OffsetDateTime>,
}

/// One page of artists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRecordList {
    pub items: Vec<ArtistRecord>,
    /// Empty when there are no further pages.
    pub cursor: String,
}

/// Persistence for artists.
///
/// Absence is reported as `Ok(None)` from `get_artist`, never as an error.
/// Listing is ordered by identifier and the cursor is opaque to callers.
#[async_trait]
pub trait ArtistRepository: Debug {
    async fn list_artists(&self, limit: i32, cursor: &str) -> AppResult<ArtistRecordList>;
    async fn get_artist(&self, id: &ArtistId) -> AppResult<Option<ArtistRecord>>;
    /// Inserts or replaces the record with the same identifier.
    async fn put_artist(&self, record: ArtistRecord) -> AppResult<()>;
    /// Removing an absent artist succeeds.
    async fn delete_artist(&self, id: &ArtistId) -> AppResult<()>;
}

pub type ArtistRepositoryArc = Arc<dyn ArtistRepository + Send + Sync>;

/// Opens the repository selected by the database configuration.
///
/// # Errors
///
/// Returns a storage error if the sled database cannot be opened.
pub fn open_artist_repository(
    config: &DatabaseConfig,
    pagination: PaginationConfig,
) -> AppResult<ArtistRepositoryArc> {
    Ok(match config {
        DatabaseConfig::Memory => Arc::new(memory::MemoryArtistRepository::with_pagination(
            pagination,
        )),
        DatabaseConfig::Sled(sled_config) => Arc::new(sled::SledArtistRepository::open(
            &sled_config.path,
            pagination,
        )?),
    })
}

/// Decodes a list cursor into the identifier the next page starts at.
pub(crate) fn decode_cursor(cursor: &str) -> AppResult<Option<ArtistId>> {
    if cursor.is_empty() {
        return Ok(None);
    }
    ArtistId::parse(cursor)
        .map(Some)
        .ok_or_else(|| ArtistError::invalid_cursor(cursor).into())
}

pub(crate) fn encode_cursor(next: Option<&ArtistRecord>) -> String {
    next.map(|record| record.id.to_string()).unwrap_or_default()
}

/// Splits a page fetched with one extra look-ahead item.
pub(crate) fn into_page(mut items: Vec<ArtistRecord>, page_size: usize) -> ArtistRecordList {
    let next = if items.len() > page_size {
        items.pop()
    } else {
        None
    };
    ArtistRecordList {
        cursor: encode_cursor(next.as_ref()),
        items,
    }
}

impl From<ArtistModel> for ArtistRecord {
    fn from(artist: ArtistModel) -> Self {
        ArtistRecord {
            id: artist.id,
            name: artist.name,
            image: artist.image,
            create_time: artist.metadata.create_time,
            update_time: artist.metadata.update_time,
        }
    }
}

impl From<ArtistRecord> for ArtistModel {
    fn from(record: ArtistRecord) -> Self {
        ArtistModel {
            id: record.id,
            name: record.name,
            image: record.image,
            metadata: MetadataModel {
                create_time: record.create_time,
                update_time: record.update_time,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use artist_api::model::error::ArtistErrorReason;

    use super::*;
    use crate::error::AppError;

    fn record(id: ArtistId) -> ArtistRecord {
        ArtistRecord {
            id,
            name: String::new(),
            image: String::new(),
            create_time: None,
            update_time: None,
        }
    }

    #[test]
    fn cursor() {
        assert_eq!(decode_cursor("").unwrap(), None);

        let id = ArtistId::generate();
        assert_eq!(decode_cursor(&id.to_string()).unwrap(), Some(id));

        match decode_cursor("garbage") {
            Err(AppError::Artist(err)) => assert_eq!(err.reason, ArtistErrorReason::InvalidCursor),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn page_split() {
        let ids: Vec<_> = (0..3).map(|_| ArtistId::generate()).collect();

        let page = into_page(ids.iter().copied().map(record).collect(), 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.cursor, ids[2].to_string());

        let page = into_page(ids.iter().copied().map(record).collect(), 3);
        assert_eq!(page.items.len(), 3);
        assert!(page.cursor.is_empty());
    }
}
