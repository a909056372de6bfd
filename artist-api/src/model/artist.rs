use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use prost_types::Timestamp;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    model::error::{ArtistError, ArtistResult},
    v1::{Artist, Metadata},
};

/// Artist resource as seen by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistModel {
    pub id: ArtistId,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub metadata: MetadataModel,
}

/// Audit timestamps attached to every stored artist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataModel {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub update_time: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(pub Uuid);

impl ArtistId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse<S: AsRef<str>>(id: S) -> Option<Self> {
        Uuid::parse_str(id.as_ref()).ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Display for ArtistId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for ArtistId {
    type Err = ArtistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        artist_id_convert::parse(s)
    }
}

impl From<Uuid> for ArtistId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

pub mod artist_id_convert {
    use crate::model::{
        artist::ArtistId,
        error::{ArtistError, ArtistResult},
    };

    /// Parse an artist ID from a string.
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_ID` error if the string is not a UUID.
    pub fn parse<S: AsRef<str>>(id: S) -> ArtistResult<ArtistId> {
        ArtistId::parse(id.as_ref()).ok_or_else(|| ArtistError::invalid_id(id.as_ref()))
    }

    pub fn write(id: ArtistId) -> String {
        id.to_string()
    }
}

impl MetadataModel {
    pub fn is_stamped(&self) -> bool {
        self.create_time.is_some() && self.update_time.is_some()
    }
}

pub fn date_time_to_timestamp(date_time: OffsetDateTime) -> Timestamp {
    Timestamp {
        seconds: date_time.unix_timestamp(),
        nanos: date_time.nanosecond() as i32,
    }
}

/// Converts a protobuf timestamp, returning `None` when it is out of range.
pub fn timestamp_to_date_time(timestamp: &Timestamp) -> Option<OffsetDateTime> {
    let nanos = i128::from(timestamp.seconds) * 1_000_000_000 + i128::from(timestamp.nanos);
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

impl From<MetadataModel> for Metadata {
    fn from(metadata: MetadataModel) -> Self {
        Metadata {
            created_at: metadata.create_time.map(date_time_to_timestamp),
            updated_at: metadata.update_time.map(date_time_to_timestamp),
        }
    }
}

impl From<Metadata> for MetadataModel {
    fn from(metadata: Metadata) -> Self {
        MetadataModel {
            create_time: metadata.created_at.as_ref().and_then(timestamp_to_date_time),
            update_time: metadata.updated_at.as_ref().and_then(timestamp_to_date_time),
        }
    }
}

impl From<ArtistModel> for Artist {
    fn from(artist: ArtistModel) -> Self {
        Artist {
            id: artist_id_convert::write(artist.id),
            name: artist.name,
            image: artist.image,
            metadata: Some(artist.metadata.into()),
        }
    }
}

impl TryFrom<Artist> for ArtistModel {
    type Error = ArtistError;

    fn try_from(artist: Artist) -> ArtistResult<Self> {
        Ok(ArtistModel {
            id: artist_id_convert::parse(&artist.id)?,
            name: artist.name,
            image: artist.image,
            metadata: artist.metadata.map(Into::into).unwrap_or_default(),
        })
    }
}
