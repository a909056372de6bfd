use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

use bytes::Bytes;
use prost::Message;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tonic::{Code, Status};

use crate::model::artist::ArtistId;
pub use crate::v1::errors::artist_error::ArtistErrorReason;
use crate::v1::errors::ArtistError as ProtoArtistError;

/// Domain error of the artist service.
///
/// Carries a machine readable reason that survives the trip through
/// `tonic::Status` details, so clients can tell a malformed identifier from a
/// missing artist.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct ArtistError {
    pub reason: ArtistErrorReason,
    pub message: Option<String>,
    pub metadata: Option<ArtistErrorMetadata>,
}

#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistErrorMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

pub type ArtistResult<T> = Result<T, ArtistError>;

pub const ARTIST_ERROR_DOMAIN: &str = "artist.setmaker.dev";

impl ArtistErrorMetadata {
    pub fn to_map(&self) -> BTreeMap<String, String> {
        serde_json::to_value(self)
            .and_then(serde_json::from_value)
            .unwrap_or_default()
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Option<Self> {
        let value = serde_json::to_value(map).ok()?;
        serde_json::from_value(value).ok()
    }
}

impl Display for ArtistErrorMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.to_map().fmt(f)
    }
}

impl Debug for ArtistErrorMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("ArtistErrorMetadata");

        macro_rules! debug_fields {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        d.field(stringify!($field), value);
                    }
                )*
            };
        }

        debug_fields![artist_id, field, cursor];

        d.finish()
    }
}

impl ArtistError {
    pub fn new(reason: ArtistErrorReason) -> Self {
        Self {
            reason,
            message: None,
            metadata: None,
        }
    }

    pub fn new_with_metadata(reason: ArtistErrorReason, metadata: ArtistErrorMetadata) -> Self {
        Self {
            reason,
            message: None,
            metadata: Some(metadata),
        }
    }

    pub fn invalid_id<S: ToString>(id: S) -> Self {
        Self::new_with_metadata(
            ArtistErrorReason::InvalidId,
            ArtistErrorMetadata {
                artist_id: Some(id.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn not_found(id: &ArtistId) -> Self {
        Self::new_with_metadata(
            ArtistErrorReason::NotFound,
            ArtistErrorMetadata {
                artist_id: Some(id.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn required_field_missing(field: &str) -> Self {
        Self::new_with_metadata(
            ArtistErrorReason::RequiredFieldMissing,
            ArtistErrorMetadata {
                field: Some(field.into()),
                ..Default::default()
            },
        )
    }

    pub fn invalid_cursor<S: ToString>(cursor: S) -> Self {
        Self::new_with_metadata(
            ArtistErrorReason::InvalidCursor,
            ArtistErrorMetadata {
                cursor: Some(cursor.to_string()),
                ..Default::default()
            },
        )
    }

    /// The gRPC status code this error is reported with.
    pub fn code(&self) -> Code {
        match self.reason {
            ArtistErrorReason::InvalidId
            | ArtistErrorReason::RequiredFieldMissing
            | ArtistErrorReason::InvalidCursor => Code::InvalidArgument,
            ArtistErrorReason::NotFound => Code::NotFound,
            ArtistErrorReason::Unspecified => Code::Unknown,
        }
    }

    /// Recovers the domain error from a status produced by the server.
    pub fn from_status(status: &Status) -> Option<Self> {
        let details = ProtoArtistError::decode(status.details()).ok()?;
        let reason = ArtistErrorReason::try_from(details.reason).ok()?;
        if reason == ArtistErrorReason::Unspecified {
            return None;
        }
        Some(Self {
            reason,
            message: None,
            metadata: ArtistErrorMetadata::from_map(details.metadata),
        })
    }
}

impl Display for ArtistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason.as_str_name())?;

        if let Some(message) = self.message.as_ref() {
            write!(f, ": {message}")?;
        } else if let Some(metadata) = self.metadata.as_ref() {
            write!(f, ": {metadata}")?;
        }

        Ok(())
    }
}

impl From<ArtistError> for Status {
    fn from(err: ArtistError) -> Self {
        let details = ProtoArtistError {
            reason: err.reason as i32,
            metadata: err.metadata.clone().unwrap_or_default().to_map(),
        };
        Status::with_details(
            err.code(),
            err.to_string(),
            Bytes::from(details.encode_to_vec()),
        )
    }
}
