use crate::{
    model::{
        artist::{ArtistId, artist_id_convert},
        error::{ArtistError, ArtistResult},
    },
    v1::{
        CreateArtistRequest, DeleteArtistRequest, GetArtistRequest, ListArtistsRequest,
        UpdateArtistRequest,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGetArtistRequest {
    pub id: ArtistId,
}

/// Pagination parameters are opaque at this layer and handed to the store as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedListArtistsRequest {
    pub limit: i32,
    pub cursor: String,
}

/// Only client controlled fields survive parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCreateArtistRequest {
    pub name: String,
    pub image: String,
}

/// The identifier stays raw, validating it is the first step of the update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUpdateArtistRequest {
    pub id: String,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDeleteArtistRequest {
    pub id: ArtistId,
}

impl ParsedGetArtistRequest {
    pub fn parse(request: GetArtistRequest) -> ArtistResult<Self> {
        Ok(Self {
            id: artist_id_convert::parse(&request.id)?,
        })
    }
}

impl ParsedListArtistsRequest {
    pub fn parse(request: ListArtistsRequest) -> ArtistResult<Self> {
        Ok(Self {
            limit: request.limit,
            cursor: request.cursor,
        })
    }
}

impl ParsedCreateArtistRequest {
    pub const ARTIST_FIELD_NAME: &str = "artist";

    pub fn parse(request: CreateArtistRequest) -> ArtistResult<Self> {
        let artist = request
            .artist
            .ok_or_else(|| ArtistError::required_field_missing(Self::ARTIST_FIELD_NAME))?;
        Ok(Self {
            name: artist.name,
            image: artist.image,
        })
    }
}

impl ParsedUpdateArtistRequest {
    pub const ARTIST_FIELD_NAME: &str = "artist";

    pub fn parse(request: UpdateArtistRequest) -> ArtistResult<Self> {
        let artist = request
            .artist
            .ok_or_else(|| ArtistError::required_field_missing(Self::ARTIST_FIELD_NAME))?;
        Ok(Self {
            id: artist.id,
            name: artist.name,
            image: artist.image,
        })
    }
}

impl ParsedDeleteArtistRequest {
    pub fn parse(request: DeleteArtistRequest) -> ArtistResult<Self> {
        Ok(Self {
            id: artist_id_convert::parse(&request.id)?,
        })
    }
}
