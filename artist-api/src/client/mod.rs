//! Artist client implementations.
//!
//! This module provides the artist client trait and its remote implementation
//! for talking to a running artist service.

use std::{fmt::Debug, sync::Arc};
use tonic::{Response, Status, metadata::MetadataMap};

use crate::v1::{
    Artist, CreateArtistRequest, DeleteArtistRequest, GetArtistRequest, ListArtistsRequest,
    ListArtistsResponse, UpdateArtistRequest,
};

pub mod remote;

#[async_trait::async_trait]
pub trait ArtistClient: Debug {
    async fn list_artists(
        &self,
        request: ListArtistsRequest,
        metadata: MetadataMap,
    ) -> Result<Response<ListArtistsResponse>, Status>;

    async fn get_artist(
        &self,
        request: GetArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<Artist>, Status>;

    async fn create_artist(
        &self,
        request: CreateArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<Artist>, Status>;

    async fn update_artist(
        &self,
        request: UpdateArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<Artist>, Status>;

    async fn delete_artist(
        &self,
        request: DeleteArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<()>, Status>;
}

pub type ArtistClientArc = Arc<dyn ArtistClient + Send + Sync>;
