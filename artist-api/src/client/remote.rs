use std::fmt::{self, Debug, Formatter};

use tonic::{
    Request, Response, Status,
    metadata::MetadataMap,
    transport::{self, Channel},
};

use crate::client::ArtistClient;
use crate::v1::{
    Artist, CreateArtistRequest, DeleteArtistRequest, GetArtistRequest, ListArtistsRequest,
    ListArtistsResponse, UpdateArtistRequest, artist_service_client::ArtistServiceClient,
};

/// Artist client backed by a gRPC channel.
pub struct RemoteArtistClient {
    client: ArtistServiceClient<Channel>,
}

impl RemoteArtistClient {
    pub async fn connect(address: String) -> Result<Self, transport::Error> {
        Ok(RemoteArtistClient {
            client: ArtistServiceClient::connect(address).await?,
        })
    }

    pub fn new(channel: Channel) -> Self {
        RemoteArtistClient {
            client: ArtistServiceClient::new(channel),
        }
    }
}

fn with_metadata<T>(message: T, metadata: MetadataMap) -> Request<T> {
    let mut request = Request::new(message);
    *request.metadata_mut() = metadata;
    request
}

#[async_trait::async_trait]
impl ArtistClient for RemoteArtistClient {
    async fn list_artists(
        &self,
        request: ListArtistsRequest,
        metadata: MetadataMap,
    ) -> Result<Response<ListArtistsResponse>, Status> {
        let mut client = self.client.clone();
        client.list_artists(with_metadata(request, metadata)).await
    }

    async fn get_artist(
        &self,
        request: GetArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<Artist>, Status> {
        let mut client = self.client.clone();
        client.get_artist(with_metadata(request, metadata)).await
    }

    async fn create_artist(
        &self,
        request: CreateArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<Artist>, Status> {
        let mut client = self.client.clone();
        client.create_artist(with_metadata(request, metadata)).await
    }

    async fn update_artist(
        &self,
        request: UpdateArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<Artist>, Status> {
        let mut client = self.client.clone();
        client.update_artist(with_metadata(request, metadata)).await
    }

    async fn delete_artist(
        &self,
        request: DeleteArtistRequest,
        metadata: MetadataMap,
    ) -> Result<Response<()>, Status> {
        let mut client = self.client.clone();
        client.delete_artist(with_metadata(request, metadata)).await
    }
}

impl Debug for RemoteArtistClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteArtistClient").finish()
    }
}
