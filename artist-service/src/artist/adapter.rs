use artist_api::{
    model::artist_service::{
        ParsedCreateArtistRequest, ParsedDeleteArtistRequest, ParsedGetArtistRequest,
        ParsedListArtistsRequest, ParsedUpdateArtistRequest,
    },
    v1::{
        Artist, CreateArtistRequest, DeleteArtistRequest, GetArtistRequest, ListArtistsRequest,
        ListArtistsResponse, UpdateArtistRequest, artist_service_server::ArtistService,
    },
};
use tonic::{Request, Response, Status};

use super::{
    create_artist_command::{CreateArtistCommand, CreateArtistCommandInput},
    delete_artist_command::DeleteArtistCommand,
    query_manager::ArtistQueryManager,
    update_artist_command::{UpdateArtistCommand, UpdateArtistCommandInput},
};

/// gRPC front of the artist service.
///
/// Holds only shared collaborator handles, so a single adapter serves any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct ArtistAdapter {
    artist_query_manager: ArtistQueryManager,
    create_artist_command: CreateArtistCommand,
    update_artist_command: UpdateArtistCommand,
    delete_artist_command: DeleteArtistCommand,
}

impl ArtistAdapter {
    pub fn new(
        artist_query_manager: ArtistQueryManager,
        create_artist_command: CreateArtistCommand,
        update_artist_command: UpdateArtistCommand,
        delete_artist_command: DeleteArtistCommand,
    ) -> Self {
        ArtistAdapter {
            artist_query_manager,
            create_artist_command,
            update_artist_command,
            delete_artist_command,
        }
    }
}

#[tonic::async_trait]
impl ArtistService for ArtistAdapter {
    #[tracing::instrument(skip(self))]
    async fn list_artists(
        &self,
        request: Request<ListArtistsRequest>,
    ) -> Result<Response<ListArtistsResponse>, Status> {
        let request = ParsedListArtistsRequest::parse(request.into_inner())?;

        let result = self
            .artist_query_manager
            .query_list(request.limit, &request.cursor)
            .await?;

        Ok(Response::new(ListArtistsResponse {
            count: i32::try_from(result.count).unwrap_or(i32::MAX),
            artists: result.artists.into_iter().map(Into::into).collect(),
            cursor: result.cursor,
        }))
    }

    #[tracing::instrument(skip(self))]
    async fn get_artist(
        &self,
        request: Request<GetArtistRequest>,
    ) -> Result<Response<Artist>, Status> {
        let request = ParsedGetArtistRequest::parse(request.into_inner())?;

        let artist = self.artist_query_manager.query_single(request.id).await?;

        Ok(Response::new(artist.into()))
    }

    #[tracing::instrument(skip(self))]
    async fn create_artist(
        &self,
        request: Request<CreateArtistRequest>,
    ) -> Result<Response<Artist>, Status> {
        let request = ParsedCreateArtistRequest::parse(request.into_inner())?;

        let result = self
            .create_artist_command
            .execute(CreateArtistCommandInput {
                name: &request.name,
                image: &request.image,
            })
            .await?;

        Ok(Response::new(result.artist.into()))
    }

    #[tracing::instrument(skip(self))]
    async fn update_artist(
        &self,
        request: Request<UpdateArtistRequest>,
    ) -> Result<Response<Artist>, Status> {
        let request = ParsedUpdateArtistRequest::parse(request.into_inner())?;

        let result = self
            .update_artist_command
            .execute(UpdateArtistCommandInput {
                id: &request.id,
                name: &request.name,
                image: &request.image,
            })
            .await?;

        Ok(Response::new(result.artist.into()))
    }

    #[tracing::instrument(skip(self))]
    async fn delete_artist(
        &self,
        request: Request<DeleteArtistRequest>,
    ) -> Result<Response<()>, Status> {
        let request = ParsedDeleteArtistRequest::parse(request.into_inner())?;

        self.delete_artist_command.execute(request.id).await?;

        Ok(Response::new(()))
    }
}
