//! Artist gRPC Service
//!
//! Serves CRUD operations for artists over gRPC, backed by an in-memory or
//! sled store, and announces created artists on an in-process event bus.

use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use artist_api::v1::{FILE_DESCRIPTOR_SET, artist_service_server::ArtistServiceServer};
use artist_service::{
    artist::{
        notifier::{ArtistNotifierArc, broadcast::BroadcastArtistNotifier},
        observer::TracingArtistObserver,
        repository::open_artist_repository,
        stamper::SystemMetadataStamper,
    },
    config::{AppConfig, NotifierConfig},
    create_artist_service,
    error::AppResult,
    tracing::tracer::Tracer,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::get();

    Tracer::install(config)?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or("unknown"),
    );

    start(config).await?;

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let artist_repository = open_artist_repository(&config.database, config.pagination)?;

    let artist_notifier: ArtistNotifierArc = match &config.notifier {
        NotifierConfig::Broadcast(broadcast_config) => {
            let notifier = BroadcastArtistNotifier::new(broadcast_config.capacity);
            notifier.spawn_event_log();
            Arc::new(notifier)
        }
    };

    let artist_adapter = create_artist_service(
        artist_repository,
        artist_notifier,
        Arc::new(SystemMetadataStamper),
        Arc::new(TracingArtistObserver),
    );

    let grpc_server = Server::builder()
        .add_service(
            tonic_reflection::server::Builder::configure()
                .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
                // Some clients only work with v1alpha
                .build_v1alpha()?,
        )
        .add_service(ArtistServiceServer::new(artist_adapter));

    info!("gRPC server started at {}", config.server.grpc_address);

    grpc_server
        .serve_with_shutdown(config.server.grpc_address, async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutting down");
            }
        })
        .await?;

    Ok(())
}
