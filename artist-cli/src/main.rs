//! Command-line interface for the artist gRPC service.
//!
//! Supports every artist operation and prints either plain text or JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use tonic::metadata::MetadataMap;

use artist_api::{
    client::{ArtistClient, remote::RemoteArtistClient},
    model::{artist::ArtistModel, error::ArtistError},
    v1::{
        Artist, CreateArtistRequest, DeleteArtistRequest, GetArtistRequest, ListArtistsRequest,
        UpdateArtistRequest,
    },
};

/// Command-line interface configuration.
#[derive(Parser)]
#[command(name = "artist-cli")]
#[command(about = "A CLI tool for interacting with the artist gRPC service")]
#[command(version)]
pub struct Cli {
    /// The gRPC server address
    #[arg(long, short, env = "ARTIST_ADDRESS", default_value = "http://127.0.0.1:9000")]
    pub address: String,

    /// Print responses as JSON
    #[arg(long, short = 'J', env = "ARTIST_JSON")]
    pub json: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List artists one page at a time
    List {
        /// Page size, the server default is used when omitted
        #[arg(long, short, default_value_t = 0)]
        limit: i32,
        /// Cursor returned by a previous page
        #[arg(long, short, default_value = "")]
        cursor: String,
    },
    /// Get an artist by ID
    Get { id: String },
    /// Create a new artist
    Create {
        /// Artist name
        name: String,
        /// Image reference
        image: String,
    },
    /// Replace name and image of an existing artist
    Update {
        id: String,
        /// New name
        name: String,
        /// New image reference
        image: String,
    },
    /// Delete an artist
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = RemoteArtistClient::connect(cli.address.clone()).await?;

    if let Err(err) = handle_command(&client, cli.command, cli.json).await {
        if let Some(status) = err.downcast_ref::<tonic::Status>() {
            if let Some(artist_error) = ArtistError::from_status(status) {
                anyhow::bail!("{:?}: {artist_error}", status.code());
            }
        }
        return Err(err);
    }

    Ok(())
}

/// Runs a single command against the service.
///
/// # Errors
///
/// Returns an error if the gRPC call fails or the response is invalid.
async fn handle_command(
    client: &(dyn ArtistClient + Send + Sync),
    command: Commands,
    json: bool,
) -> Result<()> {
    let metadata = MetadataMap::new();

    match command {
        Commands::List { limit, cursor } => {
            let response = client
                .list_artists(ListArtistsRequest { limit, cursor }, metadata)
                .await?
                .into_inner();
            let artists = response
                .artists
                .into_iter()
                .map(ArtistModel::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "artists": artists,
                        "count": response.count,
                        "cursor": response.cursor,
                    }))?
                );
            } else {
                println!("Artists ({} on this page):", response.count);
                for artist in &artists {
                    println!("  - {}: {}", artist.id, artist.name);
                }
                if !response.cursor.is_empty() {
                    println!("Next page: --cursor {}", response.cursor);
                }
            }
        }

        Commands::Get { id } => {
            let artist = client
                .get_artist(GetArtistRequest { id }, metadata)
                .await?
                .into_inner();
            output_artist(artist, json)?;
        }

        Commands::Create { name, image } => {
            let request = CreateArtistRequest {
                artist: Some(Artist {
                    name,
                    image,
                    ..Default::default()
                }),
            };
            let artist = client.create_artist(request, metadata).await?.into_inner();
            output_artist(artist, json)?;
        }

        Commands::Update { id, name, image } => {
            let request = UpdateArtistRequest {
                artist: Some(Artist {
                    id,
                    name,
                    image,
                    metadata: None,
                }),
            };
            let artist = client.update_artist(request, metadata).await?.into_inner();
            output_artist(artist, json)?;
        }

        Commands::Delete { id } => {
            client
                .delete_artist(DeleteArtistRequest { id }, metadata)
                .await?;

            if json {
                println!("{{\"status\": \"deleted\"}}");
            } else {
                println!("Artist deleted successfully");
            }
        }
    }

    Ok(())
}

fn output_artist(artist: Artist, json: bool) -> Result<()> {
    let artist = ArtistModel::try_from(artist)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&artist)?);
        return Ok(());
    }

    println!("Artist:");
    println!("  ID: {}", artist.id);
    println!("  Name: {}", artist.name);
    println!("  Image: {}", artist.image);
    if let Some(create_time) = artist.metadata.create_time {
        println!("  Created: {}", create_time.format(&Rfc3339)?);
    }
    if let Some(update_time) = artist.metadata.update_time {
        println!("  Updated: {}", update_time.format(&Rfc3339)?);
    }

    Ok(())
}
