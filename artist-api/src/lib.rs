//! Artist API definitions.
//!
//! This crate holds the protobuf contract of the artist catalog together with
//! the domain model shared by the server and its clients:
//!
//! - Generated messages and gRPC stubs under [`v1`]
//! - Model types for artists, identifiers and audit metadata
//! - Request parsing and the artist domain error
//!
//! # Features
//!
//! - `server`: Generates the gRPC server trait
//! - `client`: Enables client functionality for connecting to remote services

#[cfg(feature = "client")]
pub mod client;
pub mod model;

#[allow(
    unused_qualifications,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags
)]
pub mod v1 {
    tonic::include_proto!("artist.v1");

    pub use prost_types::Timestamp;

    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("artist_v1");

    pub mod errors {
        tonic::include_proto!("artist.v1.errors");
    }
}
