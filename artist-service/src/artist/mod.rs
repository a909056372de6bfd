//! Artist management module.
//!
//! Provides CRUD operations for artists including:
//! - gRPC adapter for handling artist service requests
//! - Command handlers for create, update, and delete operations
//! - Query manager for retrieving artist data
//! - Repository abstraction for data persistence
//! - Best-effort notification of created artists

/// gRPC service adapter for artists.
pub mod adapter;

/// Artist creation command handler.
pub mod create_artist_command;

/// Artist deletion command handler.
pub mod delete_artist_command;

/// Artist event publishing.
pub mod notifier;

pub mod observer;

/// Artist query manager for data retrieval.
pub mod query_manager;

/// Artist repository abstraction and implementations.
pub mod repository;

pub mod stamper;

/// Artist update command handler.
pub mod update_artist_command;
