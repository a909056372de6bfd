//! Model definitions for the artist service.
//!
//! This module contains the data models, service request structures,
//! and error handling utilities for the artist API.

/// Artist model definitions and utilities.
pub mod artist;
/// Artist service request structures.
pub mod artist_service;
/// Error handling and types for the artist service.
pub mod error;
