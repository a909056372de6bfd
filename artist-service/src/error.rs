use artist_api::model::error::ArtistError;
use thiserror::Error;
use tonic::{Code, Status, transport};
use tracing::error;

/// Application error types.
///
/// Represents all possible errors that can occur in the artist service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Artist domain error.
    ///
    /// Malformed identifiers, missing artists and other request level failures.
    #[error("artist error: {0}")]
    Artist(#[from] ArtistError),

    /// Storage backend error.
    ///
    /// Raised by repositories when the underlying store cannot serve a request.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),

    /// Internal application error.
    ///
    /// Represents unexpected internal errors that occur during service operation.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// gRPC status error.
    #[error("status error: {0}")]
    Status(#[from] Status),
}

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(
    config::ConfigError,
    transport::Error,
    serde_json::Error,
    tonic_reflection::server::Error,
    tracing_subscriber::util::TryInitError,
);

macro_rules! impl_storage_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Storage(Box::new(err))
            }
        }
        )*
    };
}
impl_storage_errors!(sled::Error);

impl From<AppError> for Status {
    /// Converts application errors to gRPC status codes.
    ///
    /// Internal details are logged and never sent to the client.
    fn from(err: AppError) -> Self {
        match err {
            AppError::Artist(err) => err.into(),
            AppError::Status(status) => status,
            AppError::Storage(_) => {
                error!("storage failure: {}", err);
                Self::unavailable(Code::Unavailable.description())
            }
            AppError::Internal(_) => {
                error!("internal service error: {}", err);
                Self::internal(Code::Internal.description())
            }
        }
    }
}
