use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order id space exhausted")]
    IdSpaceExhausted,
    #[error("Order id already in use: {0}")]
    DuplicateId(String),
    #[error("Order rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::IdSpaceExhausted => OrderError::IdSpaceExhausted,
            FrameworkError::DuplicateId(id) => OrderError::DuplicateId(id),
            FrameworkError::Rejected(reason) => OrderError::Rejected(reason),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
