use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while reading the queue.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueueError {
    #[error("Queue message not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for QueueError {
    fn from(e: FrameworkError) -> Self {
        QueueError::ActorCommunicationError(e.to_string())
    }
}
