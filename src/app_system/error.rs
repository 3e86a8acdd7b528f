use thiserror::Error;

use crate::order_actor::OrderError;
use crate::queue_actor::QueueError;

/// Errors surfaced by system startup, the demo run, and shutdown.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
