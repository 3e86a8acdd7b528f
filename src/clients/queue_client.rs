use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{MessageStatus, QueueMessage, QueueStats};
use crate::queue_actor::QueueError;

/// Client for interacting with the queue message actor.
#[derive(Clone)]
pub struct QueueClient {
    inner: ResourceClient<QueueMessage>,
}

impl_basic_client!(QueueClient, QueueMessage, QueueError, queue_message);

impl QueueClient {
    /// Counts per delivery state, recomputed from the collection on each call.
    #[instrument(skip(self))]
    pub async fn get_queue_stats(&self) -> Result<QueueStats, QueueError> {
        debug!("Sending request");
        let messages = self.inner.list().await?;
        Ok(QueueStats::tally(&messages))
    }

    #[instrument(skip(self))]
    pub async fn get_queue_messages_by_status(
        &self,
        status: MessageStatus,
    ) -> Result<Vec<QueueMessage>, QueueError> {
        debug!("Sending request");
        let messages = self.inner.list().await?;
        Ok(messages.into_iter().filter(|m| m.status == status).collect())
    }
}
