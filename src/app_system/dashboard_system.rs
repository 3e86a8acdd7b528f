use tracing::{error, info};

use super::{DashboardConfig, SystemError};
use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, QueueClient};
use crate::domain::seed::{seed_orders, seed_queue_messages};
use crate::domain::{Order, QueueMessage};
use crate::metrics::SeriesGenerator;
use crate::order_actor::OrderIdSequence;

/// The dashboard's data core: both record stores plus the metric generator.
///
/// Built once at startup. The stores are seeded here and live until
/// [`DashboardSystem::shutdown`]; nothing is persisted.
pub struct DashboardSystem {
    pub order_client: OrderClient,
    pub queue_client: QueueClient,
    config: DashboardConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DashboardSystem {
    pub fn new(config: DashboardConfig) -> Self {
        // 1. Order store
        let orders = seed_orders();
        let messages = seed_queue_messages();
        // Queue messages may reference orders the order store never saw.
        let sequence = OrderIdSequence::after(
            orders
                .iter()
                .map(|o| o.order_id.as_str())
                .chain(messages.iter().map(|m| m.order_id.as_str())),
        );
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.actor_buffer, orders, move || sequence.next_id());
        let order_client = OrderClient::new(order_resource_client, config.submit_delay);
        let order_handle = tokio::spawn(order_actor.run());

        // 2. Queue message store
        let (queue_actor, queue_resource_client) =
            ResourceActor::<QueueMessage>::read_only(config.actor_buffer, messages);
        let queue_client = QueueClient::new(queue_resource_client);
        let queue_handle = tokio::spawn(queue_actor.run());

        info!("Dashboard stores started");

        Self {
            order_client,
            queue_client,
            config,
            handles: vec![order_handle, queue_handle],
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// A generator seeded from configuration, or from entropy when no seed
    /// is configured.
    pub fn series_generator(&self) -> SeriesGenerator {
        match self.config.metrics_seed {
            Some(seed) => SeriesGenerator::seeded(seed),
            None => SeriesGenerator::from_entropy(),
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // Store actors stop once every client handle is gone.
        drop(self.order_client);
        drop(self.queue_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
