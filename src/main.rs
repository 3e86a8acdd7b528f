mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod metrics;
mod order_actor;
mod queue_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use chrono::Local;
use tracing::{error, info, warn, Instrument};

use crate::app_system::{setup_tracing, DashboardConfig, DashboardSystem, SystemError};
use crate::domain::{MessageStatus, OrderDraft, OrderItem};
use crate::metrics::MetricCategory;
use crate::order_actor::OrderError;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = DashboardConfig::from_env()?;
    let deployment = &config.deployment;
    info!(
        region = %deployment.region,
        account = %deployment.account_id,
        endpoint = %deployment.api_endpoint,
        table = %deployment.table_name,
        function_timeout_s = deployment.function_timeout.as_secs(),
        function_memory_mb = deployment.function_memory_mb,
        "Starting dashboard"
    );

    let system = DashboardSystem::new(config);

    // Orders page
    let span = tracing::info_span!("orders_page");
    async {
        let orders = system.order_client.get_orders().await?;
        info!(count = orders.len(), "Loaded orders");
        for order in &orders {
            info!(
                order_id = %order.order_id,
                customer = %order.customer_name,
                status = %order.status,
                total = %format!("${:.2}", order.total_amount),
                "Order"
            );
        }
        Ok::<_, OrderError>(())
    }
    .instrument(span)
    .await?;

    // Order detail page, one hit and one miss
    let span = tracing::info_span!("order_detail_page");
    async {
        for id in ["ORD-2847", "ORD-9999"] {
            match system.order_client.get_order(id.to_string()).await {
                Ok(order) => info!(
                    order_id = %order.order_id,
                    items = order.items.len(),
                    processing_ms = ?order.processing_time,
                    execution_ms = ?order.execution_time_ms(),
                    totals_agree = order.total_matches_items(),
                    "Order details"
                ),
                Err(OrderError::NotFound(id)) => warn!(order_id = %id, "Order not found"),
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
    .instrument(span)
    .await?;

    // New order page
    let draft = OrderDraft::new("USR-1009", "Alice Moreau", "alice.m@example.com")
        .with_item(OrderItem::new("PROD-012", "Laptop Sleeve", 1, 29.99))
        .with_item(OrderItem::new("PROD-002", "USB-C Cable", 3, 19.99));

    let span = tracing::info_span!("order_submission");
    let submitted = async {
        info!("Submitting order");
        system.order_client.submit_order(draft).await
    }
    .instrument(span)
    .await;

    match submitted {
        Ok(order) => info!(order_id = %order.order_id, "Order submitted successfully"),
        Err(e) => error!(error = %e, "Order submission failed"),
    }

    // Queue page
    let span = tracing::info_span!("queue_page");
    async {
        let stats = system.queue_client.get_queue_stats().await?;
        info!(
            available = stats.available,
            in_flight = stats.in_flight,
            delayed = stats.delayed,
            dlq = stats.dlq,
            total = stats.total,
            "Queue stats"
        );

        let settings = &system.config().queue;
        info!(
            visibility_timeout_s = settings.visibility_timeout.as_secs(),
            retention_days = settings.retention.as_secs() / 86_400,
            max_message_size_kb = settings.max_message_size_kb,
            delivery_delay_s = settings.delivery_delay.as_secs(),
            max_receive_count = settings.max_receive_count,
            "Queue configuration"
        );

        let max_receive_count = settings.max_receive_count;
        let dead_letters = system.queue_client.get_queue_messages_by_status(MessageStatus::Dlq).await?;
        for message in dead_letters {
            info!(
                message_id = %message.message_id,
                order_id = %message.order_id,
                receives = message.approximate_receive_count,
                exhausted = message.exhausted_receive_budget(max_receive_count),
                "Dead-lettered message"
            );
        }
        Ok::<_, crate::queue_actor::QueueError>(())
    }
    .instrument(span)
    .await?;

    // Monitoring page
    let snapshot = system.series_generator().snapshot(Local::now());
    for category in MetricCategory::ALL {
        info!(
            metric = %category,
            latest = ?snapshot.latest(category),
            "Monitoring series"
        );
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
