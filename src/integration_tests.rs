#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use crate::app_system::{DashboardConfig, DashboardSystem};
    use crate::domain::{MessageStatus, OrderCreate, OrderDraft, OrderItem, OrderStatus, QueueStats};
    use crate::order_actor::OrderError;
    use crate::queue_actor::QueueError;

    fn system() -> DashboardSystem {
        DashboardSystem::new(DashboardConfig {
            submit_delay: Duration::ZERO,
            ..DashboardConfig::default()
        })
    }

    fn is_order_id(id: &str) -> bool {
        id.strip_prefix("ORD-").is_some_and(|digits| {
            (1..=4).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
        })
    }

    fn walk_in(name: &str) -> OrderCreate {
        OrderCreate {
            user_id: "USR-1100".to_string(),
            customer_name: name.to_string(),
            customer_email: "walk.in@example.com".to_string(),
            items: vec![OrderItem::new("PROD-050", "Sticker Pack", 4, 2.5)],
            total_amount: 10.0,
            status: OrderStatus::Processing,
            processing_time: Some(90),
        }
    }

    #[tokio::test]
    async fn test_lookup_seeded_and_missing_orders() {
        let system = system();

        let order = system.order_client.get_order("ORD-2847".to_string()).await.unwrap();
        assert_eq!(order.customer_name, "Sarah Johnson");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.status, OrderStatus::Completed);

        let missing = system.order_client.get_order("NOPE".to_string()).await;
        assert_eq!(missing, Err(OrderError::NotFound("NOPE".to_string())));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_created_order_goes_first() {
        let system = system();
        let before = system.order_client.get_orders().await.unwrap();
        assert_eq!(before.len(), 8);

        let started = Utc::now();
        let created = system.order_client.create_order(walk_in("Ada Lovelace")).await.unwrap();

        assert!(is_order_id(&created.order_id), "{}", created.order_id);
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.created_at >= started);
        assert_eq!(created.status, OrderStatus::Processing);

        let after = system.order_client.get_orders().await.unwrap();
        assert_eq!(after.len(), 9);
        assert_eq!(after[0], created);
        assert_eq!(&after[1..], &before[..]);

        let fetched = system.order_client.get_order(created.order_id.clone()).await.unwrap();
        assert_eq!(fetched, created);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_created_ids_never_collide() {
        let system = system();

        let mut ids = Vec::new();
        for n in 0..20 {
            let order = system.order_client.create_order(walk_in(&format!("Guest {n}"))).await.unwrap();
            ids.push(order.order_id);
        }

        let orders = system.order_client.get_orders().await.unwrap();
        let mut all: Vec<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 28);
        assert!(ids.iter().all(|id| is_order_id(id)));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_submissions_are_all_recorded() {
        let system = system();

        let mut tasks = Vec::new();
        for n in 0..10 {
            let client = system.order_client.clone();
            tasks.push(tokio::spawn(async move {
                let draft = OrderDraft::new(format!("USR-2{n:03}"), format!("Buyer {n}"), "buyer@example.com")
                    .with_item(OrderItem::new("PROD-060", "Mug", 1, 12.0));
                client.submit_order(draft).await
            }));
        }
        for task in tasks {
            let order = task.await.unwrap().unwrap();
            assert_eq!(order.status, OrderStatus::Pending);
            assert_eq!(order.total_amount, 12.0);
        }

        assert_eq!(system.order_client.get_orders().await.unwrap().len(), 18);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_repeated_reads_are_equal() {
        let system = system();

        let orders = system.order_client.get_orders().await.unwrap();
        assert_eq!(orders, system.order_client.get_orders().await.unwrap());

        let messages = system.queue_client.get_queue_messages().await.unwrap();
        assert_eq!(messages, system.queue_client.get_queue_messages().await.unwrap());
        assert_eq!(messages.len(), 8);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_queue_stats_and_lookups() {
        let system = system();

        let stats = system.queue_client.get_queue_stats().await.unwrap();
        assert_eq!(stats, QueueStats { available: 3, in_flight: 1, delayed: 1, dlq: 3, total: 8 });

        let in_flight = system.queue_client.get_queue_message("MSG-8472".to_string()).await.unwrap();
        assert_eq!(in_flight.status, MessageStatus::InFlight);
        assert!(in_flight.visibility_timeout.is_some());

        let missing = system.queue_client.get_queue_message("MSG-0000".to_string()).await;
        assert_eq!(missing, Err(QueueError::NotFound("MSG-0000".to_string())));

        let available = system
            .queue_client
            .get_queue_messages_by_status(MessageStatus::Available)
            .await
            .unwrap();
        assert_eq!(available.len(), 3);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_new_order_ids_avoid_queue_message_references() {
        let system = system();
        let messages = system.queue_client.get_queue_messages().await.unwrap();

        let created = system.order_client.create_order(walk_in("Grace")).await.unwrap();
        let draft = OrderDraft::new("USR-1101", "Edsger", "edsger@example.com")
            .with_item(OrderItem::new("PROD-061", "Notebook", 2, 4.5));
        let submitted = system.order_client.submit_order(draft).await.unwrap();

        assert_eq!(created.order_id, "ORD-2853");
        for id in [&created.order_id, &submitted.order_id] {
            assert!(messages.iter().all(|m| &m.order_id != id), "{id} already referenced");
        }

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_creating_orders_leaves_queue_untouched() {
        let system = system();
        system.order_client.create_order(walk_in("Linus")).await.unwrap();

        let stats = system.queue_client.get_queue_stats().await.unwrap();
        assert_eq!(stats.total, 8);

        system.shutdown().await.unwrap();
    }
}
