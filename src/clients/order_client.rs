use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderCreate, OrderDraft, OrderItem};
use crate::order_actor::OrderError;

/// What the new-order form hands to the pipeline.
#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    customer_name: &'a str,
    customer_email: &'a str,
    items: &'a [OrderItem],
    total_amount: f64,
}

/// Client for interacting with the Order actor.
///
/// Besides plain record access it runs the submission flow of the new-order
/// form: log the payload, wait out the simulated call, record the order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    submit_delay: Duration,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, submit_delay: Duration) -> Self {
        Self { inner, submit_delay }
    }

    /// Records a new order at the front of the collection.
    #[instrument(skip(self, payload), fields(customer = %payload.customer_name))]
    pub async fn create_order(&self, payload: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(payload).await?;
        info!(order_id = %order.order_id, status = %order.status, "Order recorded");
        Ok(order)
    }

    #[instrument(skip(self, draft), fields(customer_email = %draft.customer_email))]
    pub async fn submit_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        let payload = SubmissionPayload {
            customer_name: &draft.customer_name,
            customer_email: &draft.customer_email,
            items: &draft.items,
            total_amount: draft.total(),
        };
        match serde_json::to_string(&payload) {
            Ok(json) => info!(payload = %json, "Creating order"),
            Err(e) => warn!(error = %e, "Could not encode submission payload"),
        }

        tokio::time::sleep(self.submit_delay).await;

        self.create_order(draft.into_create()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{Entity, FrameworkError};
    use crate::domain::OrderStatus;
    use crate::mock_framework::{create_mock_client, expect_create, expect_get};

    fn draft() -> OrderDraft {
        OrderDraft::new("USR-3001", "Grace Hopper", "grace@example.com")
            .with_item(OrderItem::new("PROD-020", "Notebook", 3, 4.5))
    }

    #[tokio::test]
    async fn test_submit_order_records_pending_order_with_computed_total() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner, Duration::ZERO);

        let task = tokio::spawn(async move { client.submit_order(draft()).await });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Order Create");
        assert_eq!(payload.customer_name, "Grace Hopper");
        assert_eq!(payload.total_amount, 13.5);
        assert_eq!(payload.status, OrderStatus::Pending);

        let recorded = Order::from_create("ORD-2848".to_string(), payload).unwrap();
        responder.send(Ok(recorded.clone())).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Ok(recorded));
    }

    #[tokio::test]
    async fn test_missing_order_is_not_found() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner, Duration::ZERO);

        let task = tokio::spawn(async move { client.get_order("NOPE".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Order Get");
        assert_eq!(id, "NOPE");
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::NotFound("NOPE".to_string())));
    }

    #[tokio::test]
    async fn test_exhausted_id_space_surfaces_as_order_error() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner, Duration::ZERO);

        let task = tokio::spawn(async move { client.submit_order(draft()).await });

        let (_, responder) = expect_create(&mut receiver).await.expect("Expected Order Create");
        responder
            .send(Err(FrameworkError::IdSpaceExhausted))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::IdSpaceExhausted));
    }

    #[tokio::test]
    async fn test_rejected_create_keeps_its_reason() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner, Duration::ZERO);

        let task = tokio::spawn(async move { client.create_order(draft().into_create()).await });

        let (_, responder) = expect_create(&mut receiver).await.expect("Expected Order Create");
        responder
            .send(Err(FrameworkError::Rejected("no items".to_string())))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::Rejected("no items".to_string())));
    }

    #[tokio::test]
    async fn test_list_failure_maps_to_communication_error() {
        let (inner, receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner, Duration::ZERO);
        drop(receiver);

        let err = client.get_orders().await.unwrap_err();
        assert_eq!(err, OrderError::ActorCommunicationError("Actor closed".to_string()));
    }
}
