use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;

    fn id(&self) -> &String { &self.order_id }

    /// Creates a new Order from its creation payload.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `payload` - Customer, items, total, status and processing time
    ///
    /// # Notes
    /// Both timestamps are stamped with the same instant.
    fn from_create(id: String, payload: OrderCreate) -> Result<Self, String> {
        let now = Utc::now();
        Ok(Self {
            order_id: id,
            user_id: payload.user_id,
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            items: payload.items,
            total_amount: payload.total_amount,
            status: payload.status,
            created_at: now,
            updated_at: now,
            processing_time: payload.processing_time,
        })
    }
}
