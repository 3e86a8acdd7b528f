use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fraction of an order's processing time spent inside the compute function.
const EXECUTION_SHARE: f64 = 0.7;

/// Lifecycle status of an order. Set once when the order is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Represents a customer order.
///
/// `total_amount` is recorded as given. It is expected to equal the sum of the
/// item subtotals but is never recomputed; see [`Order::total_matches_items`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// End-to-end processing duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<u64>,
}

impl Order {
    pub fn computed_total(&self) -> f64 {
        sum_subtotals(&self.items)
    }

    /// Compares the recorded total with the item subtotals, to the cent.
    pub fn total_matches_items(&self) -> bool {
        (self.total_amount - self.computed_total()).abs() < 0.005
    }

    /// Milliseconds attributed to the compute function, when the order has
    /// been processed.
    pub fn execution_time_ms(&self) -> Option<u64> {
        self.processing_time
            .map(|ms| (ms as f64 * EXECUTION_SHARE).floor() as u64)
    }
}

/// Payload for recording a new order. The store assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub processing_time: Option<u64>,
}

/// What a customer fills in on the new-order form.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub user_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
}

impl OrderDraft {
    pub fn new(
        user_id: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn total(&self) -> f64 {
        sum_subtotals(&self.items)
    }

    /// A submitted draft enters the pipeline as a pending order.
    pub fn into_create(self) -> OrderCreate {
        let total_amount = self.total();
        OrderCreate {
            user_id: self.user_id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            items: self.items,
            total_amount,
            status: OrderStatus::Pending,
            processing_time: None,
        }
    }
}

fn sum_subtotals(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::subtotal).sum()
}
