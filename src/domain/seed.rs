//! Records the dashboard starts with. Orders are listed most recent first.

use chrono::{DateTime, TimeZone, Utc};

use super::{MessageStatus, Order, OrderItem, OrderStatus, QueueMessage};

/// Seed timestamps all fall on 2025-10-07 UTC, where every fixed time of day
/// maps to exactly one instant.
fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    let stamp = Utc.with_ymd_and_hms(2025, 10, 7, hour, minute, second).single();
    debug_assert!(stamp.is_some(), "invalid seed time {hour:02}:{minute:02}:{second:02}");
    stamp.unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn order(
    order_id: &str,
    user_id: &str,
    customer: (&str, &str),
    items: Vec<OrderItem>,
    total_amount: f64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    processing_time: Option<u64>,
) -> Order {
    Order {
        order_id: order_id.to_string(),
        user_id: user_id.to_string(),
        customer_name: customer.0.to_string(),
        customer_email: customer.1.to_string(),
        items,
        total_amount,
        status,
        created_at,
        updated_at,
        processing_time,
    }
}

pub fn seed_orders() -> Vec<Order> {
    vec![
        order(
            "ORD-2847",
            "USR-1001",
            ("Sarah Johnson", "sarah.j@example.com"),
            vec![
                OrderItem::new("PROD-001", "Wireless Headphones", 1, 129.99),
                OrderItem::new("PROD-002", "USB-C Cable", 2, 19.99),
            ],
            169.97,
            OrderStatus::Completed,
            at(14, 23, 0),
            at(14, 23, 15),
            Some(142),
        ),
        order(
            "ORD-2846",
            "USR-1002",
            ("Michael Chen", "m.chen@example.com"),
            vec![OrderItem::new("PROD-003", "Laptop Stand", 1, 49.99)],
            49.99,
            OrderStatus::Completed,
            at(14, 18, 0),
            at(14, 18, 12),
            Some(128),
        ),
        order(
            "ORD-2845",
            "USR-1003",
            ("Emily Rodriguez", "emily.r@example.com"),
            vec![OrderItem::new("PROD-004", "Mechanical Keyboard", 1, 159.99)],
            159.99,
            OrderStatus::Failed,
            at(14, 11, 0),
            at(14, 11, 5),
            None,
        ),
        order(
            "ORD-2844",
            "USR-1004",
            ("David Kim", "david.k@example.com"),
            vec![
                OrderItem::new("PROD-005", "Monitor 27\"", 1, 299.99),
                OrderItem::new("PROD-006", "HDMI Cable", 1, 14.99),
            ],
            314.98,
            OrderStatus::Completed,
            at(14, 5, 0),
            at(14, 5, 18),
            Some(156),
        ),
        order(
            "ORD-2843",
            "USR-1005",
            ("Jessica Taylor", "j.taylor@example.com"),
            vec![OrderItem::new("PROD-007", "Wireless Mouse", 2, 39.99)],
            79.98,
            OrderStatus::Completed,
            at(13, 58, 0),
            at(13, 58, 11),
            Some(135),
        ),
        order(
            "ORD-2842",
            "USR-1006",
            ("Robert Martinez", "r.martinez@example.com"),
            vec![OrderItem::new("PROD-008", "Desk Lamp", 1, 34.99)],
            34.99,
            OrderStatus::Processing,
            at(13, 52, 0),
            at(13, 52, 8),
            None,
        ),
        order(
            "ORD-2841",
            "USR-1007",
            ("Amanda White", "a.white@example.com"),
            vec![
                OrderItem::new("PROD-009", "Webcam HD", 1, 89.99),
                OrderItem::new("PROD-010", "Microphone", 1, 69.99),
            ],
            159.98,
            OrderStatus::Pending,
            at(13, 45, 0),
            at(13, 45, 0),
            None,
        ),
        order(
            "ORD-2840",
            "USR-1008",
            ("Christopher Lee", "c.lee@example.com"),
            vec![OrderItem::new("PROD-011", "External SSD 1TB", 1, 119.99)],
            119.99,
            OrderStatus::Completed,
            at(13, 38, 0),
            at(13, 38, 14),
            Some(145),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn message(
    message_id: &str,
    order_id: &str,
    customer_name: &str,
    status: MessageStatus,
    timestamp: DateTime<Utc>,
    retry_count: u32,
    visibility_timeout: Option<DateTime<Utc>>,
    approximate_receive_count: u32,
) -> QueueMessage {
    QueueMessage {
        message_id: message_id.to_string(),
        order_id: order_id.to_string(),
        customer_name: customer_name.to_string(),
        status,
        timestamp,
        retry_count,
        visibility_timeout,
        approximate_receive_count,
    }
}

pub fn seed_queue_messages() -> Vec<QueueMessage> {
    use MessageStatus::*;

    vec![
        message("MSG-8472", "ORD-2842", "Robert Martinez", InFlight, at(13, 52, 8), 0, Some(at(13, 52, 38)), 1),
        message("MSG-8471", "ORD-2841", "Amanda White", Available, at(13, 45, 0), 0, None, 0),
        message("MSG-8470", "ORD-2848", "Daniel Brown", Available, at(13, 43, 15), 0, None, 0),
        message("MSG-8469", "ORD-2849", "Lisa Anderson", Available, at(13, 41, 22), 0, None, 0),
        message("MSG-8468", "ORD-2850", "Kevin Wilson", Delayed, at(13, 38, 45), 1, None, 1),
        message("MSG-8467", "ORD-2845", "Emily Rodriguez", Dlq, at(13, 11, 5), 3, None, 4),
        message("MSG-8466", "ORD-2851", "Thomas Garcia", Dlq, at(12, 58, 12), 3, None, 4),
        message("MSG-8465", "ORD-2852", "Patricia Moore", Dlq, at(12, 45, 33), 3, None, 4),
    ]
}
