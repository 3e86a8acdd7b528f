use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

const ORDER_ID_PREFIX: &str = "ORD-";
/// Ids carry at most four digits.
const MAX_ORDER_NUMBER: u32 = 9_999;

/// Hands out `ORD-<n>` ids from a counter that starts above every seeded id.
///
/// Numbers only grow, so two orders never share an id. Once `ORD-9999` has
/// been issued the sequence yields `None`.
#[derive(Debug, Clone)]
pub struct OrderIdSequence {
    next: Arc<AtomicU32>,
}

impl OrderIdSequence {
    pub fn starting_at(first: u32) -> Self {
        Self { next: Arc::new(AtomicU32::new(first)) }
    }

    /// Continues after the highest order number among `order_ids`. Pass every
    /// known reference, including those held by queue messages. Ids that do
    /// not follow the `ORD-<digits>` shape are ignored.
    pub fn after<'a>(order_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let highest = order_ids.into_iter().filter_map(order_number).max();
        Self::starting_at(highest.map_or(0, |n| n.saturating_add(1)))
    }

    pub fn next_id(&self) -> Option<String> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n <= MAX_ORDER_NUMBER).then_some(n + 1)
            })
            .ok()
            .map(|n| format!("{ORDER_ID_PREFIX}{n}"))
    }
}

fn order_number(order_id: &str) -> Option<u32> {
    let digits = order_id.strip_prefix(ORDER_ID_PREFIX)?;
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::{seed_orders, seed_queue_messages};

    fn is_order_id(id: &str) -> bool {
        order_number(id).is_some()
    }

    #[test]
    fn test_continues_after_seeded_orders() {
        let orders = seed_orders();
        let sequence = OrderIdSequence::after(orders.iter().map(|o| o.order_id.as_str()));
        assert_eq!(sequence.next_id().as_deref(), Some("ORD-2848"));
        assert_eq!(sequence.next_id().as_deref(), Some("ORD-2849"));
    }

    #[test]
    fn test_skips_orders_referenced_only_by_queue_messages() {
        let orders = seed_orders();
        let messages = seed_queue_messages();
        let known = orders
            .iter()
            .map(|o| o.order_id.as_str())
            .chain(messages.iter().map(|m| m.order_id.as_str()));

        let sequence = OrderIdSequence::after(known);
        let id = sequence.next_id().unwrap();
        assert_eq!(id, "ORD-2853");
        assert!(messages.iter().all(|m| m.order_id != id));
    }

    #[test]
    fn test_starts_at_zero_without_orders() {
        let sequence = OrderIdSequence::after([]);
        let id = sequence.next_id().unwrap();
        assert_eq!(id, "ORD-0");
        assert!(is_order_id(&id));
    }

    #[test]
    fn test_stops_after_four_digits() {
        let sequence = OrderIdSequence::starting_at(9_998);
        assert_eq!(sequence.next_id().as_deref(), Some("ORD-9998"));
        assert_eq!(sequence.next_id().as_deref(), Some("ORD-9999"));
        assert_eq!(sequence.next_id(), None);
        assert_eq!(sequence.next_id(), None);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let sequence = OrderIdSequence::starting_at(10);
        let other = sequence.clone();
        assert_eq!(sequence.next_id().as_deref(), Some("ORD-10"));
        assert_eq!(other.next_id().as_deref(), Some("ORD-11"));
    }

    #[test]
    fn test_order_number_rejects_other_shapes() {
        assert_eq!(order_number("ORD-0042"), Some(42));
        assert_eq!(order_number("ORD-"), None);
        assert_eq!(order_number("ORD-12345"), None);
        assert_eq!(order_number("MSG-8472"), None);
        assert_eq!(order_number("ORD-12a"), None);
    }
}
