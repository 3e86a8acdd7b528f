use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery state of a queue message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Available,
    InFlight,
    Delayed,
    /// Moved to the dead-letter queue after exceeding its retry budget.
    Dlq,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Available => "AVAILABLE",
            MessageStatus::InFlight => "IN_FLIGHT",
            MessageStatus::Delayed => "DELAYED",
            MessageStatus::Dlq => "DLQ",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of order-processing work sitting in the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueMessage {
    pub message_id: String,
    pub order_id: String,
    pub customer_name: String,
    pub status: MessageStatus,
    pub timestamp: DateTime<Utc>,
    pub retry_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<DateTime<Utc>>,
    pub approximate_receive_count: u32,
}

impl QueueMessage {
    /// True once the message has been received more often than the queue's
    /// redrive policy allows.
    pub fn exhausted_receive_budget(&self, max_receive_count: u32) -> bool {
        self.approximate_receive_count > max_receive_count
    }
}

/// Message counts per delivery state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    pub available: usize,
    pub in_flight: usize,
    pub delayed: usize,
    pub dlq: usize,
    pub total: usize,
}

impl QueueStats {
    pub fn tally(messages: &[QueueMessage]) -> Self {
        messages.iter().fold(Self::default(), |mut stats, message| {
            match message.status {
                MessageStatus::Available => stats.available += 1,
                MessageStatus::InFlight => stats.in_flight += 1,
                MessageStatus::Delayed => stats.delayed += 1,
                MessageStatus::Dlq => stats.dlq += 1,
            }
            stats.total += 1;
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_queue_messages;

    #[test]
    fn test_tally_of_seeded_messages() {
        let stats = QueueStats::tally(&seed_queue_messages());
        assert_eq!(
            stats,
            QueueStats { available: 3, in_flight: 1, delayed: 1, dlq: 3, total: 8 }
        );
    }

    #[test]
    fn test_tally_of_nothing_is_zero() {
        assert_eq!(QueueStats::tally(&[]), QueueStats::default());
    }

    #[test]
    fn test_stats_serialize_with_camel_case_keys() {
        let stats = QueueStats { available: 1, in_flight: 2, delayed: 0, dlq: 0, total: 3 };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["inFlight"], 2);
        assert_eq!(json["total"], 3);
    }

    #[test]
    fn test_dead_letters_exhausted_the_receive_budget() {
        for message in seed_queue_messages() {
            assert_eq!(
                message.exhausted_receive_budget(3),
                message.status == MessageStatus::Dlq,
                "{}",
                message.message_id
            );
        }
    }
}
