use std::fmt;

use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;

/// Constants describing one synthetic series:
/// `floor(base + noise * spread + sin(step / period) * amplitude)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesShape {
    pub base: f64,
    pub spread: f64,
    pub amplitude: f64,
    pub period: f64,
}

impl SeriesShape {
    pub const fn wave(base: f64, spread: f64, amplitude: f64, period: f64) -> Self {
        Self { base, spread, amplitude, period }
    }

    /// Flat series with noise only.
    pub const fn noise(base: f64, spread: f64) -> Self {
        Self { base, spread, amplitude: 0.0, period: 1.0 }
    }

    /// Value at `step` half-hours before now. Never negative.
    pub fn sample<R: Rng>(&self, rng: &mut R, step: u32) -> u32 {
        let wave = (f64::from(step) / self.period).sin() * self.amplitude;
        let value = self.base + rng.gen::<f64>() * self.spread + wave;
        value.floor().max(0.0) as u32
    }
}

pub const REQUESTS: SeriesShape = SeriesShape::wave(1800.0, 400.0, 200.0, 3.0);
pub const REQUEST_ERRORS: SeriesShape = SeriesShape::noise(5.0, 10.0);
pub const RESPONSE_TIME: SeriesShape = SeriesShape::wave(120.0, 60.0, 30.0, 4.0);
pub const TRANSFER_OUTGOING: SeriesShape = SeriesShape::wave(400.0, 100.0, 50.0, 5.0);
pub const TRANSFER_INCOMING: SeriesShape = SeriesShape::wave(150.0, 50.0, 30.0, 6.0);
pub const INVOCATIONS: SeriesShape = SeriesShape::wave(2000.0, 500.0, 300.0, 3.0);
pub const INVOCATION_ERRORS: SeriesShape = SeriesShape::noise(3.0, 8.0);
pub const THROTTLES: SeriesShape = SeriesShape::noise(0.0, 3.0);
pub const STORAGE_READS: SeriesShape = SeriesShape::wave(1500.0, 400.0, 200.0, 4.0);
pub const STORAGE_WRITES: SeriesShape = SeriesShape::wave(800.0, 200.0, 100.0, 5.0);
pub const QUEUE_SENT: SeriesShape = SeriesShape::wave(1800.0, 400.0, 200.0, 3.0);
pub const QUEUE_RECEIVED: SeriesShape = SeriesShape::wave(1750.0, 380.0, 190.0, 3.2);
pub const QUEUE_VISIBLE: SeriesShape = SeriesShape::wave(20.0, 30.0, 15.0, 2.0);

/// One sample of a series: the instant, its chart label and the values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint<V> {
    pub time: String,
    pub at: DateTime<Local>,
    #[serde(flatten)]
    pub values: V,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestSample {
    pub requests: u32,
    pub errors: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeSample {
    pub response_time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataTransferSample {
    pub outgoing: u32,
    pub incoming: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputeSample {
    pub invocations: u32,
    pub errors: u32,
    pub throttles: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageSample {
    pub reads: u32,
    pub writes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueThroughputSample {
    pub sent: u32,
    pub received: u32,
    pub visible: u32,
}

/// The six charted metric categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    Requests,
    ResponseTime,
    DataTransfer,
    Compute,
    Storage,
    QueueThroughput,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 6] = [
        MetricCategory::Requests,
        MetricCategory::ResponseTime,
        MetricCategory::DataTransfer,
        MetricCategory::Compute,
        MetricCategory::Storage,
        MetricCategory::QueueThroughput,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MetricCategory::Requests => "Edge Requests",
            MetricCategory::ResponseTime => "Response Time",
            MetricCategory::DataTransfer => "Data Transfer",
            MetricCategory::Compute => "Function Invocations",
            MetricCategory::Storage => "Table Throughput",
            MetricCategory::QueueThroughput => "Queue Throughput",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// All six series generated against the same instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringSnapshot {
    pub requests: Vec<TimePoint<RequestSample>>,
    pub response_time: Vec<TimePoint<ResponseTimeSample>>,
    pub data_transfer: Vec<TimePoint<DataTransferSample>>,
    pub compute: Vec<TimePoint<ComputeSample>>,
    pub storage: Vec<TimePoint<StorageSample>>,
    pub queue_throughput: Vec<TimePoint<QueueThroughputSample>>,
}

impl MonitoringSnapshot {
    /// Most recent value of the category's leading series.
    pub fn latest(&self, category: MetricCategory) -> Option<u32> {
        match category {
            MetricCategory::Requests => self.requests.last().map(|p| p.values.requests),
            MetricCategory::ResponseTime => self.response_time.last().map(|p| p.values.response_time),
            MetricCategory::DataTransfer => self.data_transfer.last().map(|p| p.values.outgoing),
            MetricCategory::Compute => self.compute.last().map(|p| p.values.invocations),
            MetricCategory::Storage => self.storage.last().map(|p| p.values.reads),
            MetricCategory::QueueThroughput => self.queue_throughput.last().map(|p| p.values.sent),
        }
    }
}
