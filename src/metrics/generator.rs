use chrono::{DateTime, Local, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::series::*;

/// Points per series.
pub const WINDOW_POINTS: u32 = 25;
/// Minutes between consecutive points.
pub const STEP_MINUTES: i64 = 30;

/// Produces the dashboard's synthetic series from an owned random source.
pub struct SeriesGenerator<R = StdRng> {
    rng: R,
}

impl SeriesGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SeriesGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn requests(&mut self, now: DateTime<Local>) -> Vec<TimePoint<RequestSample>> {
        self.window(now, |rng, step| RequestSample {
            requests: REQUESTS.sample(rng, step),
            errors: REQUEST_ERRORS.sample(rng, step),
        })
    }

    pub fn response_time(&mut self, now: DateTime<Local>) -> Vec<TimePoint<ResponseTimeSample>> {
        self.window(now, |rng, step| ResponseTimeSample {
            response_time: RESPONSE_TIME.sample(rng, step),
        })
    }

    pub fn data_transfer(&mut self, now: DateTime<Local>) -> Vec<TimePoint<DataTransferSample>> {
        self.window(now, |rng, step| DataTransferSample {
            outgoing: TRANSFER_OUTGOING.sample(rng, step),
            incoming: TRANSFER_INCOMING.sample(rng, step),
        })
    }

    pub fn compute(&mut self, now: DateTime<Local>) -> Vec<TimePoint<ComputeSample>> {
        self.window(now, |rng, step| ComputeSample {
            invocations: INVOCATIONS.sample(rng, step),
            errors: INVOCATION_ERRORS.sample(rng, step),
            throttles: THROTTLES.sample(rng, step),
        })
    }

    pub fn storage(&mut self, now: DateTime<Local>) -> Vec<TimePoint<StorageSample>> {
        self.window(now, |rng, step| StorageSample {
            reads: STORAGE_READS.sample(rng, step),
            writes: STORAGE_WRITES.sample(rng, step),
        })
    }

    pub fn queue_throughput(&mut self, now: DateTime<Local>) -> Vec<TimePoint<QueueThroughputSample>> {
        self.window(now, |rng, step| QueueThroughputSample {
            sent: QUEUE_SENT.sample(rng, step),
            received: QUEUE_RECEIVED.sample(rng, step),
            visible: QUEUE_VISIBLE.sample(rng, step),
        })
    }

    pub fn snapshot(&mut self, now: DateTime<Local>) -> MonitoringSnapshot {
        MonitoringSnapshot {
            requests: self.requests(now),
            response_time: self.response_time(now),
            data_transfer: self.data_transfer(now),
            compute: self.compute(now),
            storage: self.storage(now),
            queue_throughput: self.queue_throughput(now),
        }
    }

    /// Oldest point first; the last point sits at `now`.
    fn window<V>(
        &mut self,
        now: DateTime<Local>,
        mut sample: impl FnMut(&mut R, u32) -> V,
    ) -> Vec<TimePoint<V>> {
        (0..WINDOW_POINTS)
            .rev()
            .map(|step| {
                let at = now - TimeDelta::minutes(STEP_MINUTES * i64::from(step));
                TimePoint {
                    time: time_label(&at),
                    at,
                    values: sample(&mut self.rng, step),
                }
            })
            .collect()
    }
}

/// Two-digit 12-hour clock, e.g. `02:30 PM`.
pub fn time_label(at: &DateTime<Local>) -> String {
    at.format("%I:%M %p").to_string()
}
