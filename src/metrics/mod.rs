//! Delivery outcome counters.
//!
//! Every send ends in exactly one of three buckets: delivered, rejected by the
//! API, or failed before a response arrived. Counters live behind `Arc`s so
//! the binary can keep a handle while the client moves onto the blocking pool.

use crate::error::{DeliveryError, DeliveryResult};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct DeliveryMetrics {
    delivered: Arc<AtomicU64>,
    rejected: Arc<AtomicU64>,
    unreachable: Arc<AtomicU64>,
    elapsed_ms: Arc<AtomicU64>,
}

impl DeliveryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished send and how long it took.
    pub fn record(&self, result: &DeliveryResult<()>, elapsed: Duration) {
        let bucket = match result {
            Ok(()) => &self.delivered,
            Err(DeliveryError::Rejected { .. }) => &self.rejected,
            Err(_) => &self.unreachable,
        };
        bucket.fetch_add(1, Ordering::Relaxed);
        self.elapsed_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DeliverySummary {
        DeliverySummary {
            delivered: self.delivered.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            unreachable: self.unreachable.load(Ordering::Relaxed),
            elapsed_ms: self.elapsed_ms.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of [`DeliveryMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliverySummary {
    pub delivered: u64,
    pub rejected: u64,
    /// Transport failures and timeouts.
    pub unreachable: u64,
    pub elapsed_ms: u64,
}

impl DeliverySummary {
    pub fn attempts(&self) -> u64 {
        self.delivered + self.rejected + self.unreachable
    }

    /// Mean time per send, `None` before the first one.
    pub fn mean_latency_ms(&self) -> Option<u64> {
        self.elapsed_ms.checked_div(self.attempts())
    }
}

impl fmt::Display for DeliverySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sent: {} delivered, {} rejected, {} unreachable",
            self.attempts(),
            self.delivered,
            self.rejected,
            self.unreachable
        )?;
        if let Some(ms) = self.mean_latency_ms() {
            write!(f, " (mean {} ms)", ms)?;
        }
        Ok(())
    }
}
