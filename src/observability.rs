//! Observability stubs (metrics, tracing)

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters/gauges
#[derive(Debug, Default)]
pub struct Metrics {
    tickets_issued: AtomicU64,
    prints_failed: AtomicU64,
    requests_rejected: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket_issued(&self) {
        self.tickets_issued.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "tickets_issued", "Metric incremented");
    }

    pub fn print_failed(&self) {
        self.prints_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "prints_failed", "Metric incremented");
    }

    pub fn request_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "requests_rejected", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tickets_issued: self.tickets_issued.load(Ordering::Relaxed),
            prints_failed: self.prints_failed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub tickets_issued: u64,
    pub prints_failed: u64,
    pub requests_rejected: u64,
}
