//! World lock wait-time tracking (warnings + periodic averages)

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

pub const LOCK_WAIT_WARN_US: u64 = 500;
pub const REPORT_INTERVAL_MS: u64 = 5_000;

#[inline]
fn as_nanos_u64(dur: Duration) -> u64 {
    dur.as_nanos().min(u64::MAX as u128) as u64
}

pub(super) struct LockMetrics {
    created: Instant,
    wait_total_ns: AtomicU64,
    samples: AtomicU64,
    max_wait_ns: AtomicU64,
    last_report_ms: AtomicU64,
}

impl LockMetrics {
    pub(super) fn new() -> Self {
        Self {
            created: Instant::now(),
            wait_total_ns: AtomicU64::new(0),
            samples: AtomicU64::new(0),
            max_wait_ns: AtomicU64::new(0),
            last_report_ms: AtomicU64::new(0),
        }
    }

    pub(super) fn record_wait(&self, context: &str, wait: Duration) {
        let wait_ns = as_nanos_u64(wait);
        self.wait_total_ns.fetch_add(wait_ns, Ordering::Relaxed);
        self.samples.fetch_add(1, Ordering::Relaxed);
        self.max_wait_ns.fetch_max(wait_ns, Ordering::Relaxed);

        let wait_us = wait_ns / 1_000;
        if wait_us >= LOCK_WAIT_WARN_US {
            log::warn!(
                "world lock wait high: {}us (threshold={}us, context={})",
                wait_us,
                LOCK_WAIT_WARN_US,
                context
            );
        }
        self.maybe_report();
    }

    /// Longest wait seen so far.
    pub(super) fn max_wait(&self) -> Duration {
        Duration::from_nanos(self.max_wait_ns.load(Ordering::Relaxed))
    }

    fn maybe_report(&self) {
        let now = self.created.elapsed().as_millis().min(u64::MAX as u128) as u64;
        let last = self.last_report_ms.load(Ordering::Relaxed);
        if now.saturating_sub(last) < REPORT_INTERVAL_MS {
            return;
        }
        if self
            .last_report_ms
            .compare_exchange(last, now, Ordering::AcqRel, Ordering::Relaxed)
            .is_err()
        {
            return;
        }

        let samples = self.samples.swap(0, Ordering::AcqRel);
        let total_ns = self.wait_total_ns.swap(0, Ordering::AcqRel);
        let avg_us = if samples > 0 { (total_ns / samples) / 1_000 } else { 0 };

        log::info!(
            "[LOCK] world avg_wait_us={} samples={} window={}ms",
            avg_us,
            samples,
            REPORT_INTERVAL_MS
        );
    }
}
