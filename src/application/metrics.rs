//! Observability metrics for admission decisions.
//!
//! Counters never influence outcomes; they only record them.

use crate::domain::outcome::AdmissionOutcome;
use crate::domain::rejection::RejectionReason;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracking admission statistics.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct AdmissionMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Total number of notifications accepted
    accepted: AtomicU64,
    /// Rejections, indexed by `RejectionReason::index`
    rejected: [AtomicU64; RejectionReason::COUNT],
}

impl AdmissionMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                accepted: AtomicU64::new(0),
                rejected: std::array::from_fn(|_| AtomicU64::new(0)),
            }),
        }
    }

    /// Record an outcome.
    pub(crate) fn record(&self, outcome: &AdmissionOutcome) {
        match outcome {
            AdmissionOutcome::Accepted(_) => self.record_accepted(),
            AdmissionOutcome::Rejected(rejection) => self.record_rejected(&rejection.reason),
        }
    }

    pub(crate) fn record_accepted(&self) {
        self.inner.accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self, reason: &RejectionReason) {
        self.inner.rejected[reason.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Get the total number of accepted notifications.
    pub fn accepted(&self) -> u64 {
        self.inner.accepted.load(Ordering::Relaxed)
    }

    /// Get the total number of rejected notifications.
    pub fn rejected(&self) -> u64 {
        self.inner
            .rejected
            .iter()
            .map(|counter| counter.load(Ordering::Relaxed))
            .fold(0u64, u64::saturating_add)
    }

    /// Get the number of rejections with the same variant as `reason`.
    ///
    /// Payloads are ignored, so any `TooOld` counts every `TooOld` rejection.
    pub fn rejected_for(&self, reason: &RejectionReason) -> u64 {
        self.inner.rejected[reason.index()].load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let load = |index: usize| self.inner.rejected[index].load(Ordering::Relaxed);

        MetricsSnapshot {
            accepted: self.accepted(),
            already_sent: load(0),
            no_date: load(1),
            too_old: load(2),
            too_new: load(3),
            flags: load(4),
            application_not_activated: load(5),
            no_application_configuration: load(6),
            contacts: load(7),
        }
    }

    /// Reset all metrics to zero.
    ///
    /// Useful for testing or when starting a new monitoring period.
    pub fn reset(&self) {
        self.inner.accepted.store(0, Ordering::Relaxed);
        for counter in &self.inner.rejected {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl Default for AdmissionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub accepted: u64,
    pub already_sent: u64,
    pub no_date: u64,
    pub too_old: u64,
    pub too_new: u64,
    pub flags: u64,
    pub application_not_activated: u64,
    pub no_application_configuration: u64,
    pub contacts: u64,
}

impl MetricsSnapshot {
    /// Total number of rejections across all reasons.
    pub fn rejected(&self) -> u64 {
        [
            self.already_sent,
            self.no_date,
            self.too_old,
            self.too_new,
            self.flags,
            self.application_not_activated,
            self.no_application_configuration,
            self.contacts,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }

    /// Get the total number of notifications evaluated.
    pub fn total(&self) -> u64 {
        self.accepted.saturating_add(self.rejected())
    }

    /// Calculate the rejection rate (0.0 to 1.0).
    ///
    /// Returns 0.0 if no notifications have been evaluated.
    pub fn rejection_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.rejected() as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationFlags;
    use std::time::UNIX_EPOCH;

    #[test]
    fn test_metrics_initial_state() {
        let metrics = AdmissionMetrics::new();
        assert_eq!(metrics.accepted(), 0);
        assert_eq!(metrics.rejected(), 0);
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_record_accepted_and_rejected() {
        let metrics = AdmissionMetrics::new();

        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected(&RejectionReason::Contacts);
        metrics.record_rejected(&RejectionReason::Flags(NotificationFlags::SILENT));

        assert_eq!(metrics.accepted(), 2);
        assert_eq!(metrics.rejected(), 2);
        assert_eq!(metrics.rejected_for(&RejectionReason::Contacts), 1);
        assert_eq!(
            metrics.rejected_for(&RejectionReason::Flags(NotificationFlags::empty())),
            1
        );
        assert_eq!(metrics.rejected_for(&RejectionReason::NoDate), 0);
    }

    #[test]
    fn test_snapshot_breakdown() {
        let metrics = AdmissionMetrics::new();

        metrics.record_rejected(&RejectionReason::AlreadySent);
        metrics.record_rejected(&RejectionReason::TooOld {
            notification_date: UNIX_EPOCH,
            cutoff_date: UNIX_EPOCH,
        });
        metrics.record_rejected(&RejectionReason::NoApplicationConfiguration);
        metrics.record_rejected(&RejectionReason::NoApplicationConfiguration);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.already_sent, 1);
        assert_eq!(snapshot.too_old, 1);
        assert_eq!(snapshot.no_application_configuration, 2);
        assert_eq!(snapshot.rejected(), 4);
        assert_eq!(snapshot.total(), 4);
    }

    #[test]
    fn test_rejection_rate() {
        let snapshot = MetricsSnapshot {
            accepted: 75,
            contacts: 25,
            ..Default::default()
        };
        assert_eq!(snapshot.rejection_rate(), 0.25);
        assert_eq!(MetricsSnapshot::default().rejection_rate(), 0.0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = AdmissionMetrics::new();
        let clone = metrics.clone();

        clone.record_accepted();
        assert_eq!(metrics.accepted(), 1);
    }

    #[test]
    fn test_reset() {
        let metrics = AdmissionMetrics::new();
        metrics.record_accepted();
        metrics.record_rejected(&RejectionReason::NoDate);

        metrics.reset();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_concurrent_updates() {
        use std::thread;

        let metrics = AdmissionMetrics::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_accepted();
                        metrics.record_rejected(&RejectionReason::AlreadySent);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.accepted(), 8000);
        assert_eq!(metrics.snapshot().already_sent, 8000);
    }
}
