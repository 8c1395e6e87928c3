//! Bounded in-memory log of sent notification signatures.
//!
//! Callers that keep the sent log in memory can use `SignatureCache` as the
//! `SignatureLog` passed to the pipeline, then feed every outcome back with
//! [`SignatureCache::record`].

use crate::application::ports::SignatureLog;
use crate::domain::notification::Notification;
use crate::domain::outcome::AdmissionOutcome;
use crate::domain::rejection::RejectionReason;
use crate::domain::signature::NotificationSignature;
use dashmap::DashMap;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Number of signatures kept by `SignatureCache::new`.
pub const DEFAULT_SIGNATURE_CAPACITY: usize = 300;

/// Error returned when building a `SignatureCache` fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Signature cache capacity must be greater than zero
    ZeroSignatureCapacity,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::ZeroSignatureCapacity => {
                write!(f, "signature cache capacity must be greater than 0")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Thread-safe, bounded set of sent signatures.
///
/// Each entry remembers when it was last inserted. Once the cache holds more
/// than `capacity` signatures, the oldest ones are evicted.
#[derive(Debug)]
pub struct SignatureCache {
    entries: DashMap<NotificationSignature, u64, ahash::RandomState>,
    sequence: AtomicU64,
    capacity: usize,
}

impl SignatureCache {
    /// Create a cache holding up to 300 signatures.
    pub fn new() -> Self {
        Self::bounded(DEFAULT_SIGNATURE_CAPACITY)
    }

    /// Create a cache holding up to `capacity` signatures.
    ///
    /// # Errors
    /// Returns `BuildError::ZeroSignatureCapacity` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, BuildError> {
        if capacity == 0 {
            return Err(BuildError::ZeroSignatureCapacity);
        }
        Ok(Self::bounded(capacity))
    }

    fn bounded(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(capacity, ahash::RandomState::new()),
            sequence: AtomicU64::new(0),
            capacity,
        }
    }

    /// Remember that `notification` was handled.
    pub fn insert(&self, notification: &Notification) {
        self.insert_signature(NotificationSignature::of(notification));
    }

    /// Insert a signature, making it the most recent entry.
    pub fn insert_signature(&self, signature: NotificationSignature) {
        let order = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.entries.insert(signature, order);
        self.evict_overflow();
    }

    /// Update the cache from an admission outcome.
    ///
    /// Accepted notifications are remembered, as are rejected ones, except
    /// those rejected as duplicates (already present).
    pub fn record(&self, outcome: &AdmissionOutcome) {
        match outcome {
            AdmissionOutcome::Rejected(rejection)
                if rejection.reason == RejectionReason::AlreadySent => {}
            _ => self.insert(outcome.notification()),
        }
    }

    pub fn contains(&self, signature: &NotificationSignature) -> bool {
        self.entries.contains_key(signature)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// All signatures, most recent first.
    pub fn signatures(&self) -> Vec<NotificationSignature> {
        let mut ordered: Vec<(u64, NotificationSignature)> = self
            .entries
            .iter()
            .map(|entry| (*entry.value(), entry.key().clone()))
            .collect();
        ordered.sort_unstable_by_key(|entry| Reverse(entry.0));
        ordered.into_iter().map(|(_, signature)| signature).collect()
    }

    fn evict_overflow(&self) {
        while self.entries.len() > self.capacity {
            // Iterator guards must be released before removing
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| *entry.value())
                .map(|entry| entry.key().clone());

            match oldest {
                Some(signature) => {
                    trace!(signature = %signature, "evicting oldest sent signature");
                    self.entries.remove(&signature);
                }
                None => break,
            }
        }
    }
}

impl Default for SignatureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureLog for SignatureCache {
    fn contains_signature(&self, signature: &NotificationSignature) -> bool {
        self.contains(signature)
    }
}
