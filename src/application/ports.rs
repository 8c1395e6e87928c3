//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use crate::domain::signature::NotificationSignature;
use ahash::AHashSet;
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::time::SystemTime;

/// Port for obtaining current wall-clock time.
///
/// Notification dates are wall-clock dates reported by the phone, so this
/// port works with `SystemTime` rather than a monotonic clock.
/// Infrastructure provides concrete implementations (SystemClock, FixedClock,
/// MockClock).
pub trait Clock: Send + Sync + Debug {
    /// Get the current time.
    fn now(&self) -> SystemTime;
}

/// Port for a read-only snapshot of already sent notification signatures.
///
/// The log is owned and persisted by the caller. The pipeline only asks
/// whether a signature is present and never appends to it.
pub trait SignatureLog {
    /// Check whether `signature` has already been recorded.
    fn contains_signature(&self, signature: &NotificationSignature) -> bool;
}

impl<T: AsRef<str>> SignatureLog for [T] {
    fn contains_signature(&self, signature: &NotificationSignature) -> bool {
        self.iter().any(|entry| entry.as_ref() == signature.as_str())
    }
}

impl<T: AsRef<str>> SignatureLog for Vec<T> {
    fn contains_signature(&self, signature: &NotificationSignature) -> bool {
        self.as_slice().contains_signature(signature)
    }
}

impl<T, S> SignatureLog for HashSet<T, S>
where
    T: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn contains_signature(&self, signature: &NotificationSignature) -> bool {
        self.contains(signature.as_str())
    }
}

impl<T> SignatureLog for AHashSet<T>
where
    T: Borrow<str> + Hash + Eq,
{
    fn contains_signature(&self, signature: &NotificationSignature) -> bool {
        self.contains(signature.as_str())
    }
}

impl<T> SignatureLog for BTreeSet<T>
where
    T: Borrow<str> + Ord,
{
    fn contains_signature(&self, signature: &NotificationSignature) -> bool {
        self.contains(signature.as_str())
    }
}
