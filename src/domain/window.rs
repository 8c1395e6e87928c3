//! Temporal validity window for notification dates.
//!
//! Notifications are only relayed when their reported date lies within a
//! window around the current time. Incoming calls bypass the window entirely.
//!
//! Some system sources report stale dates for notifications that are still
//! fresh (SMS and Mail in particular), so a notification is not rejected just
//! for looking old when the window is generous. Instead, notifications flagged
//! as both silent and pre-existing are rejected even when their date is
//! within the window.

use crate::domain::notification::{Category, NotificationFlags};
use crate::domain::rejection::RejectionReason;
use std::time::{Duration, SystemTime};

/// Default tolerance for notifications dated in the past (one hour).
pub const DEFAULT_PAST_CUTOFF: Duration = Duration::from_secs(3600);

/// Default tolerance for notifications dated in the future (ten minutes).
pub const DEFAULT_FUTURE_CUTOFF: Duration = Duration::from_secs(600);

/// Past and future tolerance around the current time.
///
/// Both boundaries are inclusive: a notification dated exactly on a cutoff
/// date passes.
///
/// # Example
/// ```
/// use ancs_admission::{Category, DateWindow, NotificationFlags, RejectionReason};
/// use std::time::{Duration, SystemTime};
///
/// let window = DateWindow::default();
/// let now = SystemTime::now();
///
/// let on_boundary = now - Duration::from_secs(3600);
/// assert_eq!(
///     window.validate(Category::Social, Some(on_boundary), now, NotificationFlags::empty()),
///     None
/// );
///
/// let too_old = on_boundary - Duration::from_secs(1);
/// assert!(matches!(
///     window.validate(Category::Social, Some(too_old), now, NotificationFlags::empty()),
///     Some(RejectionReason::TooOld { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    past_cutoff: Duration,
    future_cutoff: Duration,
}

impl DateWindow {
    /// Create a new window.
    ///
    /// # Arguments
    /// * `past_cutoff` - How far before now a notification may be dated
    /// * `future_cutoff` - How far after now a notification may be dated
    pub fn new(past_cutoff: Duration, future_cutoff: Duration) -> Self {
        Self {
            past_cutoff,
            future_cutoff,
        }
    }

    pub fn past_cutoff(&self) -> Duration {
        self.past_cutoff
    }

    pub fn future_cutoff(&self) -> Duration {
        self.future_cutoff
    }

    /// Whether the window only admits notifications dated exactly now.
    pub fn is_empty(&self) -> bool {
        self.past_cutoff.is_zero() && self.future_cutoff.is_zero()
    }

    /// The earliest acceptable date, or `None` if it is not representable.
    pub fn past_cutoff_date(&self, now: SystemTime) -> Option<SystemTime> {
        now.checked_sub(self.past_cutoff)
    }

    /// The latest acceptable date, or `None` if it is not representable.
    pub fn future_cutoff_date(&self, now: SystemTime) -> Option<SystemTime> {
        now.checked_add(self.future_cutoff)
    }

    /// Check a notification's date and flags against the window.
    ///
    /// Returns `None` when the notification passes.
    ///
    /// # Arguments
    /// * `category` - Incoming calls always pass
    /// * `date` - The notification date, if any
    /// * `now` - The current time
    /// * `flags` - The notification flags (empty when not reported)
    pub fn validate(
        &self,
        category: Category,
        date: Option<SystemTime>,
        now: SystemTime,
        flags: NotificationFlags,
    ) -> Option<RejectionReason> {
        if category.is_incoming_call() {
            return None;
        }

        let date = match date {
            Some(date) => date,
            None => return Some(RejectionReason::NoDate),
        };

        // An unrepresentable cutoff lies beyond every possible date
        if let Some(cutoff_date) = self.past_cutoff_date(now) {
            if date < cutoff_date {
                return Some(RejectionReason::TooOld {
                    notification_date: date,
                    cutoff_date,
                });
            }
        }

        if let Some(cutoff_date) = self.future_cutoff_date(now) {
            if date > cutoff_date {
                return Some(RejectionReason::TooNew {
                    notification_date: date,
                    cutoff_date,
                });
            }
        }

        flags_rejection(flags)
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAST_CUTOFF, DEFAULT_FUTURE_CUTOFF)
    }
}

/// Reject notifications that are both silent and pre-existing.
///
/// Either flag alone is not enough.
pub fn flags_rejection(flags: NotificationFlags) -> Option<RejectionReason> {
    if flags.contains(NotificationFlags::SILENT | NotificationFlags::PRE_EXISTING) {
        Some(RejectionReason::Flags(flags))
    } else {
        None
    }
}
