//! Reasons a notification is not relayed to the wearable.

use crate::domain::notification::{AncsVersion, Notification, NotificationFlags};
use crate::domain::signature::unix_seconds;
use std::fmt;
use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a notification was rejected.
///
/// Exactly one reason is reported per rejected notification, chosen by the
/// pipeline's gate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectionReason {
    /// The notification's signature is already in the sent log.
    AlreadySent,
    /// The notification has no date and is not an incoming call.
    NoDate,
    /// The notification's date is before the past cutoff date.
    TooOld {
        notification_date: SystemTime,
        cutoff_date: SystemTime,
    },
    /// The notification's date is after the future cutoff date.
    TooNew {
        notification_date: SystemTime,
        cutoff_date: SystemTime,
    },
    /// The notification is both silent and pre-existing.
    Flags(NotificationFlags),
    /// A matching application configuration exists but is switched off.
    ApplicationNotActivated,
    /// No application configuration matches.
    NoApplicationConfiguration,
    /// Filtered by Inner Ring.
    Contacts,
}

impl RejectionReason {
    /// Number of distinct reasons.
    pub const COUNT: usize = 8;

    /// Short stable name, suitable for structured log fields.
    pub fn name(&self) -> &'static str {
        match self {
            RejectionReason::AlreadySent => "already_sent",
            RejectionReason::NoDate => "no_date",
            RejectionReason::TooOld { .. } => "too_old",
            RejectionReason::TooNew { .. } => "too_new",
            RejectionReason::Flags(_) => "flags",
            RejectionReason::ApplicationNotActivated => "application_not_activated",
            RejectionReason::NoApplicationConfiguration => "no_application_configuration",
            RejectionReason::Contacts => "contacts",
        }
    }

    /// Dense index in `0..COUNT`, in gate order.
    pub fn index(&self) -> usize {
        match self {
            RejectionReason::AlreadySent => 0,
            RejectionReason::NoDate => 1,
            RejectionReason::TooOld { .. } => 2,
            RejectionReason::TooNew { .. } => 3,
            RejectionReason::Flags(_) => 4,
            RejectionReason::ApplicationNotActivated => 5,
            RejectionReason::NoApplicationConfiguration => 6,
            RejectionReason::Contacts => 7,
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::AlreadySent => write!(f, "already sent"),
            RejectionReason::NoDate => write!(f, "no date"),
            RejectionReason::TooOld {
                notification_date,
                cutoff_date,
            } => write!(
                f,
                "too old (notification date {}, cutoff date {})",
                unix_seconds(*notification_date),
                unix_seconds(*cutoff_date)
            ),
            RejectionReason::TooNew {
                notification_date,
                cutoff_date,
            } => write!(
                f,
                "too new (notification date {}, cutoff date {})",
                unix_seconds(*notification_date),
                unix_seconds(*cutoff_date)
            ),
            RejectionReason::Flags(flags) => write!(f, "rejected by flags {:?}", flags),
            RejectionReason::ApplicationNotActivated => write!(f, "application not activated"),
            RejectionReason::NoApplicationConfiguration => {
                write!(f, "no application configuration")
            }
            RejectionReason::Contacts => write!(f, "did not pass contacts test"),
        }
    }
}

/// A rejected notification together with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rejection {
    pub notification: Notification,
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn new(notification: Notification, reason: RejectionReason) -> Self {
        Self {
            notification,
            reason,
        }
    }

    /// The analytics event for this rejection, if the reason is reported.
    ///
    /// Only configuration rejections are reported; duplicate and date
    /// rejections are routine and produce no event.
    pub fn notified_event(&self) -> Option<NotifiedEvent> {
        let (enabled, supported) = match self.reason {
            RejectionReason::ApplicationNotActivated => (false, true),
            RejectionReason::NoApplicationConfiguration => (false, false),
            RejectionReason::Contacts => (true, true),
            _ => return None,
        };

        Some(NotifiedEvent {
            application_identifier: self.notification.application_identifier().to_string(),
            sent: false,
            enabled,
            supported,
            version: self.notification.version(),
        })
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification {}: {}", self.notification, self.reason)
    }
}

impl std::error::Error for Rejection {}

/// Analytics record describing what happened to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NotifiedEvent {
    pub application_identifier: String,
    /// Whether the notification was relayed to the wearable
    pub sent: bool,
    /// Whether the user enabled the application
    pub enabled: bool,
    /// Whether the application has a configuration at all
    pub supported: bool,
    pub version: AncsVersion,
}
