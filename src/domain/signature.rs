//! Notification signatures for duplicate detection.
//!
//! A signature identifies a notification by:
//! - Category identifier
//! - Application identifier
//! - Title
//! - Date, as whole seconds since the Unix epoch
//!
//! Two deliveries with the same signature are considered the same notification.
//! The signature is a plain string so that it can be persisted by the caller
//! and compared across process restarts.

use crate::domain::notification::{Category, Notification};
use std::borrow::Borrow;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator placed between signature components.
pub const SIGNATURE_SEPARATOR: &str = "~*~";

/// Placeholder used in place of the date when a notification has none.
pub const MISSING_DATE: &str = "none";

/// A deterministic fingerprint of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NotificationSignature(String);

impl NotificationSignature {
    /// Compute a signature from notification components.
    ///
    /// # Arguments
    /// * `category` - The notification category
    /// * `application_identifier` - The source application
    /// * `title` - The notification title
    /// * `date` - The notification date, if any
    pub fn new(
        category: Category,
        application_identifier: &str,
        title: &str,
        date: Option<SystemTime>,
    ) -> Self {
        let date = date
            .map(|date| unix_seconds(date).to_string())
            .unwrap_or_else(|| MISSING_DATE.to_string());

        let components = [
            category.raw().to_string(),
            application_identifier.to_string(),
            title.to_string(),
            date,
        ];

        NotificationSignature(components.join(SIGNATURE_SEPARATOR))
    }

    /// Compute the signature of a notification.
    pub fn of(notification: &Notification) -> Self {
        Self::new(
            notification.category(),
            notification.application_identifier(),
            notification.title(),
            notification.date(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for NotificationSignature {
    fn from(raw: String) -> Self {
        NotificationSignature(raw)
    }
}

impl From<&str> for NotificationSignature {
    fn from(raw: &str) -> Self {
        NotificationSignature(raw.to_string())
    }
}

impl AsRef<str> for NotificationSignature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NotificationSignature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whole seconds between the Unix epoch and `date`, truncated toward zero.
///
/// Dates before the epoch produce negative values.
pub fn unix_seconds(date: SystemTime) -> i64 {
    match date.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs())
            .map(|seconds| -seconds)
            .unwrap_or(i64::MIN),
    }
}
