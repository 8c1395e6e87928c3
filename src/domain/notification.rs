//! ANCS notification records.
//!
//! A [`Notification`] is produced once per inbound event by the transport layer
//! and never changes afterwards. The admission pipeline only reads it.

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The app category reported by ANCS for a notification.
///
/// Discriminants are the category identifiers used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Category {
    #[default]
    Other = 0,
    IncomingCall = 1,
    MissedCall = 2,
    Voicemail = 3,
    Social = 4,
    Schedule = 5,
    Email = 6,
    News = 7,
    HealthAndFitness = 8,
    BusinessAndFinance = 9,
    Location = 10,
    Entertainment = 11,
}

impl Category {
    /// Map a raw category identifier to a category.
    ///
    /// Unknown identifiers map to [`Category::Other`].
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Category::IncomingCall,
            2 => Category::MissedCall,
            3 => Category::Voicemail,
            4 => Category::Social,
            5 => Category::Schedule,
            6 => Category::Email,
            7 => Category::News,
            8 => Category::HealthAndFitness,
            9 => Category::BusinessAndFinance,
            10 => Category::Location,
            11 => Category::Entertainment,
            _ => Category::Other,
        }
    }

    /// The raw category identifier.
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Whether this is an incoming phone call.
    pub fn is_incoming_call(self) -> bool {
        self == Category::IncomingCall
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    /// Parse a numerical category string such as `"1"` or `"7"`.
    ///
    /// Anything that is not a known identifier yields [`Category::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<u8>()
            .map(Category::from_raw)
            .unwrap_or(Category::Other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Other => "other",
            Category::IncomingCall => "incoming-call",
            Category::MissedCall => "missed-call",
            Category::Voicemail => "voicemail",
            Category::Social => "social",
            Category::Schedule => "schedule",
            Category::Email => "email",
            Category::News => "news",
            Category::HealthAndFitness => "health-and-fitness",
            Category::BusinessAndFinance => "business-and-finance",
            Category::Location => "location",
            Category::Entertainment => "entertainment",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// ANCS event flags attached to a notification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct NotificationFlags: u8 {
        const SILENT = 1 << 0;
        const IMPORTANT = 1 << 1;
        const PRE_EXISTING = 1 << 2;
        const POSITIVE_ACTION = 1 << 3;
        const NEGATIVE_ACTION = 1 << 4;
    }
}

/// The ANCS protocol version a notification was received with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AncsVersion {
    #[default]
    V1,
    V2,
}

/// A notification forwarded from the phone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Notification {
    version: AncsVersion,
    category: Category,
    application_identifier: String,
    title: String,
    date: Option<SystemTime>,
    message: Option<String>,
    flags: Option<NotificationFlags>,
}

impl Notification {
    /// Start building a notification from its required fields.
    ///
    /// # Example
    /// ```
    /// use ancs_admission::{Category, Notification, NotificationFlags};
    /// use std::time::SystemTime;
    ///
    /// let notification = Notification::builder(Category::Social, "com.example.chat", "Jane Doe")
    ///     .date(SystemTime::now())
    ///     .flags(NotificationFlags::IMPORTANT)
    ///     .build();
    ///
    /// assert_eq!(notification.title(), "Jane Doe");
    /// ```
    pub fn builder(
        category: Category,
        application_identifier: impl Into<String>,
        title: impl Into<String>,
    ) -> NotificationBuilder {
        NotificationBuilder {
            notification: Notification {
                version: AncsVersion::default(),
                category,
                application_identifier: application_identifier.into(),
                title: title.into(),
                date: None,
                message: None,
                flags: None,
            },
        }
    }

    pub fn version(&self) -> AncsVersion {
        self.version
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The source app's identifier, typically reverse DNS.
    pub fn application_identifier(&self) -> &str {
        &self.application_identifier
    }

    /// The notification title. For calls and SMS this is the contact name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The date reported by ANCS, if any.
    pub fn date(&self) -> Option<SystemTime> {
        self.date
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The flags reported by the peripheral, if its firmware reports them.
    pub fn flags(&self) -> Option<NotificationFlags> {
        self.flags
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} \"{}\"",
            self.category, self.application_identifier, self.title
        )?;
        match self.date.map(crate::domain::signature::unix_seconds) {
            Some(seconds) => write!(f, " at {}", seconds),
            None => write!(f, " (no date)"),
        }
    }
}

/// Builder for [`Notification`].
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    notification: Notification,
}

impl NotificationBuilder {
    pub fn version(mut self, version: AncsVersion) -> Self {
        self.notification.version = version;
        self
    }

    pub fn date(mut self, date: SystemTime) -> Self {
        self.notification.date = Some(date);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.notification.message = Some(message.into());
        self
    }

    pub fn flags(mut self, flags: NotificationFlags) -> Self {
        self.notification.flags = Some(flags);
        self
    }

    pub fn build(self) -> Notification {
        self.notification
    }
}
