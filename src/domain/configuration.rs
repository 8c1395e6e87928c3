//! User presentation configurations for applications and contacts.
//!
//! These are read-only snapshots owned by the external settings store.

use crate::domain::matching::contains_trimmed;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LED colors the wearable can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// No color is shown.
    #[default]
    None,
    Blue,
    Green,
    Yellow,
    Purple,
    Red,
}

impl Color {
    const ALL: [Color; 6] = [
        Color::None,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Red,
    ];

    /// The stable settings index of this color.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by settings index. Unknown indices map to [`Color::None`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// Vibration patterns the wearable can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Vibration {
    #[default]
    None,
    OnePulse,
    TwoPulses,
    ThreePulses,
    FourPulses,
    FivePulses,
}

impl Vibration {
    const ALL: [Vibration; 6] = [
        Vibration::None,
        Vibration::OnePulse,
        Vibration::TwoPulses,
        Vibration::ThreePulses,
        Vibration::FourPulses,
        Vibration::FivePulses,
    ];

    /// The stable settings index, equal to the number of pulses.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a vibration by settings index. Unknown indices map to [`Vibration::None`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// An application the user can configure notifications for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SupportedApplication {
    /// Display name
    pub name: String,
    /// URL scheme, also used as the configuration's stable identifier
    pub scheme: String,
    /// Every bundle identifier the application may report
    pub identifiers: Vec<String>,
    /// Name reported to analytics
    pub analytics_name: String,
}

impl SupportedApplication {
    pub fn new(
        name: impl Into<String>,
        scheme: impl Into<String>,
        identifiers: Vec<String>,
        analytics_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scheme: scheme.into(),
            identifiers,
            analytics_name: analytics_name.into(),
        }
    }

    /// Whether `application_identifier` names this application.
    ///
    /// Configured identifiers are trimmed to the received identifier's length
    /// and compared case-insensitively.
    pub fn matches(&self, application_identifier: &str) -> bool {
        contains_trimmed(&self.identifiers, application_identifier)
    }
}

/// Notification settings for one application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApplicationConfiguration {
    pub application: SupportedApplication,
    pub color: Color,
    pub vibration: Vibration,
    /// Whether notifications from this application are forwarded at all
    pub activated: bool,
}

impl ApplicationConfiguration {
    pub fn new(
        application: SupportedApplication,
        color: Color,
        vibration: Vibration,
        activated: bool,
    ) -> Self {
        Self {
            application,
            color,
            vibration,
            activated,
        }
    }

    /// The configuration's stable identifier (the application's scheme).
    pub fn identifier(&self) -> &str {
        &self.application.scheme
    }
}

/// Notification settings for one Inner Ring contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactConfiguration {
    /// Stable identifier of the contact in the address book
    pub identifier: String,
    /// Names matched against notification titles; the first is the display name
    pub names: Vec<String>,
    pub color: Color,
    /// Vibration override; [`Vibration::None`] keeps the application's vibration
    pub vibration: Vibration,
}

impl ContactConfiguration {
    pub fn new(
        identifier: impl Into<String>,
        names: Vec<String>,
        color: Color,
        vibration: Vibration,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            names,
            color,
            vibration,
        }
    }

    /// The name shown to the user, if the contact has any.
    pub fn display_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Whether a notification `title` refers to this contact.
    pub fn matches(&self, title: &str) -> bool {
        contains_trimmed(&self.names, title)
    }
}

/// Find the first application configuration matching `application_identifier`.
pub fn find_application<'a>(
    configurations: &'a [ApplicationConfiguration],
    application_identifier: &str,
) -> Option<&'a ApplicationConfiguration> {
    configurations
        .iter()
        .find(|configuration| configuration.application.matches(application_identifier))
}

/// Find the first contact configuration whose names match `title`.
pub fn find_contact<'a>(
    configurations: &'a [ContactConfiguration],
    title: &str,
) -> Option<&'a ContactConfiguration> {
    configurations
        .iter()
        .find(|configuration| configuration.matches(title))
}

/// The color and vibration to play for an accepted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Presentation {
    pub color: Color,
    /// Contact color shown after the application color, or [`Color::None`]
    pub secondary_color: Color,
    pub vibration: Vibration,
}

impl Presentation {
    /// Combine an application configuration with an optional contact override.
    pub fn new(
        application: &ApplicationConfiguration,
        contact: Option<&ContactConfiguration>,
    ) -> Self {
        let vibration = contact
            .map(|contact| contact.vibration)
            .filter(|vibration| *vibration != Vibration::None)
            .unwrap_or(application.vibration);

        Self {
            color: application.color,
            secondary_color: contact.map(|contact| contact.color).unwrap_or_default(),
            vibration,
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color={:?} secondary={:?} vibration={:?}",
            self.color, self.secondary_color, self.vibration
        )
    }
}
