//! Admission outcomes and the result combinator used to build them.

use crate::domain::configuration::{ApplicationConfiguration, ContactConfiguration, Presentation};
use crate::domain::notification::Notification;
use crate::domain::rejection::{NotifiedEvent, Rejection, RejectionReason};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Combine two independently computed results.
///
/// Succeeds with both values when both succeed. Otherwise returns the left
/// failure if there is one, then the right failure.
///
/// # Example
/// ```
/// use ancs_admission::both;
///
/// let left: Result<u8, &str> = Err("left");
/// let right: Result<u8, &str> = Err("right");
/// assert_eq!(both(left, right), Err("left"));
///
/// assert_eq!(both(Ok::<_, &str>(1), Ok(2)), Ok((1, 2)));
/// assert_eq!(both(Ok(1), Err::<u8, _>("right")), Err("right"));
/// ```
pub fn both<A, B, E>(left: Result<A, E>, right: Result<B, E>) -> Result<(A, B), E> {
    match (left, right) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), _) => Err(e),
        (Ok(_), Err(e)) => Err(e),
    }
}

/// An accepted notification with the configurations that matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Admission {
    pub notification: Notification,
    pub application: ApplicationConfiguration,
    /// The matching Inner Ring contact, if any
    pub contact: Option<ContactConfiguration>,
}

impl Admission {
    /// The color and vibration to play on the wearable.
    pub fn presentation(&self) -> Presentation {
        Presentation::new(&self.application, self.contact.as_ref())
    }

    /// The analytics event for a relayed notification.
    pub fn notified_event(&self) -> NotifiedEvent {
        NotifiedEvent {
            application_identifier: self.notification.application_identifier().to_string(),
            sent: true,
            enabled: true,
            supported: true,
            version: self.notification.version(),
        }
    }

    /// Label for the per-application "notified" analytics event.
    pub fn analytics_label(&self) -> &str {
        &self.application.application.analytics_name
    }
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "notification {} accepted with {}",
            self.notification,
            self.presentation()
        )
    }
}

/// The classification of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdmissionOutcome {
    Accepted(Admission),
    Rejected(Rejection),
}

impl AdmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AdmissionOutcome::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, AdmissionOutcome::Rejected(_))
    }

    /// The classified notification.
    pub fn notification(&self) -> &Notification {
        match self {
            AdmissionOutcome::Accepted(admission) => &admission.notification,
            AdmissionOutcome::Rejected(rejection) => &rejection.notification,
        }
    }

    pub fn admission(&self) -> Option<&Admission> {
        match self {
            AdmissionOutcome::Accepted(admission) => Some(admission),
            AdmissionOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection_reason(&self) -> Option<&RejectionReason> {
        match self {
            AdmissionOutcome::Accepted(_) => None,
            AdmissionOutcome::Rejected(rejection) => Some(&rejection.reason),
        }
    }

    /// The analytics event for this outcome, if any.
    pub fn notified_event(&self) -> Option<NotifiedEvent> {
        match self {
            AdmissionOutcome::Accepted(admission) => Some(admission.notified_event()),
            AdmissionOutcome::Rejected(rejection) => rejection.notified_event(),
        }
    }

    // Both variants carry the whole notification
    #[allow(clippy::result_large_err)]
    pub fn into_result(self) -> Result<Admission, Rejection> {
        match self {
            AdmissionOutcome::Accepted(admission) => Ok(admission),
            AdmissionOutcome::Rejected(rejection) => Err(rejection),
        }
    }
}

impl From<Result<Admission, Rejection>> for AdmissionOutcome {
    fn from(result: Result<Admission, Rejection>) -> Self {
        match result {
            Ok(admission) => AdmissionOutcome::Accepted(admission),
            Err(rejection) => AdmissionOutcome::Rejected(rejection),
        }
    }
}

impl fmt::Display for AdmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionOutcome::Accepted(admission) => admission.fmt(f),
            AdmissionOutcome::Rejected(rejection) => rejection.fmt(f),
        }
    }
}
