//! Application and contact (Inner Ring) authorization.
//!
//! Both tests are independent: neither depends on the other's success. The
//! pipeline runs both and merges them with [`crate::domain::outcome::both`].

use crate::domain::configuration::{
    find_application, find_contact, ApplicationConfiguration, ContactConfiguration,
};
use crate::domain::matching::eq_ignore_case;
use crate::domain::rejection::RejectionReason;

/// Applications whose notifications can be filtered by Inner Ring:
/// phone calls, FaceTime and Messages.
pub const INNER_RING_APPLICATIONS: [&str; 3] = [
    "com.apple.mobilephone",
    "com.apple.facetime",
    "com.apple.MobileSMS",
];

/// Find and check the configuration for an application.
///
/// # Returns
/// * `Ok(configuration)` - the first matching configuration, which is activated
/// * `Err(ApplicationNotActivated)` - the first match is switched off
/// * `Err(NoApplicationConfiguration)` - nothing matches
pub fn authorize_application<'a>(
    application_identifier: &str,
    configurations: &'a [ApplicationConfiguration],
) -> Result<&'a ApplicationConfiguration, RejectionReason> {
    match find_application(configurations, application_identifier) {
        Some(configuration) if configuration.activated => Ok(configuration),
        Some(_) => Err(RejectionReason::ApplicationNotActivated),
        None => Err(RejectionReason::NoApplicationConfiguration),
    }
}

/// Whether notifications from this application are subject to Inner Ring.
pub fn supports_inner_ring(application_identifier: &str) -> bool {
    INNER_RING_APPLICATIONS
        .iter()
        .any(|identifier| eq_ignore_case(application_identifier, identifier))
}

/// Perform the Inner Ring contacts test.
///
/// # Returns
/// * `Ok(Some(contact))` - the application supports Inner Ring and `title`
///   matches a configured contact
/// * `Ok(None)` - no contact matched, but Inner Ring is disabled or does not
///   apply to this application
/// * `Err(Contacts)` - Inner Ring is enabled, applies, and no contact matched
pub fn authorize_contact<'a>(
    application_identifier: &str,
    title: &str,
    configurations: &'a [ContactConfiguration],
    inner_ring_enabled: bool,
) -> Result<Option<&'a ContactConfiguration>, RejectionReason> {
    let supported = supports_inner_ring(application_identifier);

    if supported {
        if let Some(contact) = find_contact(configurations, title) {
            return Ok(Some(contact));
        }
    }

    if !inner_ring_enabled || !supported {
        Ok(None)
    } else {
        Err(RejectionReason::Contacts)
    }
}
