//! Duplicate detection against the sent signature log.

use crate::application::ports::SignatureLog;
use crate::domain::notification::Notification;
use crate::domain::signature::NotificationSignature;

/// Check whether `notification` has already been sent.
///
/// True iff the notification's signature is present in `log`. This check
/// applies to every category; the pipeline skips it for incoming calls.
pub fn already_sent<L>(log: &L, notification: &Notification) -> bool
where
    L: SignatureLog + ?Sized,
{
    log.contains_signature(&NotificationSignature::of(notification))
}
