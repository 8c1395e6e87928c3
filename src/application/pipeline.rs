//! Admission pipeline coordination.
//!
//! The pipeline runs a notification through its gates in a fixed order and
//! stops at the first rejection:
//!
//! 1. Dedup gate (skipped for incoming calls)
//! 2. Temporal gate
//! 3. Configuration gate: application and contact tests, merged so that an
//!    application rejection is reported ahead of a contact rejection

use crate::application::authorizer::{authorize_application, authorize_contact};
use crate::application::dedup::already_sent;
use crate::application::metrics::AdmissionMetrics;
use crate::application::ports::{Clock, SignatureLog};
use crate::domain::configuration::{ApplicationConfiguration, ContactConfiguration};
use crate::domain::notification::Notification;
use crate::domain::outcome::{both, Admission, AdmissionOutcome};
use crate::domain::rejection::{Rejection, RejectionReason};
use crate::domain::window::DateWindow;
use crate::infrastructure::clock::SystemClock;

use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, trace};

/// Builder for constructing an `AdmissionPipeline`.
#[derive(Debug, Default)]
pub struct AdmissionPipelineBuilder {
    window: DateWindow,
    clock: Option<Arc<dyn Clock>>,
}

impl AdmissionPipelineBuilder {
    /// Set how far in the past a notification may be dated.
    ///
    /// Default: one hour
    pub fn with_past_cutoff(mut self, cutoff: Duration) -> Self {
        self.window = DateWindow::new(cutoff, self.window.future_cutoff());
        self
    }

    /// Set how far in the future a notification may be dated.
    ///
    /// Default: ten minutes
    pub fn with_future_cutoff(mut self, cutoff: Duration) -> Self {
        self.window = DateWindow::new(self.window.past_cutoff(), cutoff);
        self
    }

    /// Replace both cutoffs at once.
    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Set a custom clock (mainly for testing).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the pipeline.
    ///
    /// Any pair of cutoffs is valid. Zero cutoffs on both sides admit only
    /// notifications dated exactly at the current time.
    pub fn build(self) -> AdmissionPipeline {
        AdmissionPipeline {
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            window: self.window,
            metrics: AdmissionMetrics::new(),
        }
    }
}

/// Classifies notifications as accepted or rejected.
///
/// The pipeline owns no configuration: every call receives the current
/// snapshots as borrowed parameters and never mutates them.
///
/// # Example
/// ```
/// use ancs_admission::{
///     AdmissionPipeline, ApplicationConfiguration, Category, Color, Notification,
///     NotificationSignature, SupportedApplication, Vibration,
/// };
/// use std::time::SystemTime;
///
/// let pipeline = AdmissionPipeline::new();
/// let applications = vec![ApplicationConfiguration::new(
///     SupportedApplication::new("Mail", "mail", vec!["com.apple.mobilemail".into()], "Mail"),
///     Color::Blue,
///     Vibration::OnePulse,
///     true,
/// )];
/// let sent: Vec<NotificationSignature> = Vec::new();
///
/// let notification = Notification::builder(Category::Email, "com.apple.mobilemail", "Inbox")
///     .date(SystemTime::now())
///     .build();
///
/// let outcome = pipeline.evaluate(&notification, &sent, &applications, &[], false);
/// assert!(outcome.is_accepted());
/// ```
#[derive(Debug, Clone)]
pub struct AdmissionPipeline {
    clock: Arc<dyn Clock>,
    window: DateWindow,
    metrics: AdmissionMetrics,
}

impl AdmissionPipeline {
    /// Create a pipeline with the default window and the system clock.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock::new()),
            window: DateWindow::default(),
            metrics: AdmissionMetrics::new(),
        }
    }

    /// Create a builder for configuring the pipeline.
    pub fn builder() -> AdmissionPipelineBuilder {
        AdmissionPipelineBuilder::default()
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Get a reference to the metrics.
    pub fn metrics(&self) -> &AdmissionMetrics {
        &self.metrics
    }

    /// Evaluate a notification at the clock's current time.
    ///
    /// # Arguments
    /// * `notification` - The notification to classify
    /// * `sent_signatures` - Signatures of notifications already handled
    /// * `applications` - Per-application configurations, in priority order
    /// * `contacts` - Inner Ring contact configurations, in priority order
    /// * `inner_ring_enabled` - The user's Inner Ring preference
    pub fn evaluate<L>(
        &self,
        notification: &Notification,
        sent_signatures: &L,
        applications: &[ApplicationConfiguration],
        contacts: &[ContactConfiguration],
        inner_ring_enabled: bool,
    ) -> AdmissionOutcome
    where
        L: SignatureLog + ?Sized,
    {
        self.evaluate_at(
            notification,
            sent_signatures,
            applications,
            contacts,
            inner_ring_enabled,
            self.clock.now(),
        )
    }

    /// Evaluate a notification as of `now`.
    ///
    /// For fixed arguments the outcome is always the same.
    pub fn evaluate_at<L>(
        &self,
        notification: &Notification,
        sent_signatures: &L,
        applications: &[ApplicationConfiguration],
        contacts: &[ContactConfiguration],
        inner_ring_enabled: bool,
        now: SystemTime,
    ) -> AdmissionOutcome
    where
        L: SignatureLog + ?Sized,
    {
        let outcome = match self.classify(
            notification,
            sent_signatures,
            applications,
            contacts,
            inner_ring_enabled,
            now,
        ) {
            Ok((application, contact)) => AdmissionOutcome::Accepted(Admission {
                notification: notification.clone(),
                application: application.clone(),
                contact: contact.cloned(),
            }),
            Err(reason) => AdmissionOutcome::Rejected(Rejection::new(notification.clone(), reason)),
        };

        match &outcome {
            AdmissionOutcome::Accepted(admission) => debug!(
                application = %admission.notification.application_identifier(),
                configuration = %admission.application.identifier(),
                contact = ?admission.contact.as_ref().map(|contact| contact.identifier.as_str()),
                "{}",
                admission
            ),
            AdmissionOutcome::Rejected(rejection) => debug!(
                application = %rejection.notification.application_identifier(),
                category = %rejection.notification.category(),
                reason = rejection.reason.name(),
                "{}",
                rejection
            ),
        }

        self.metrics.record(&outcome);
        outcome
    }

    fn classify<'a, L>(
        &self,
        notification: &Notification,
        sent_signatures: &L,
        applications: &'a [ApplicationConfiguration],
        contacts: &'a [ContactConfiguration],
        inner_ring_enabled: bool,
        now: SystemTime,
    ) -> Result<(&'a ApplicationConfiguration, Option<&'a ContactConfiguration>), RejectionReason>
    where
        L: SignatureLog + ?Sized,
    {
        let category = notification.category();

        if category.is_incoming_call() {
            trace!(
                application = %notification.application_identifier(),
                "incoming call, skipping duplicate and date checks"
            );
        } else if already_sent(sent_signatures, notification) {
            return Err(RejectionReason::AlreadySent);
        }

        let flags = notification.flags().unwrap_or_default();
        if let Some(reason) = self
            .window
            .validate(category, notification.date(), now, flags)
        {
            return Err(reason);
        }

        both(
            authorize_application(notification.application_identifier(), applications),
            authorize_contact(
                notification.application_identifier(),
                notification.title(),
                contacts,
                inner_ring_enabled,
            ),
        )
    }
}

impl Default for AdmissionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
