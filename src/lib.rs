//! # ancs-admission
//!
//! Admission pipeline for Apple Notification Center Service (ANCS)
//! notifications relayed to a wearable.
//!
//! Every notification the phone reports is classified as either accepted
//! (forward it to the wearable, with the matching application and contact
//! configuration) or rejected (with exactly one reason). The pipeline is
//! stateless with respect to the user's settings: configuration snapshots
//! and the log of already sent signatures are passed in on every call.
//!
//! ## Quick Start
//!
//! ```rust
//! use ancs_admission::{
//!     AdmissionPipeline, ApplicationConfiguration, Category, Color, ContactConfiguration,
//!     Notification, SignatureCache, SupportedApplication, Vibration,
//! };
//! use std::time::{Duration, SystemTime};
//!
//! let pipeline = AdmissionPipeline::builder()
//!     .with_past_cutoff(Duration::from_secs(3600))
//!     .with_future_cutoff(Duration::from_secs(600))
//!     .build();
//!
//! let applications = vec![ApplicationConfiguration::new(
//!     SupportedApplication::new("Messages", "sms", vec!["com.apple.MobileSMS".into()], "Messages"),
//!     Color::Green,
//!     Vibration::TwoPulses,
//!     true,
//! )];
//! let contacts = vec![ContactConfiguration::new(
//!     "42",
//!     vec!["Jane Appleseed".into()],
//!     Color::Purple,
//!     Vibration::None,
//! )];
//! let sent = SignatureCache::new();
//!
//! let notification = Notification::builder(Category::Social, "com.apple.MobileSMS", "Jane Appleseed")
//!     .date(SystemTime::now())
//!     .build();
//!
//! let outcome = pipeline.evaluate(&notification, &sent, &applications, &contacts, true);
//! sent.record(&outcome);
//!
//! let admission = outcome.admission().unwrap();
//! assert_eq!(admission.presentation().secondary_color, Color::Purple);
//!
//! // The same notification again is a duplicate
//! let again = pipeline.evaluate(&notification, &sent, &applications, &contacts, true);
//! assert!(again.is_rejected());
//! ```
//!
//! ## Gates
//!
//! Gates run in a fixed order and the first failure wins:
//!
//! 1. **Dedup**: the notification's signature is already in the sent log
//!    (skipped for incoming calls)
//! 2. **Temporal**: missing date, older than the past cutoff, newer than the
//!    future cutoff, or flagged both silent and pre-existing (skipped for
//!    incoming calls)
//! 3. **Configuration**: application not configured or switched off, then
//!    the Inner Ring contacts test
//!
//! ## Observability
//!
//! Decisions are logged with `tracing` at `debug` level and counted in
//! [`AdmissionMetrics`]. Enable the `serde` feature to serialize the data
//! model.

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    configuration::{
        ApplicationConfiguration, Color, ContactConfiguration, Presentation, SupportedApplication,
        Vibration,
    },
    notification::{AncsVersion, Category, Notification, NotificationBuilder, NotificationFlags},
    outcome::{both, Admission, AdmissionOutcome},
    rejection::{NotifiedEvent, Rejection, RejectionReason},
    signature::NotificationSignature,
    window::DateWindow,
};

pub use application::{
    authorizer::{authorize_application, authorize_contact, supports_inner_ring},
    dedup::already_sent,
    metrics::{AdmissionMetrics, MetricsSnapshot},
    pipeline::{AdmissionPipeline, AdmissionPipelineBuilder},
    ports::{Clock, SignatureLog},
};

pub use infrastructure::{
    cache::{BuildError, SignatureCache},
    clock::{FixedClock, SystemClock},
};
