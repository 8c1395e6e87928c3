//! End-to-end admission scenarios against the public API.

use ancs_admission::{
    AdmissionOutcome, AdmissionPipeline, ApplicationConfiguration, Category, Color,
    ContactConfiguration, FixedClock, Notification, NotificationFlags, NotificationSignature,
    RejectionReason, SupportedApplication, Vibration,
};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const PHONE: &str = "com.apple.mobilephone";

fn now() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

fn application(identifier: &str, activated: bool) -> ApplicationConfiguration {
    ApplicationConfiguration::new(
        SupportedApplication::new(identifier, identifier, vec![identifier.to_string()], identifier),
        Color::Blue,
        Vibration::ThreePulses,
        activated,
    )
}

fn jane() -> ContactConfiguration {
    ContactConfiguration::new("7", vec!["Jane Doe".to_string()], Color::Red, Vibration::None)
}

fn dated(category: Category, app: &str, title: &str, date: SystemTime) -> Notification {
    Notification::builder(category, app, title).date(date).build()
}

fn pipeline() -> AdmissionPipeline {
    AdmissionPipeline::builder()
        .with_clock(Arc::new(FixedClock(now())))
        .build()
}

fn no_signatures() -> Vec<NotificationSignature> {
    Vec::new()
}

#[test]
fn test_full_success_scenario() {
    let notification = Notification::builder(Category::Other, PHONE, "Jane Doe")
        .date(now())
        .flags(NotificationFlags::empty())
        .build();
    let applications = vec![application(PHONE, true)];
    let contacts = vec![jane()];

    let outcome = pipeline().evaluate(&notification, &no_signatures(), &applications, &contacts, true);

    match outcome {
        AdmissionOutcome::Accepted(admission) => {
            assert_eq!(admission.notification, notification);
            assert_eq!(admission.application, applications[0]);
            assert_eq!(admission.contact, Some(jane()));
            assert_eq!(admission.presentation().vibration, Vibration::ThreePulses);
            assert_eq!(admission.presentation().secondary_color, Color::Red);
        }
        AdmissionOutcome::Rejected(rejection) => panic!("unexpected rejection: {}", rejection),
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let pipeline = pipeline();
    let notification = dated(Category::Social, PHONE, "Stranger", now());
    let applications = vec![application(PHONE, true)];
    let contacts = vec![jane()];

    let first = pipeline.evaluate(&notification, &no_signatures(), &applications, &contacts, true);
    for _ in 0..10 {
        let again = pipeline.evaluate(&notification, &no_signatures(), &applications, &contacts, true);
        assert_eq!(again, first);
    }
}

#[test]
fn test_duplicate_wins_over_every_other_gate() {
    // Dateless, unconfigured and already sent at once
    let notification = Notification::builder(Category::Email, "com.unknown", "Hi").build();
    let sent = vec![NotificationSignature::of(&notification)];

    let outcome = pipeline().evaluate(&notification, &sent, &[], &[], true);
    assert_eq!(outcome.rejection_reason(), Some(&RejectionReason::AlreadySent));
}

#[test]
fn test_duplicate_rejected_even_when_otherwise_valid() {
    let notification = dated(Category::Social, PHONE, "Jane Doe", now());
    let sent = vec![NotificationSignature::of(&notification)];

    let outcome = pipeline().evaluate(&notification, &sent, &[application(PHONE, true)], &[jane()], true);
    assert_eq!(outcome.rejection_reason(), Some(&RejectionReason::AlreadySent));
}

#[test]
fn test_incoming_call_bypasses_dedup_and_date_checks() {
    let call = Notification::builder(Category::IncomingCall, PHONE, "Jane Doe")
        .flags(NotificationFlags::SILENT | NotificationFlags::PRE_EXISTING)
        .build();
    let sent = vec![NotificationSignature::of(&call)];

    let outcome = pipeline().evaluate(&call, &sent, &[application(PHONE, true)], &[jane()], true);
    assert!(outcome.is_accepted());

    let ancient = dated(Category::IncomingCall, PHONE, "Jane Doe", UNIX_EPOCH);
    let outcome = pipeline().evaluate(&ancient, &sent, &[application(PHONE, true)], &[jane()], true);
    assert!(outcome.is_accepted());
}

#[test]
fn test_incoming_call_still_needs_configuration() {
    let call = Notification::builder(Category::IncomingCall, PHONE, "Stranger").build();

    let outcome = pipeline().evaluate(&call, &no_signatures(), &[], &[], false);
    assert_eq!(
        outcome.rejection_reason(),
        Some(&RejectionReason::NoApplicationConfiguration)
    );

    let outcome = pipeline().evaluate(&call, &no_signatures(), &[application(PHONE, true)], &[], true);
    assert_eq!(outcome.rejection_reason(), Some(&RejectionReason::Contacts));
}

#[test]
fn test_missing_date_rejected() {
    let notification = Notification::builder(Category::Social, PHONE, "Jane Doe").build();

    let outcome = pipeline().evaluate(&notification, &no_signatures(), &[application(PHONE, true)], &[jane()], true);
    assert_eq!(outcome.rejection_reason(), Some(&RejectionReason::NoDate));
}

#[test]
fn test_past_boundary_is_inclusive() {
    let pipeline = pipeline();
    let applications = vec![application("com.example", true)];
    let cutoff = now() - Duration::from_secs(3600);

    let on_boundary = dated(Category::News, "com.example", "Story", cutoff);
    assert!(pipeline
        .evaluate(&on_boundary, &no_signatures(), &applications, &[], true)
        .is_accepted());

    let before = dated(Category::News, "com.example", "Story", cutoff - Duration::from_secs(1));
    assert_eq!(
        pipeline
            .evaluate(&before, &no_signatures(), &applications, &[], true)
            .rejection_reason(),
        Some(&RejectionReason::TooOld {
            notification_date: cutoff - Duration::from_secs(1),
            cutoff_date: cutoff,
        })
    );
}

#[test]
fn test_future_boundary_is_inclusive() {
    let pipeline = pipeline();
    let applications = vec![application("com.example", true)];
    let cutoff = now() + Duration::from_secs(600);

    let on_boundary = dated(Category::News, "com.example", "Story", cutoff);
    assert!(pipeline
        .evaluate(&on_boundary, &no_signatures(), &applications, &[], true)
        .is_accepted());

    let after = dated(Category::News, "com.example", "Story", cutoff + Duration::from_secs(1));
    assert!(matches!(
        pipeline
            .evaluate(&after, &no_signatures(), &applications, &[], true)
            .rejection_reason(),
        Some(RejectionReason::TooNew { .. })
    ));
}

#[test]
fn test_custom_cutoffs_apply() {
    let pipeline = AdmissionPipeline::builder()
        .with_past_cutoff(Duration::from_secs(10))
        .with_future_cutoff(Duration::ZERO)
        .build();
    let applications = vec![application("com.example", true)];

    let recent = dated(Category::News, "com.example", "A", now() - Duration::from_secs(10));
    let stale = dated(Category::News, "com.example", "B", now() - Duration::from_secs(11));
    let ahead = dated(Category::News, "com.example", "C", now() + Duration::from_secs(1));

    assert!(pipeline
        .evaluate_at(&recent, &no_signatures(), &applications, &[], true, now())
        .is_accepted());
    assert!(matches!(
        pipeline
            .evaluate_at(&stale, &no_signatures(), &applications, &[], true, now())
            .rejection_reason(),
        Some(RejectionReason::TooOld { .. })
    ));
    assert!(matches!(
        pipeline
            .evaluate_at(&ahead, &no_signatures(), &applications, &[], true, now())
            .rejection_reason(),
        Some(RejectionReason::TooNew { .. })
    ));
}

#[test]
fn test_silent_pre_existing_notifications_rejected() {
    let applications = vec![application("com.example", true)];
    let both_flags = NotificationFlags::SILENT | NotificationFlags::PRE_EXISTING;

    let flagged = Notification::builder(Category::Social, "com.example", "Ping")
        .date(now())
        .flags(both_flags | NotificationFlags::IMPORTANT)
        .build();
    assert_eq!(
        pipeline()
            .evaluate(&flagged, &no_signatures(), &applications, &[], true)
            .rejection_reason(),
        Some(&RejectionReason::Flags(both_flags | NotificationFlags::IMPORTANT))
    );

    let silent_only = Notification::builder(Category::Social, "com.example", "Ping")
        .date(now())
        .flags(NotificationFlags::SILENT)
        .build();
    assert!(pipeline()
        .evaluate(&silent_only, &no_signatures(), &applications, &[], true)
        .is_accepted());
}

#[test]
fn test_date_checks_run_before_flags() {
    let stale_and_flagged = Notification::builder(Category::Social, "com.example", "Ping")
        .date(now() - Duration::from_secs(7200))
        .flags(NotificationFlags::SILENT | NotificationFlags::PRE_EXISTING)
        .build();

    assert!(matches!(
        pipeline()
            .evaluate(&stale_and_flagged, &no_signatures(), &[application("com.example", true)], &[], true)
            .rejection_reason(),
        Some(RejectionReason::TooOld { .. })
    ));
}

#[test]
fn test_application_gate() {
    let applications = vec![application("com.on", true), application("com.off", false)];

    let outcome = pipeline().evaluate(
        &dated(Category::News, "com.off", "x", now()),
        &no_signatures(),
        &applications,
        &[],
        false,
    );
    assert_eq!(
        outcome.rejection_reason(),
        Some(&RejectionReason::ApplicationNotActivated)
    );

    let outcome = pipeline().evaluate(
        &dated(Category::News, "com.missing", "x", now()),
        &no_signatures(),
        &applications,
        &[],
        false,
    );
    assert_eq!(
        outcome.rejection_reason(),
        Some(&RejectionReason::NoApplicationConfiguration)
    );

    let outcome = pipeline().evaluate(
        &dated(Category::News, "com.on", "x", now()),
        &no_signatures(),
        &applications,
        &[],
        false,
    );
    assert_eq!(outcome.admission().map(|a| &a.application), Some(&applications[0]));
}

#[test]
fn test_first_matching_application_wins() {
    let applications = vec![application("com.dup", false), application("com.dup", true)];

    let outcome = pipeline().evaluate(
        &dated(Category::News, "com.dup", "x", now()),
        &no_signatures(),
        &applications,
        &[],
        false,
    );
    assert_eq!(
        outcome.rejection_reason(),
        Some(&RejectionReason::ApplicationNotActivated)
    );
}

#[test]
fn test_notified_event_mapping() {
    let applications = vec![application(PHONE, true), application("com.off", false)];
    let pipeline = pipeline();

    let accepted = pipeline.evaluate(&dated(Category::Social, PHONE, "Jane Doe", now()), &no_signatures(), &applications, &[jane()], true);
    let event = accepted.notified_event().unwrap();
    assert!(event.sent && event.enabled && event.supported);
    assert_eq!(accepted.admission().unwrap().analytics_label(), PHONE);

    let off = pipeline.evaluate(&dated(Category::Social, "com.off", "x", now()), &no_signatures(), &applications, &[], true);
    let event = off.notified_event().unwrap();
    assert!(!event.sent && !event.enabled && event.supported);

    let missing = pipeline.evaluate(&dated(Category::Social, "com.none", "x", now()), &no_signatures(), &applications, &[], true);
    let event = missing.notified_event().unwrap();
    assert!(!event.sent && !event.enabled && !event.supported);

    let contacts = pipeline.evaluate(&dated(Category::Social, PHONE, "Stranger", now()), &no_signatures(), &applications, &[jane()], true);
    let event = contacts.notified_event().unwrap();
    assert!(!event.sent && event.enabled && event.supported);

    let stale = pipeline.evaluate(&Notification::builder(Category::Social, PHONE, "Jane Doe").build(), &no_signatures(), &applications, &[jane()], true);
    assert_eq!(stale.notified_event(), None);
}

#[test]
fn test_metrics_follow_outcomes() {
    let pipeline = pipeline();
    let applications = vec![application("com.example", true)];

    pipeline.evaluate(&dated(Category::News, "com.example", "a", now()), &no_signatures(), &applications, &[], true);
    pipeline.evaluate(&Notification::builder(Category::News, "com.example", "b").build(), &no_signatures(), &applications, &[], true);
    pipeline.evaluate(&dated(Category::News, "com.other", "c", now()), &no_signatures(), &applications, &[], true);

    let snapshot = pipeline.metrics().snapshot();
    assert_eq!(snapshot.accepted, 1);
    assert_eq!(snapshot.no_date, 1);
    assert_eq!(snapshot.no_application_configuration, 1);
    assert_eq!(snapshot.total(), 3);
}
