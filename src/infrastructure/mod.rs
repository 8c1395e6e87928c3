//! Infrastructure layer - external adapters.
//!
//! - Clock abstraction (system, fixed, mock)
//! - Bounded signature cache for callers that keep the sent log in memory

pub mod cache;
pub mod clock;

/// Mock implementations for testing.
///
/// Only available with the `test-helpers` feature, or during test builds.
#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;
