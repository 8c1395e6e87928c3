//! Application layer - orchestration of domain logic.
//!
//! - Dedup gate (sent signature lookup)
//! - Application and contact authorizers
//! - Admission pipeline (gate ordering, metrics, logging)
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters implement: the clock and the sent signature log.

pub mod authorizer;
pub mod dedup;
pub mod metrics;
pub mod pipeline;
pub mod ports;
