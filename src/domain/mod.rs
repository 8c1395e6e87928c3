//! Domain layer - pure admission rules with no I/O.
//!
//! This layer contains the core concepts of notification admission:
//! - Notification records and signatures
//! - Application and contact configurations
//! - Identifier matching
//! - The temporal validity window
//! - Rejection reasons and admission outcomes
//!
//! All types in this layer are plain values and easily testable.

pub mod configuration;
pub mod matching;
pub mod notification;
pub mod outcome;
pub mod rejection;
pub mod signature;
pub mod window;
