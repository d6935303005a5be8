//! GraphSocial Core
//!
//! This crate provides the fundamental types shared across GraphSocial:
//! user identifiers and user records.
//!
//! # Modules
//!
//! - [`types`] - Core data types (`UserId`, `UserRecord`)

pub mod types;

// Re-export commonly used types
pub use types::{UserId, UserRecord};
