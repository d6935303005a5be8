//! GraphSocial Graph
//!
//! This crate provides the in-memory directed graph engine for GraphSocial:
//! node and edge storage, shortest-path traversal, and network analytics.
//!
//! # Modules
//!
//! - [`store`] - Node and follow-edge storage operations
//! - [`traversal`] - Shortest-path algorithms
//! - [`analytics`] - Degree rates, most-followed lookup, network diameter

pub mod analytics;
pub mod store;
pub mod traversal;
