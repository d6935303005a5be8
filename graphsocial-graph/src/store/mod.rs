//! Node and follow-edge storage operations.
//!
//! This module provides the [`GraphStore`], the single owner of all nodes
//! in the social graph. Each node holds one user record and an ordered list
//! of outgoing follow edges, stored as target identifiers rather than
//! references, so removing a node can never leave a dangling pointer.
//!
//! # Overview
//!
//! - [`GraphStore`] - Create, read, and delete users; create and break
//!   follow edges; degree queries and edge-list export
//! - [`GraphError`] / [`GraphResult`] - Error taxonomy for every fallible
//!   operation
//!
//! # Ordering
//!
//! Nodes are kept in a `BTreeMap` keyed by [`UserId`], so store iteration
//! is always ascending-identifier order. Outgoing edges keep insertion
//! order (first followed, first listed).
//!
//! # Example
//!
//! ```
//! use graphsocial_core::{UserId, UserRecord};
//! use graphsocial_graph::store::GraphStore;
//!
//! let mut store = GraphStore::new();
//! store.insert(UserRecord::new("alice", "Alice", "1990-01-01", "555-0100", "Lisbon"))?;
//! store.insert(UserRecord::new("bob", "Bob", "1988-06-15", "555-0101", "Porto"))?;
//!
//! store.follow(&UserId::new("alice"), &UserId::new("bob"))?;
//! assert_eq!(store.indegree(&UserId::new("bob")), 1);
//! # Ok::<(), graphsocial_graph::store::GraphError>(())
//! ```
//!
//! [`UserId`]: graphsocial_core::UserId

mod error;
mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::GraphStore;
