//! Shortest-path algorithms over the social graph.
//!
//! All follow edges carry an implicit weight of 1, so "shortest" means
//! fewest hops. The algorithms are Dijkstra-style relaxations specialized
//! for unit weights: repeated min-extraction from a binary heap with a
//! predecessor map for path reconstruction.
//!
//! # Overview
//!
//! - [`ShortestPath`] - Shortest path between two users, with the full
//!   node sequence
//! - [`SingleSourceShortestPaths`] - Distances from one user to every
//!   reachable user; the building block for diameter computation
//!
//! # Example
//!
//! ```ignore
//! use graphsocial_graph::traversal::ShortestPath;
//!
//! let path = ShortestPath::new("alice", "carol").find(&store)?;
//! println!("{} hops via {:?}", path.length, path.nodes);
//! ```

mod dijkstra;

pub use dijkstra::{PathResult, ShortestPath, SingleSourceShortestPaths};
