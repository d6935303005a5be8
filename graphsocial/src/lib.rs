//! GraphSocial
//!
//! An in-memory directed social graph: users as nodes, follow
//! relationships as edges, with shortest-path, degree, and diameter
//! analytics and a textual edge-list export.
//!
//! # Features
//!
//! - **User management**: register, look up, and remove users
//! - **Follow graph**: create and break directed follow edges
//! - **Analytics**: shortest paths, degree rates, most-followed user,
//!   network diameter
//! - **Export**: edge-list dump and Graphviz DOT rendering
//!
//! # Example
//!
//! ```
//! use graphsocial::{SocialNetwork, UserId, UserRecord};
//!
//! let mut network = SocialNetwork::new();
//! network.register(UserRecord::new("alice", "Alice", "1990-01-01", "555-0100", "Lisbon"))?;
//! network.register(UserRecord::new("bob", "Bob", "1988-06-15", "555-0101", "Porto"))?;
//!
//! network.follow(&UserId::new("alice"), &UserId::new("bob"))?;
//!
//! let profile = network.profile(&UserId::new("bob"))?;
//! assert_eq!(profile.followers, 1);
//! # Ok::<(), graphsocial::Error>(())
//! ```

// Re-export core types
pub use graphsocial_core::{UserId, UserRecord};

// Re-export engine types
pub use graphsocial_graph::analytics::{most_followed, DegreeRates, NetworkDiameter};
pub use graphsocial_graph::store::{GraphError, GraphStore};
pub use graphsocial_graph::traversal::{PathResult, ShortestPath, SingleSourceShortestPaths};

pub mod dot;
pub mod error;
pub mod network;

pub use error::Error;
pub use network::{NetworkSummary, SocialNetwork, UserProfile};
