//! Aggregate network analytics.
//!
//! Read-only metrics computed over the whole store:
//!
//! - [`DegreeRates`] - Mean indegree and outdegree across all users
//! - [`most_followed`] - The user with the maximum indegree
//! - [`NetworkDiameter`] - Maximum finite shortest-path length over all
//!   source/target pairs
//!
//! All of these iterate the store in its native ascending-identifier
//! order, so tie-breaking and pair enumeration are deterministic.

mod degree;
mod diameter;

pub use degree::{most_followed, DegreeRates};
pub use diameter::NetworkDiameter;
