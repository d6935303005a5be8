//! Degree-based network metrics.

use graphsocial_core::UserId;
use serde::{Deserialize, Serialize};

use crate::store::{GraphError, GraphResult, GraphStore};

/// Mean indegree and outdegree across all users.
///
/// In a simple directed graph both means equal the edge count divided by
/// the user count; they are computed separately anyway so each can be
/// reported on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeRates {
    /// Arithmetic mean of indegree over all users.
    pub mean_indegree: f64,
    /// Arithmetic mean of outdegree over all users.
    pub mean_outdegree: f64,
}

impl DegreeRates {
    /// Compute the mean degree rates for the whole store.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyNetwork`] when the store has no users;
    /// the means are undefined rather than `0/0`.
    pub fn compute(store: &GraphStore) -> GraphResult<Self> {
        if store.is_empty() {
            return Err(GraphError::EmptyNetwork);
        }

        let mut indegree_total = 0usize;
        let mut outdegree_total = 0usize;
        for id in store.ids() {
            indegree_total += store.indegree(id);
            outdegree_total += store.outdegree(id);
        }

        let count = store.len() as f64;
        Ok(Self {
            mean_indegree: indegree_total as f64 / count,
            mean_outdegree: outdegree_total as f64 / count,
        })
    }
}

/// The user with the maximum indegree, together with that indegree.
///
/// Ties are broken by the store's iteration order, so the smallest
/// identifier among the tied users wins. Returns `None` only when the
/// store is empty.
#[must_use]
pub fn most_followed(store: &GraphStore) -> Option<(UserId, usize)> {
    let mut best: Option<(UserId, usize)> = None;
    for id in store.ids() {
        let followers = store.indegree(id);
        let is_better = match &best {
            None => true,
            Some((_, max)) => followers > *max,
        };
        if is_better {
            best = Some((id.clone(), followers));
        }
    }
    best
}
