//! Network diameter computation.

use crate::store::{GraphResult, GraphStore};
use crate::traversal::SingleSourceShortestPaths;

/// Maximum finite shortest-path length over all source/target pairs.
///
/// Pairs with no connecting path contribute 0 rather than infinity, so a
/// disconnected graph reports the diameter of its best-connected region.
/// Computed by one single-source relaxation per user, an O(V³)-class cost
/// on dense graphs; acceptable at the hundreds-to-low-thousands node scale
/// this engine targets.
pub struct NetworkDiameter;

impl NetworkDiameter {
    /// Compute the diameter of the store.
    ///
    /// Empty and single-user stores have diameter 0.
    ///
    /// # Errors
    ///
    /// Propagates traversal errors; none occur for identifiers taken from
    /// the store itself.
    pub fn compute(store: &GraphStore) -> GraphResult<usize> {
        let mut diameter = 0;
        for source in store.ids() {
            let distances = SingleSourceShortestPaths::new(source.clone()).compute(store)?;
            for (target, distance) in &distances {
                if target != source && *distance > diameter {
                    diameter = *distance;
                }
            }
        }
        Ok(diameter)
    }
}
