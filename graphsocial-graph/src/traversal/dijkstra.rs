//! Unit-weight Dijkstra shortest path finding.
//!
//! Every follow edge has weight 1, so the result matches BFS; the
//! implementation still uses Dijkstra's repeated min-extraction with a
//! binary heap, which keeps the pair query and the single-source variant
//! on one code path.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use graphsocial_core::UserId;
use serde::{Deserialize, Serialize};

use crate::store::{GraphError, GraphResult, GraphStore};

/// A shortest path through the graph.
///
/// The node sequence runs from source to target inclusive; `length` is the
/// number of edges, so a path from a user to itself has length 0 and a
/// single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// The users along the path, from source to target.
    pub nodes: Vec<UserId>,
    /// The number of edges in the path.
    pub length: usize,
}

impl PathResult {
    /// Create a path result from an ordered node sequence.
    #[must_use]
    pub fn new(nodes: Vec<UserId>) -> Self {
        let length = nodes.len().saturating_sub(1);
        Self { nodes, length }
    }

    /// Create a path for a single user (source == target).
    #[must_use]
    pub fn single_node(user: UserId) -> Self {
        Self { nodes: vec![user], length: 0 }
    }

    /// The starting user.
    #[must_use]
    pub fn source(&self) -> Option<&UserId> {
        self.nodes.first()
    }

    /// The destination user.
    #[must_use]
    pub fn target(&self) -> Option<&UserId> {
        self.nodes.last()
    }

    /// Whether the path has no edges (source == target).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Entry in the priority queue for Dijkstra's algorithm.
///
/// Ordered by distance (lower distance = higher priority).
#[derive(Debug, Clone, PartialEq, Eq)]
struct DijkstraEntry {
    user: UserId,
    distance: usize,
}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; ties resolved by
        // identifier so extraction order is deterministic.
        other.distance.cmp(&self.distance).then_with(|| other.user.cmp(&self.user))
    }
}

/// Shortest path between two users.
///
/// # Example
///
/// ```ignore
/// let path = ShortestPath::new("alice", "carol").find(&store)?;
/// assert_eq!(path.source().map(UserId::as_str), Some("alice"));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPath {
    source: UserId,
    target: UserId,
}

impl ShortestPath {
    /// Create a new shortest path query.
    pub fn new(source: impl Into<UserId>, target: impl Into<UserId>) -> Self {
        Self { source: source.into(), target: target.into() }
    }

    /// Find the shortest path, including the full node sequence.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UserNotFound`] if either endpoint is absent
    /// - [`GraphError::NoPathExists`] if the target is unreachable
    pub fn find(&self, store: &GraphStore) -> GraphResult<PathResult> {
        if !store.contains(&self.source) {
            return Err(GraphError::UserNotFound(self.source.clone()));
        }
        if !store.contains(&self.target) {
            return Err(GraphError::UserNotFound(self.target.clone()));
        }
        if self.source == self.target {
            return Ok(PathResult::single_node(self.source.clone()));
        }

        // Distance from source to each discovered node.
        let mut distances: HashMap<UserId, usize> = HashMap::new();
        // Predecessor of each node on its current best path.
        let mut parent: HashMap<UserId, UserId> = HashMap::new();
        // Nodes whose distance is final.
        let mut finalized: HashSet<UserId> = HashSet::new();
        let mut heap: BinaryHeap<DijkstraEntry> = BinaryHeap::new();

        distances.insert(self.source.clone(), 0);
        heap.push(DijkstraEntry { user: self.source.clone(), distance: 0 });

        while let Some(DijkstraEntry { user: current, distance: current_dist }) = heap.pop() {
            if finalized.contains(&current) {
                continue;
            }
            if current == self.target {
                return Ok(self.reconstruct(&parent));
            }
            finalized.insert(current.clone());

            // Stale heap entries carry an outdated, larger distance.
            if distances.get(&current).is_some_and(|&known| current_dist > known) {
                continue;
            }

            let Some(neighbors) = store.following(&current) else { continue };
            for neighbor in neighbors {
                if finalized.contains(neighbor) {
                    continue;
                }
                let new_dist = current_dist + 1;
                let is_better = match distances.get(neighbor) {
                    None => true,
                    Some(&existing) => new_dist < existing,
                };
                if is_better {
                    distances.insert(neighbor.clone(), new_dist);
                    parent.insert(neighbor.clone(), current.clone());
                    heap.push(DijkstraEntry { user: neighbor.clone(), distance: new_dist });
                }
            }
        }

        Err(GraphError::NoPathExists {
            src: self.source.clone(),
            target: self.target.clone(),
        })
    }

    /// Find only the hop count of the shortest path.
    ///
    /// # Errors
    ///
    /// Same conditions as [`find`](Self::find).
    pub fn distance(&self, store: &GraphStore) -> GraphResult<usize> {
        self.find(store).map(|path| path.length)
    }

    /// Walk the predecessor map backward from the target and reverse.
    fn reconstruct(&self, parent: &HashMap<UserId, UserId>) -> PathResult {
        let mut nodes = Vec::new();
        let mut current = self.target.clone();
        while current != self.source {
            nodes.push(current.clone());
            if let Some(prev) = parent.get(&current) {
                current = prev.clone();
            } else {
                break;
            }
        }
        nodes.push(self.source.clone());
        nodes.reverse();
        PathResult::new(nodes)
    }
}

/// Shortest-path distances from one user to every reachable user.
///
/// Runs the same unit-weight relaxation as [`ShortestPath`] but keeps all
/// final distances instead of stopping at a target.
#[derive(Debug, Clone)]
pub struct SingleSourceShortestPaths {
    source: UserId,
}

impl SingleSourceShortestPaths {
    /// Create a new single-source query.
    pub fn new(source: impl Into<UserId>) -> Self {
        Self { source: source.into() }
    }

    /// Compute distances to all reachable users.
    ///
    /// The source maps to 0; unreachable users are absent from the map.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if the source is absent.
    pub fn compute(&self, store: &GraphStore) -> GraphResult<HashMap<UserId, usize>> {
        if !store.contains(&self.source) {
            return Err(GraphError::UserNotFound(self.source.clone()));
        }

        let mut distances: HashMap<UserId, usize> = HashMap::new();
        let mut finalized: HashSet<UserId> = HashSet::new();
        let mut heap: BinaryHeap<DijkstraEntry> = BinaryHeap::new();

        distances.insert(self.source.clone(), 0);
        heap.push(DijkstraEntry { user: self.source.clone(), distance: 0 });

        while let Some(DijkstraEntry { user: current, distance: current_dist }) = heap.pop() {
            if finalized.contains(&current) {
                continue;
            }
            finalized.insert(current.clone());

            if distances.get(&current).is_some_and(|&known| current_dist > known) {
                continue;
            }

            let Some(neighbors) = store.following(&current) else { continue };
            for neighbor in neighbors {
                if finalized.contains(neighbor) {
                    continue;
                }
                let new_dist = current_dist + 1;
                let is_better = match distances.get(neighbor) {
                    None => true,
                    Some(&existing) => new_dist < existing,
                };
                if is_better {
                    distances.insert(neighbor.clone(), new_dist);
                    heap.push(DijkstraEntry { user: neighbor.clone(), distance: new_dist });
                }
            }
        }

        Ok(distances)
    }
}
