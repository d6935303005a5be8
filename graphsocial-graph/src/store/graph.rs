//! The in-memory graph store.

use std::collections::BTreeMap;

use graphsocial_core::{UserId, UserRecord};

use super::{GraphError, GraphResult};

/// A node: one user record plus its outgoing follow edges.
///
/// Edges are identifiers of other nodes in the same store, kept in
/// insertion order. A node never owns the nodes it points to.
#[derive(Debug, Clone)]
struct Node {
    record: UserRecord,
    following: Vec<UserId>,
}

impl Node {
    fn new(record: UserRecord) -> Self {
        Self { record, following: Vec::new() }
    }
}

/// The in-memory directed social graph.
///
/// `GraphStore` owns every node, keyed by identifier. All mutations are
/// atomic from the caller's perspective: an operation either fully applies
/// or has no effect. The store performs no locking; an embedding service
/// must treat it as one shared mutable resource.
///
/// # Example
///
/// ```
/// use graphsocial_core::{UserId, UserRecord};
/// use graphsocial_graph::store::GraphStore;
///
/// let mut store = GraphStore::new();
/// store.insert(UserRecord::new("alice", "Alice", "1990-01-01", "555-0100", "Lisbon"))?;
/// store.insert(UserRecord::new("bob", "Bob", "1988-06-15", "555-0101", "Porto"))?;
/// store.follow(&UserId::new("alice"), &UserId::new("bob"))?;
///
/// assert_eq!(store.outdegree(&UserId::new("alice")), 1);
/// assert_eq!(store.indegree(&UserId::new("bob")), 1);
/// # Ok::<(), graphsocial_graph::store::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// All nodes, keyed by identifier. BTreeMap iteration order is the
    /// store's documented iteration order: ascending identifier.
    nodes: BTreeMap<UserId, Node>,
}

impl GraphStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a new user with zero outgoing edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateUser`] if a user with the same
    /// identifier already exists; the store is left unchanged.
    pub fn insert(&mut self, record: UserRecord) -> GraphResult<()> {
        if self.nodes.contains_key(&record.id) {
            return Err(GraphError::DuplicateUser(record.id));
        }
        self.nodes.insert(record.id.clone(), Node::new(record));
        Ok(())
    }

    /// Look up a user record by identifier.
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.nodes.get(id).map(|node| &node.record)
    }

    /// Whether a user with the given identifier exists.
    #[must_use]
    pub fn contains(&self, id: &UserId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Remove a user and every edge referencing it.
    ///
    /// The purge of incoming edges completes within the same operation;
    /// callers never observe a half-removed node. Removal is unconditional:
    /// any confirm-before-delete flow belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if the user does not exist.
    pub fn remove(&mut self, id: &UserId) -> GraphResult<UserRecord> {
        let node =
            self.nodes.remove(id).ok_or_else(|| GraphError::UserNotFound(id.clone()))?;
        for other in self.nodes.values_mut() {
            other.following.retain(|target| target != id);
        }
        Ok(node.record)
    }

    /// Create a follow edge from `follower` to `followed`.
    ///
    /// Self-follows are permitted; the no-duplicate invariant still applies.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if either user is absent, or
    /// [`GraphError::AlreadyFollowing`] if the edge already exists.
    pub fn follow(&mut self, follower: &UserId, followed: &UserId) -> GraphResult<()> {
        if !self.nodes.contains_key(followed) {
            return Err(GraphError::UserNotFound(followed.clone()));
        }
        let node = self
            .nodes
            .get_mut(follower)
            .ok_or_else(|| GraphError::UserNotFound(follower.clone()))?;
        if node.following.contains(followed) {
            return Err(GraphError::AlreadyFollowing {
                follower: follower.clone(),
                followed: followed.clone(),
            });
        }
        node.following.push(followed.clone());
        Ok(())
    }

    /// Break the follow edge from `follower` to `followed`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if either user is absent, or
    /// [`GraphError::NotFollowing`] if no such edge exists.
    pub fn unfollow(&mut self, follower: &UserId, followed: &UserId) -> GraphResult<()> {
        if !self.nodes.contains_key(followed) {
            return Err(GraphError::UserNotFound(followed.clone()));
        }
        let node = self
            .nodes
            .get_mut(follower)
            .ok_or_else(|| GraphError::UserNotFound(follower.clone()))?;
        match node.following.iter().position(|target| target == followed) {
            Some(index) => {
                node.following.remove(index);
                Ok(())
            }
            None => Err(GraphError::NotFollowing {
                follower: follower.clone(),
                followed: followed.clone(),
            }),
        }
    }

    /// The outgoing edges of a user, in insertion order.
    ///
    /// Returns `None` when the user does not exist, as opposed to an empty
    /// slice for a user who follows nobody.
    #[must_use]
    pub fn following(&self, id: &UserId) -> Option<&[UserId]> {
        self.nodes.get(id).map(|node| node.following.as_slice())
    }

    /// Iterate over all user identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &UserId> {
        self.nodes.keys()
    }

    /// Iterate over all user records in ascending identifier order.
    pub fn users(&self) -> impl Iterator<Item = &UserRecord> {
        self.nodes.values().map(|node| &node.record)
    }

    /// Number of edges across the whole store targeting `id`.
    ///
    /// Scans every node's edge list, O(V+E). Absent users have indegree 0.
    #[must_use]
    pub fn indegree(&self, id: &UserId) -> usize {
        self.nodes
            .values()
            .map(|node| node.following.iter().filter(|target| *target == id).count())
            .sum()
    }

    /// Size of the user's own outgoing edge list; 0 when absent.
    #[must_use]
    pub fn outdegree(&self, id: &UserId) -> usize {
        self.nodes.get(id).map_or(0, |node| node.following.len())
    }

    /// Total degree: indegree plus outdegree.
    #[must_use]
    pub fn degree(&self, id: &UserId) -> usize {
        self.indegree(id) + self.outdegree(id)
    }

    /// Export the graph topology as an edge list.
    ///
    /// One entry per node in store iteration order, each carrying the
    /// outgoing targets in edge order. This is the engine's only structural
    /// dump; rendering it into a concrete format is the caller's concern.
    #[must_use]
    pub fn edge_list(&self) -> Vec<(UserId, Vec<UserId>)> {
        self.nodes
            .iter()
            .map(|(id, node)| (id.clone(), node.following.clone()))
            .collect()
    }
}
