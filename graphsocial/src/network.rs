//! Main social network interface.
//!
//! This module provides the [`SocialNetwork`] struct, the primary entry
//! point for interacting with a GraphSocial network. It composes a
//! [`GraphStore`] and delegates to it, keeping the engine's internals out
//! of the caller's reach.
//!
//! # Persistence
//!
//! The network itself never persists anything. An external loader
//! populates it through [`SocialNetwork::load`]; an external writer
//! observes the results of the mutating operations (which also emit
//! `tracing` events) and mirrors them into durable storage.
//!
//! # Examples
//!
//! ```
//! use graphsocial::{SocialNetwork, UserId, UserRecord};
//!
//! let mut network = SocialNetwork::new();
//! network.register(UserRecord::new("alice", "Alice", "1990-01-01", "555-0100", "Lisbon"))?;
//! network.register(UserRecord::new("bob", "Bob", "1988-06-15", "555-0101", "Porto"))?;
//! network.follow(&UserId::new("alice"), &UserId::new("bob"))?;
//!
//! let summary = network.summary()?;
//! assert_eq!(summary.user_count, 2);
//! assert_eq!(summary.most_followed, UserId::new("bob"));
//! # Ok::<(), graphsocial::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use graphsocial_core::{UserId, UserRecord};
use graphsocial_graph::analytics::{most_followed, DegreeRates, NetworkDiameter};
use graphsocial_graph::store::{GraphError, GraphStore};
use graphsocial_graph::traversal::{PathResult, ShortestPath};

use crate::error::Result;

/// A user record together with its position in the follow graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The stored user record.
    pub record: UserRecord,
    /// Number of users following this one.
    pub followers: usize,
    /// The users this one follows, in follow order.
    pub following: Vec<UserId>,
}

/// Aggregate report over the whole network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// Number of registered users.
    pub user_count: usize,
    /// Arithmetic mean of indegree over all users.
    pub mean_indegree: f64,
    /// Arithmetic mean of outdegree over all users.
    pub mean_outdegree: f64,
    /// Maximum finite shortest-path length between any two users.
    pub diameter: usize,
    /// The user with the most followers (smallest identifier on ties).
    pub most_followed: UserId,
    /// How many followers that user has.
    pub most_followed_count: usize,
}

/// The main social network handle.
///
/// `SocialNetwork` holds a [`GraphStore`] and delegates to it rather than
/// exposing the engine's mutable internals. Every operation returns its
/// own result value; there is no shared error state.
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    /// The underlying graph engine.
    store: GraphStore,
}

impl SocialNetwork {
    /// Create an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying graph engine.
    ///
    /// Useful for callers that want to run engine queries directly, e.g.
    /// [`ShortestPath`] or the analytics in
    /// [`graphsocial_graph::analytics`].
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Number of registered users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.store.len()
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateUser`] if the identifier is taken.
    pub fn register(&mut self, record: UserRecord) -> Result<()> {
        let id = record.id.clone();
        self.store.insert(record)?;
        info!(user = %id, "registered user");
        Ok(())
    }

    /// Remove a user and every follow edge referencing them.
    ///
    /// Unconditional: any confirm-before-delete flow is the caller's
    /// responsibility, invoked before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if the user does not exist.
    pub fn unregister(&mut self, id: &UserId) -> Result<UserRecord> {
        let record = self.store.remove(id)?;
        info!(user = %id, "removed user");
        Ok(record)
    }

    /// Make `follower` follow `followed`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if either user is absent, or
    /// [`GraphError::AlreadyFollowing`] if the edge already exists.
    pub fn follow(&mut self, follower: &UserId, followed: &UserId) -> Result<()> {
        self.store.follow(follower, followed)?;
        info!(follower = %follower, followed = %followed, "follow created");
        Ok(())
    }

    /// Make `follower` stop following `followed`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if either user is absent, or
    /// [`GraphError::NotFollowing`] if no such edge exists.
    pub fn unfollow(&mut self, follower: &UserId, followed: &UserId) -> Result<()> {
        self.store.unfollow(follower, followed)?;
        info!(follower = %follower, followed = %followed, "follow removed");
        Ok(())
    }

    /// Look up one user's profile: record, follower count, follow list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if the user does not exist.
    pub fn profile(&self, id: &UserId) -> Result<UserProfile> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| GraphError::UserNotFound(id.clone()))?
            .clone();
        let following = self.store.following(id).unwrap_or_default().to_vec();
        Ok(UserProfile { followers: self.store.indegree(id), record, following })
    }

    /// Profiles of every user, in ascending identifier order.
    #[must_use]
    pub fn profiles(&self) -> Vec<UserProfile> {
        self.store
            .users()
            .map(|record| UserProfile {
                record: record.clone(),
                followers: self.store.indegree(&record.id),
                following: self.store.following(&record.id).unwrap_or_default().to_vec(),
            })
            .collect()
    }

    /// Shortest follow chain from one user to another.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UserNotFound`] if either endpoint is absent,
    /// or [`GraphError::NoPathExists`] if no chain connects them.
    pub fn shortest_path(&self, source: &UserId, target: &UserId) -> Result<PathResult> {
        Ok(ShortestPath::new(source.clone(), target.clone()).find(&self.store)?)
    }

    /// Aggregate report: user count, mean degrees, diameter, most-followed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyNetwork`] when no users are registered.
    pub fn summary(&self) -> Result<NetworkSummary> {
        let rates = DegreeRates::compute(&self.store)?;
        let diameter = NetworkDiameter::compute(&self.store)?;
        let (most_followed, most_followed_count) =
            most_followed(&self.store).ok_or(GraphError::EmptyNetwork)?;
        Ok(NetworkSummary {
            user_count: self.store.len(),
            mean_indegree: rates.mean_indegree,
            mean_outdegree: rates.mean_outdegree,
            diameter,
            most_followed,
            most_followed_count,
        })
    }

    /// Export the follow graph as an edge list.
    #[must_use]
    pub fn edge_list(&self) -> Vec<(UserId, Vec<UserId>)> {
        self.store.edge_list()
    }

    /// Bulk-populate the network from an external persistence source.
    ///
    /// Inserts every record, then every link. The loader must not hand
    /// over already-loaded data: the engine's normal duplicate checks
    /// apply and abort the load on the first violation.
    ///
    /// # Errors
    ///
    /// Any error the underlying insert or follow operations can produce.
    pub fn load(
        &mut self,
        records: impl IntoIterator<Item = UserRecord>,
        links: impl IntoIterator<Item = (UserId, UserId)>,
    ) -> Result<()> {
        let mut users = 0usize;
        let mut edges = 0usize;
        for record in records {
            self.store.insert(record)?;
            users += 1;
        }
        for (follower, followed) in links {
            self.store.follow(&follower, &followed)?;
            edges += 1;
        }
        info!(users, edges, "loaded network from persistence source");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn record(id: &str) -> UserRecord {
        UserRecord::new(id, id.to_uppercase(), "2000-01-01", "555-0000", "Springfield")
    }

    #[test]
    fn register_and_profile() {
        let mut network = SocialNetwork::new();
        network.register(record("alice")).unwrap();
        network.register(record("bob")).unwrap();
        network.follow(&UserId::new("alice"), &UserId::new("bob")).unwrap();

        let profile = network.profile(&UserId::new("bob")).unwrap();
        assert_eq!(profile.record.name, "BOB");
        assert_eq!(profile.followers, 1);
        assert!(profile.following.is_empty());
    }

    #[test]
    fn profile_of_unknown_user_fails() {
        let network = SocialNetwork::new();
        let err = network.profile(&UserId::new("ghost")).unwrap_err();
        assert_eq!(err, Error::Graph(GraphError::UserNotFound(UserId::new("ghost"))));
    }

    #[test]
    fn summary_on_empty_network_fails() {
        let network = SocialNetwork::new();
        let err = network.summary().unwrap_err();
        assert_eq!(err, Error::Graph(GraphError::EmptyNetwork));
    }
}
