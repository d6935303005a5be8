//! Error types for graph operations.

use graphsocial_core::UserId;
use thiserror::Error;

/// Errors that can occur in graph operations.
///
/// Every variant is an expected, recoverable outcome the caller is meant to
/// branch on; none of them are fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A user with the given identifier already exists.
    #[error("a user with identifier '{0}' already exists")]
    DuplicateUser(UserId),

    /// A user was not found.
    #[error("user not found: '{0}'")]
    UserNotFound(UserId),

    /// The follow edge already exists.
    #[error("'{follower}' already follows '{followed}'")]
    AlreadyFollowing {
        /// The user at the source of the edge.
        follower: UserId,
        /// The user at the target of the edge.
        followed: UserId,
    },

    /// No such follow edge exists.
    #[error("'{follower}' does not follow '{followed}'")]
    NotFollowing {
        /// The user at the source of the edge.
        follower: UserId,
        /// The user at the target of the edge.
        followed: UserId,
    },

    /// No directed path exists between the two users.
    #[error("no path exists from '{src}' to '{target}'")]
    NoPathExists {
        /// The starting user.
        src: UserId,
        /// The destination user.
        target: UserId,
    },

    /// The network has no users, so the requested aggregate is undefined.
    #[error("the network has no users")]
    EmptyNetwork,
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
