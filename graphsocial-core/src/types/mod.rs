//! Core data types for the social graph.

mod id;
mod user;

pub use id::UserId;
pub use user::UserRecord;
