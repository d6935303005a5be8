//! Error types for the main GraphSocial crate.

use thiserror::Error;

use graphsocial_graph::store::GraphError;

/// Errors that can occur when using GraphSocial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A graph engine error occurred.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Result type for GraphSocial operations.
pub type Result<T> = std::result::Result<T, Error>;
