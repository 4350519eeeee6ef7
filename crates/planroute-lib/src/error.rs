use thiserror::Error;

/// Convenient result alias for the planroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The routing core has no unrecoverable failures: every error here is an
/// explicit "no result" outcome that the caller is expected to handle.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node name could not be resolved in the graph.
    #[error("unknown node name: {name}")]
    UnknownNode { name: String },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    NoRoute { start: String, goal: String },
}
