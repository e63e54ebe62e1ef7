//! Topic error types.
//!
//! The evaluator itself never fails; these errors come from the explicit
//! validation layer and from configuration checks.

use thiserror::Error;

/// Errors that can occur during topic operations.
#[derive(Debug, Error)]
pub enum TopicsError {
    /// A single label is not in the taxonomy
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Several labels in a batch are not in the taxonomy
    #[error("Unknown topics: {}", .0.join(", "))]
    UnknownTopics(Vec<String>),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
