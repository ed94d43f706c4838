//! Adapter-originated failures
//!
//! The core never raises these itself; it only passes them along.

use thiserror::Error;

/// Errors that can occur inside a port implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("Character not found: {id}")]
    NotFound { id: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// The write collides with something already stored
    #[error("Conflicting write for character: {id}")]
    Conflict { id: String },

    /// The stored state would break a roster rule
    #[error("Character {id} rejected: {reason}")]
    Rejected { id: String, reason: String },
}
