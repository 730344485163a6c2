//! # Tool Errors
//!
//! Error and completion types for commands and gestures.
//!
//! A command that runs but finds nothing to do is not an error. It reports
//! [`Completion::Skipped`] with a [`SkipReason`], the way a host operator
//! "finishes" without touching anything.

use config::constants::ConfigError;
use serde::{Deserialize, Serialize};
use smart_mesh::MeshError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by commands and gestures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A mesh query or edit failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// An event was fed to a gesture that already committed or cancelled.
    #[error("gesture is no longer active")]
    GestureNotActive,

    /// Undoing the accumulated transform failed; the gesture is abandoned
    /// with whatever state the host reached.
    #[error("could not roll back gesture: {reason}")]
    RollbackFailed {
        /// Description of the underlying failure.
        reason: String,
    },

    /// The host refused or could not perform an operation.
    #[error("host error: {message}")]
    Host {
        /// Host-supplied description.
        message: String,
    },

    /// Tool settings failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ToolError {
    /// Shorthand for [`ToolError::Host`].
    pub fn host(message: impl Into<String>) -> Self {
        ToolError::Host {
            message: message.into(),
        }
    }
}

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

// =============================================================================
// COMPLETION
// =============================================================================

/// Why a command finished without changing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// Nothing was selected.
    EmptySelection,
    /// The selection has a shape the command does not handle.
    UnsupportedTopology,
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Completion {
    /// The command changed the mesh or scene.
    Applied,
    /// The command did nothing.
    Skipped(SkipReason),
}

impl Completion {
    /// True for [`Completion::Applied`].
    pub fn is_applied(self) -> bool {
        matches!(self, Completion::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_mesh::VertexId;

    #[test]
    fn mesh_errors_convert_transparently() {
        let err: ToolError = MeshError::MissingVertex(VertexId(3)).into();
        assert_eq!(err.to_string(), "vertex VertexId(3) does not exist");
    }

    #[test]
    fn config_errors_convert() {
        let err: ToolError = ConfigError::InvalidTolerance(-1.0).into();
        assert!(err.to_string().contains("tolerance"));
    }

    #[test]
    fn skipped_is_not_applied() {
        assert!(Completion::Applied.is_applied());
        assert!(!Completion::Skipped(SkipReason::EmptySelection).is_applied());
    }
}
