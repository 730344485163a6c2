//! # Error Types
//!
//! Error types for mesh queries and edits. All errors are explicit and
//! provide the handle or count that caused them.
//!
//! ## Error Policy
//!
//! - Queries reject malformed input immediately (no partial computation)
//! - Edits validate every handle before mutating anything
//! - Empty input is not an error: predicates answer `false`

use thiserror::Error;

use crate::mesh::{EdgeId, FaceId, VertexId};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during mesh queries and edits.
///
/// ## Example
///
/// ```rust
/// use smart_mesh::{primitives, topology, MeshError};
///
/// let mesh = primitives::quad(1.0);
/// let first = mesh.vertices().map(|(id, _)| id).next().unwrap();
/// match topology::share_edge(&mesh, &[first]) {
///     Err(MeshError::InvalidArity { expected, actual }) => {
///         assert_eq!((expected, actual), (2, 1));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A query was given the wrong number of elements.
    #[error("expected {expected} elements, got {actual}")]
    InvalidArity {
        /// Number of elements the query accepts.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },

    /// A selection was used after the mesh topology changed.
    #[error("selection captured at revision {captured} used at revision {current}")]
    StaleSelection {
        /// Revision the selection was captured at.
        captured: u64,
        /// Current mesh revision.
        current: u64,
    },

    /// Vertex handle does not address a live vertex.
    #[error("vertex {0:?} does not exist")]
    MissingVertex(VertexId),

    /// Edge handle does not address a live edge.
    #[error("edge {0:?} does not exist")]
    MissingEdge(EdgeId),

    /// Face handle does not address a live face.
    #[error("face {0:?} does not exist")]
    MissingFace(FaceId),

    /// The same vertex appears twice where distinct vertices are required.
    #[error("vertex {0:?} used more than once")]
    DuplicateVertex(VertexId),

    /// A face needs at least three vertices.
    #[error("face needs at least 3 vertices, got {count}")]
    DegenerateFace {
        /// Number of vertices supplied.
        count: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
