//! # Smart Mesh
//!
//! Boundary-representation mesh kernel for the context-sensitive editing
//! tools. Answers structural questions about a selection (is it a closed
//! border, a ring, a fan around one vertex) and provides the editing
//! primitives the tools compose.
//!
//! ## Architecture
//!
//! ```text
//! Mesh (arena of vertices / edges / faces)
//!       ↓
//! topology (per-element queries)
//!       ↓
//! selection (descriptor + classifier)
//! ```
//!
//! Elements reference their neighbours by handle only. Removing an element
//! vacates its slot, so every surviving handle keeps addressing the same
//! element; a [`Selection`] remembers the mesh revision it was taken at and
//! refuses to be used once the topology has changed.
//!
//! ## Usage
//!
//! ```rust
//! use smart_mesh::{primitives, selection, Selection, SelectionMode};
//!
//! let mut mesh = primitives::open_box(1.0);
//! let rim: Vec<_> = mesh
//!     .edges()
//!     .filter(|(_, edge)| edge.faces().len() == 1)
//!     .map(|(id, _)| id)
//!     .collect();
//! for edge in &rim {
//!     mesh.select_edge(*edge, true).unwrap();
//! }
//!
//! let sel = Selection::capture(&mesh, SelectionMode::Edge);
//! assert!(selection::is_border(&mesh, sel.edges()).unwrap());
//! ```

pub mod axis;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod selection;
pub mod topology;

pub use axis::Axis;
pub use error::{MeshError, MeshResult};
pub use mesh::{
    DuplicateMap, Edge, EdgeId, ElementSet, ExtrudeMap, Face, FaceId, Mesh, MeshStats, Vertex,
    VertexId,
};
pub use selection::{Selection, SelectionMode, SelectionShape};
