//! # Selection Descriptor & Classifier
//!
//! A [`Selection`] is a snapshot of what the host has selected, taken fresh
//! at the start of every command. It is flushed to all element kinds the way
//! an editor flushes selection between modes, and it remembers the mesh
//! revision it was captured at so it cannot outlive a topology edit.
//!
//! The classifier predicates answer structural questions about a set of
//! selected edges:
//!
//! | Predicate       | Question                                             |
//! |-----------------|------------------------------------------------------|
//! | [`is_adjacent`] | do all edges meet at exactly one common vertex?      |
//! | [`is_border`]   | are all edges border edges forming closed loops?     |
//! | [`is_ring`]     | does every edge share a face with another one?       |
//!
//! Every predicate answers `false` for an empty set.

mod classify;

#[cfg(test)]
mod tests;

pub use classify::{classify, is_adjacent, is_border, is_ring, SelectionShape};

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{EdgeId, ElementSet, FaceId, Mesh, VertexId};

/// Which kind of element the user is currently selecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Whole objects in the scene.
    Object,
    /// Mesh vertices.
    Vertex,
    /// Mesh edges.
    Edge,
    /// Mesh faces.
    Face,
    /// Curve control points.
    Curve,
}

impl SelectionMode {
    /// True for the three mesh element modes.
    pub fn is_mesh(self) -> bool {
        matches!(self, SelectionMode::Vertex | SelectionMode::Edge | SelectionMode::Face)
    }
}

/// Snapshot of the selected mesh elements under one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    revision: u64,
    elements: ElementSet,
}

impl Selection {
    /// Reads the selection flags of `mesh` under `mode`.
    ///
    /// - Vertex mode: selected vertices, edges with both ends selected,
    ///   faces with every vertex selected.
    /// - Edge mode: selected edges, their endpoints, faces with every edge
    ///   selected.
    /// - Face mode: selected faces and their edges and vertices.
    /// - Object and curve modes carry no mesh elements.
    pub fn capture(mesh: &Mesh, mode: SelectionMode) -> Self {
        let elements = match mode {
            SelectionMode::Vertex => flush_from_vertices(mesh),
            SelectionMode::Edge => flush_from_edges(mesh),
            SelectionMode::Face => flush_from_faces(mesh),
            SelectionMode::Object | SelectionMode::Curve => ElementSet::default(),
        };
        Self {
            mode,
            revision: mesh.revision(),
            elements,
        }
    }

    /// Mode the selection was captured under.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Mesh revision at capture time.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Fails with [`MeshError::StaleSelection`] if `mesh` changed topology
    /// since the capture.
    pub fn validate(&self, mesh: &Mesh) -> MeshResult<()> {
        if mesh.revision() != self.revision {
            return Err(MeshError::StaleSelection {
                captured: self.revision,
                current: mesh.revision(),
            });
        }
        Ok(())
    }

    /// True when nothing of the mode's own kind is selected.
    pub fn is_empty(&self) -> bool {
        match self.mode {
            SelectionMode::Vertex => self.elements.vertices.is_empty(),
            SelectionMode::Edge => self.elements.edges.is_empty(),
            SelectionMode::Face => self.elements.faces.is_empty(),
            SelectionMode::Object | SelectionMode::Curve => true,
        }
    }

    /// Every vertex touched by the selection.
    pub fn vertices(&self) -> &[VertexId] {
        &self.elements.vertices
    }

    /// Selected (or flushed) edges.
    pub fn edges(&self) -> &[EdgeId] {
        &self.elements.edges
    }

    /// Selected (or flushed) faces.
    pub fn faces(&self) -> &[FaceId] {
        &self.elements.faces
    }

    /// The full flushed element set.
    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }
}

fn flush_from_vertices(mesh: &Mesh) -> ElementSet {
    let selected = |v: &VertexId| mesh.vertex(*v).map(|v| v.selected).unwrap_or(false);
    ElementSet {
        vertices: mesh.selected_vertices(),
        edges: mesh
            .edges()
            .filter(|(_, e)| e.verts().iter().all(selected))
            .map(|(id, _)| id)
            .collect(),
        faces: mesh
            .faces()
            .filter(|(_, f)| f.verts().iter().all(selected))
            .map(|(id, _)| id)
            .collect(),
    }
}

fn flush_from_edges(mesh: &Mesh) -> ElementSet {
    let edges = mesh.selected_edges();
    let mut vertices: Vec<VertexId> = edges
        .iter()
        .filter_map(|&e| mesh.edge(e).ok())
        .flat_map(|e| e.verts())
        .collect();
    vertices.sort_unstable();
    vertices.dedup();
    let selected = |e: &EdgeId| mesh.edge(*e).map(|e| e.selected).unwrap_or(false);
    ElementSet {
        vertices,
        faces: mesh
            .faces()
            .filter(|(_, f)| f.edges().iter().all(selected))
            .map(|(id, _)| id)
            .collect(),
        edges,
    }
}

fn flush_from_faces(mesh: &Mesh) -> ElementSet {
    let faces = mesh.selected_faces();
    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    for face in faces.iter().filter_map(|&f| mesh.face(f).ok()) {
        vertices.extend_from_slice(face.verts());
        edges.extend_from_slice(face.edges());
    }
    vertices.sort_unstable();
    vertices.dedup();
    edges.sort_unstable();
    edges.dedup();
    ElementSet {
        vertices,
        edges,
        faces,
    }
}
