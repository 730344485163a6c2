//! # Arena Mesh
//!
//! Vertex/edge/face arena addressed by stable integer handles.
//!
//! ## Overview
//!
//! Each element stores its neighbours as handle lists:
//! - Vertex: position, incident edges, incident faces
//! - Edge: two endpoint vertices, incident faces (0, 1, 2, or more when
//!   non-manifold)
//! - Face: ordered vertex loop and the matching edge loop
//!
//! No element owns another, so the mutual back-references of a boundary
//! representation never form an ownership cycle.
//!
//! ## Handle Stability
//!
//! Removing an element vacates its slot instead of shifting later elements.
//! Handles of surviving elements therefore stay valid across edits; handles
//! of removed elements resolve to `Missing*` errors. Every topology edit
//! increments [`Mesh::revision`], which selections use to detect staleness.

mod edit;


pub use edit::{DuplicateMap, ExtrudeMap};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

// =============================================================================
// HANDLES
// =============================================================================

/// Unique identifier for vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// Unique identifier for edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

/// Unique identifier for faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

// =============================================================================
// ELEMENTS
// =============================================================================

/// Vertex data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position in 3D space
    pub position: DVec3,
    /// Host selection flag
    pub selected: bool,
    edges: Vec<EdgeId>,
    faces: Vec<FaceId>,
}

impl Vertex {
    fn new(position: DVec3) -> Self {
        Self {
            position,
            selected: false,
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Edges incident to this vertex.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Faces incident to this vertex.
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }
}

/// Edge data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Host selection flag
    pub selected: bool,
    verts: [VertexId; 2],
    faces: Vec<FaceId>,
}

impl Edge {
    /// The two endpoint vertices.
    pub fn verts(&self) -> [VertexId; 2] {
        self.verts
    }

    /// Faces using this edge, in insertion order.
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.verts.contains(&vertex)
    }

    /// Endpoint opposite `vertex`, `None` if `vertex` is not an endpoint.
    pub fn other_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        match self.verts {
            [a, b] if a == vertex => Some(b),
            [a, b] if b == vertex => Some(a),
            _ => None,
        }
    }
}

/// Face data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Host selection flag
    pub selected: bool,
    verts: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl Face {
    /// Ordered vertex loop.
    pub fn verts(&self) -> &[VertexId] {
        &self.verts
    }

    /// Edge loop; `edges()[i]` joins `verts()[i]` and `verts()[i + 1]`.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Whether the loop walks from `a` straight to `b`.
    pub fn has_directed_edge(&self, a: VertexId, b: VertexId) -> bool {
        let n = self.verts.len();
        (0..n).any(|i| self.verts[i] == a && self.verts[(i + 1) % n] == b)
    }
}

// =============================================================================
// SUMMARY TYPES
// =============================================================================

/// Element counts of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeshStats {
    /// Live vertices.
    pub vertices: usize,
    /// Live edges.
    pub edges: usize,
    /// Live faces.
    pub faces: usize,
}

impl MeshStats {
    /// `V - E + F`.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }
}

/// A set of elements of every kind, each list sorted and free of duplicates.
///
/// Produced by flushing a selection to the other element kinds, and consumed
/// by duplication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSet {
    /// Vertices in the set.
    pub vertices: Vec<VertexId>,
    /// Edges in the set.
    pub edges: Vec<EdgeId>,
    /// Faces in the set.
    pub faces: Vec<FaceId>,
}

impl ElementSet {
    /// True when no element of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.faces.is_empty()
    }
}

// =============================================================================
// MESH
// =============================================================================

/// Boundary-representation mesh stored as three slot arenas.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use smart_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO);
/// let b = mesh.add_vertex(DVec3::X);
/// let c = mesh.add_vertex(DVec3::Y);
/// mesh.add_face(&[a, b, c]).unwrap();
/// assert_eq!(mesh.stats().edges, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Option<Edge>>,
    faces: Vec<Option<Face>>,
    revision: u64,
}

impl Mesh {
    /// Creates a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Topology revision; bumped by every insert or delete.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Live element counts.
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            faces: self.face_count(),
        }
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().flatten().count()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().flatten().count()
    }

    /// Number of live faces.
    pub fn face_count(&self) -> usize {
        self.faces.iter().flatten().count()
    }

    /// True when the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Resolves a vertex handle.
    pub fn vertex(&self, id: VertexId) -> MeshResult<&Vertex> {
        self.vertices
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(MeshError::MissingVertex(id))
    }

    /// Resolves an edge handle.
    pub fn edge(&self, id: EdgeId) -> MeshResult<&Edge> {
        self.edges
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(MeshError::MissingEdge(id))
    }

    /// Resolves a face handle.
    pub fn face(&self, id: FaceId) -> MeshResult<&Face> {
        self.faces
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(MeshError::MissingFace(id))
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> MeshResult<&mut Vertex> {
        self.vertices
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(MeshError::MissingVertex(id))
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> MeshResult<&mut Edge> {
        self.edges
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(MeshError::MissingEdge(id))
    }

    pub(crate) fn face_mut(&mut self, id: FaceId) -> MeshResult<&mut Face> {
        self.faces
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(MeshError::MissingFace(id))
    }

    /// Whether the handle addresses a live vertex.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_ok()
    }

    /// Whether the handle addresses a live edge.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge(id).is_ok()
    }

    /// Whether the handle addresses a live face.
    pub fn contains_face(&self, id: FaceId) -> bool {
        self.face(id).is_ok()
    }

    /// Iterates live vertices in handle order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (VertexId(i as u32), v)))
    }

    /// Iterates live edges in handle order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (EdgeId(i as u32), e)))
    }

    /// Iterates live faces in handle order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.as_ref().map(|f| (FaceId(i as u32), f)))
    }

    /// Edge joining `a` and `b`, if any.
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let vertex = self.vertex(a).ok()?;
        vertex.edges.iter().copied().find(|&e| {
            self.edge(e)
                .map(|edge| edge.contains(b) && edge.contains(a))
                .unwrap_or(false)
        })
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// Sets the selection flag of a vertex.
    pub fn select_vertex(&mut self, id: VertexId, selected: bool) -> MeshResult<()> {
        self.vertex_mut(id)?.selected = selected;
        Ok(())
    }

    /// Sets the selection flag of an edge.
    pub fn select_edge(&mut self, id: EdgeId, selected: bool) -> MeshResult<()> {
        self.edge_mut(id)?.selected = selected;
        Ok(())
    }

    /// Sets the selection flag of a face.
    pub fn select_face(&mut self, id: FaceId, selected: bool) -> MeshResult<()> {
        self.face_mut(id)?.selected = selected;
        Ok(())
    }

    /// Clears every selection flag.
    pub fn deselect_all(&mut self) {
        for v in self.vertices.iter_mut().flatten() {
            v.selected = false;
        }
        for e in self.edges.iter_mut().flatten() {
            e.selected = false;
        }
        for f in self.faces.iter_mut().flatten() {
            f.selected = false;
        }
    }

    /// Selected vertices in handle order.
    pub fn selected_vertices(&self) -> Vec<VertexId> {
        self.vertices()
            .filter(|(_, v)| v.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// Selected edges in handle order.
    pub fn selected_edges(&self) -> Vec<EdgeId> {
        self.edges()
            .filter(|(_, e)| e.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// Selected faces in handle order.
    pub fn selected_faces(&self) -> Vec<FaceId> {
        self.faces()
            .filter(|(_, f)| f.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// Centroid of the given vertices, `None` when the list is empty.
    pub fn centroid(&self, vertices: &[VertexId]) -> MeshResult<Option<DVec3>> {
        if vertices.is_empty() {
            return Ok(None);
        }
        let mut sum = DVec3::ZERO;
        for &v in vertices {
            sum += self.vertex(v)?.position;
        }
        Ok(Some(sum / vertices.len() as f64))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
