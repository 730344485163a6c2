//! # Editing Primitives
//!
//! Insert, delete, dissolve, duplicate, extrude and transform operations on
//! the arena mesh. Every operation validates all handles it was given before
//! touching the mesh, so a failed call leaves the mesh unchanged.

use std::collections::{BTreeMap, BTreeSet};

use glam::{DQuat, DVec3};
use tracing::{debug, warn};

use super::{Edge, EdgeId, ElementSet, Face, FaceId, Mesh, Vertex, VertexId};
use crate::axis::Axis;
use crate::error::{MeshError, MeshResult};

/// Handles of the copies made by [`Mesh::duplicate`], keyed by original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateMap {
    /// Original vertex → copy.
    pub vertices: BTreeMap<VertexId, VertexId>,
    /// Original edge → copy.
    pub edges: BTreeMap<EdgeId, EdgeId>,
    /// Original face → copy.
    pub faces: BTreeMap<FaceId, FaceId>,
}

/// Geometry created by [`Mesh::extrude_edges`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtrudeMap {
    /// Original boundary vertex → extruded vertex.
    pub vertices: BTreeMap<VertexId, VertexId>,
    /// New outer edges, one per extruded edge.
    pub edges: Vec<EdgeId>,
    /// New side faces, one per extruded edge.
    pub faces: Vec<FaceId>,
}

impl ExtrudeMap {
    /// The newly created vertices.
    pub fn new_vertices(&self) -> Vec<VertexId> {
        self.vertices.values().copied().collect()
    }
}

impl Mesh {
    // =========================================================================
    // INSERTION
    // =========================================================================

    /// Adds an isolated vertex.
    pub fn add_vertex(&mut self, position: DVec3) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Some(Vertex::new(position)));
        self.touch();
        id
    }

    /// Adds an edge between two vertices, or returns the one already joining
    /// them.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> MeshResult<EdgeId> {
        self.vertex(a)?;
        self.vertex(b)?;
        if a == b {
            return Err(MeshError::DuplicateVertex(a));
        }
        if let Some(existing) = self.find_edge(a, b) {
            return Ok(existing);
        }
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(Edge {
            selected: false,
            verts: [a, b],
            faces: Vec::new(),
        }));
        self.vertex_mut(a)?.edges.push(id);
        self.vertex_mut(b)?.edges.push(id);
        self.touch();
        Ok(id)
    }

    /// Adds a face over an ordered loop of existing, distinct vertices,
    /// creating any missing edges.
    pub fn add_face(&mut self, verts: &[VertexId]) -> MeshResult<FaceId> {
        if verts.len() < 3 {
            return Err(MeshError::DegenerateFace { count: verts.len() });
        }
        let mut seen = BTreeSet::new();
        for &v in verts {
            self.vertex(v)?;
            if !seen.insert(v) {
                return Err(MeshError::DuplicateVertex(v));
            }
        }

        let n = verts.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(self.add_edge(verts[i], verts[(i + 1) % n])?);
        }

        let id = FaceId(self.faces.len() as u32);
        for &e in &edges {
            self.edge_mut(e)?.faces.push(id);
        }
        for &v in verts {
            self.vertex_mut(v)?.faces.push(id);
        }
        self.faces.push(Some(Face {
            selected: false,
            verts: verts.to_vec(),
            edges,
        }));
        self.touch();
        Ok(id)
    }

    // =========================================================================
    // DELETION
    // =========================================================================

    /// Removes vertices together with every incident edge and face.
    pub fn delete_vertices(&mut self, vertices: &[VertexId]) -> MeshResult<()> {
        let mut faces = BTreeSet::new();
        let mut edges = BTreeSet::new();
        for &v in vertices {
            let vertex = self.vertex(v)?;
            faces.extend(vertex.faces.iter().copied());
            edges.extend(vertex.edges.iter().copied());
        }

        for f in faces {
            self.unlink_face(f)?;
        }
        for e in edges {
            self.unlink_edge(e)?;
        }
        for &v in vertices {
            if self.contains_vertex(v) {
                self.vertices[v.0 as usize] = None;
            }
        }
        debug!(count = vertices.len(), "deleted vertices");
        self.touch();
        Ok(())
    }

    /// Removes faces, then the edges and vertices of those faces that no
    /// longer carry anything.
    pub fn delete_faces(&mut self, faces: &[FaceId]) -> MeshResult<()> {
        for &f in faces {
            self.face(f)?;
        }
        let mut edges = BTreeSet::new();
        let mut verts = BTreeSet::new();
        for &f in faces {
            if let Ok(face) = self.face(f) {
                edges.extend(face.edges.iter().copied());
                verts.extend(face.verts.iter().copied());
            }
            if self.contains_face(f) {
                self.unlink_face(f)?;
            }
        }
        self.remove_loose(edges, verts)?;
        debug!(count = faces.len(), "deleted faces");
        self.touch();
        Ok(())
    }

    /// Dissolves edges one at a time, looking each up fresh.
    ///
    /// - Two faces: the faces merge into one and the edge disappears.
    /// - One face (boundary): nothing to merge into, so the face is removed
    ///   along with any of its edges and vertices left carrying nothing.
    /// - No face (wire): the edge and any orphaned endpoint are removed.
    /// - More than two faces: left untouched.
    ///
    /// Edges already consumed by an earlier step are skipped. Returns the
    /// number of edges dissolved; the revision only moves when that is
    /// non-zero.
    pub fn dissolve_edges(&mut self, edges: &[EdgeId]) -> MeshResult<usize> {
        for &e in edges {
            self.edge(e)?;
        }
        let mut dissolved = 0;
        for &e in edges {
            let Ok(edge) = self.edge(e) else { continue };
            let verts = edge.verts;
            let faces = edge.faces.clone();
            match faces.as_slice() {
                [] => {
                    self.unlink_edge(e)?;
                    self.remove_loose(BTreeSet::new(), verts.into_iter().collect())?;
                    dissolved += 1;
                }
                &[face] => {
                    self.delete_faces(&[face])?;
                    dissolved += 1;
                }
                &[first, second] => {
                    if self.merge_faces_across(e, first, second)? {
                        dissolved += 1;
                    }
                }
                _ => warn!(edge = e.0, faces = faces.len(), "skipping non-manifold edge"),
            }
        }
        if dissolved > 0 {
            self.touch();
        }
        Ok(dissolved)
    }

    /// Joins the two faces on either side of `edge` into one.
    fn merge_faces_across(
        &mut self,
        edge: EdgeId,
        first: FaceId,
        second: FaceId,
    ) -> MeshResult<bool> {
        let [a, b] = self.edge(edge)?.verts;
        let first_loop = self.face(first)?.verts.clone();
        let mut second_loop = self.face(second)?.verts.clone();

        // Walk the first face so the shared edge is its closing step p → q.
        let (p, q) = if self.face(first)?.has_directed_edge(a, b) { (a, b) } else { (b, a) };
        if self.face(second)?.has_directed_edge(p, q) {
            // Second face is wound the same way; flip it so the loops join.
            second_loop.reverse();
        }

        let mut merged = rotate_to_start(&first_loop, q);
        let around = rotate_to_start(&second_loop, p);
        // `around` runs p .. q; keep only its interior.
        merged.extend(around.iter().skip(1).take(around.len().saturating_sub(2)));

        let distinct: BTreeSet<_> = merged.iter().collect();
        if distinct.len() != merged.len() || merged.len() < 3 {
            warn!(edge = edge.0, "faces share more than one edge; leaving them unmerged");
            return Ok(false);
        }

        let selected = self.face(first)?.selected || self.face(second)?.selected;
        self.unlink_face(first)?;
        self.unlink_face(second)?;
        self.unlink_edge(edge)?;
        let merged_face = self.add_face(&merged)?;
        self.face_mut(merged_face)?.selected = selected;
        Ok(true)
    }

    /// Detaches a face from its edges and vertices and vacates its slot.
    fn unlink_face(&mut self, id: FaceId) -> MeshResult<()> {
        let face = self.faces[id.0 as usize]
            .take()
            .ok_or(MeshError::MissingFace(id))?;
        for e in face.edges {
            if let Ok(edge) = self.edge_mut(e) {
                edge.faces.retain(|&f| f != id);
            }
        }
        for v in face.verts {
            if let Ok(vertex) = self.vertex_mut(v) {
                vertex.faces.retain(|&f| f != id);
            }
        }
        Ok(())
    }

    /// Detaches an edge and any face still using it, then vacates its slot.
    fn unlink_edge(&mut self, id: EdgeId) -> MeshResult<()> {
        let faces = self.edge(id)?.faces.clone();
        for f in faces {
            self.unlink_face(f)?;
        }
        let edge = self.edges[id.0 as usize]
            .take()
            .ok_or(MeshError::MissingEdge(id))?;
        for v in edge.verts {
            if let Ok(vertex) = self.vertex_mut(v) {
                vertex.edges.retain(|&e| e != id);
            }
        }
        Ok(())
    }

    /// Removes candidate edges with no face and candidate vertices with no
    /// edge.
    fn remove_loose(
        &mut self,
        edges: BTreeSet<EdgeId>,
        verts: BTreeSet<VertexId>,
    ) -> MeshResult<()> {
        for e in edges {
            if matches!(self.edge(e), Ok(edge) if edge.faces.is_empty()) {
                self.unlink_edge(e)?;
            }
        }
        for v in verts {
            if matches!(self.vertex(v), Ok(vertex) if vertex.edges.is_empty()) {
                self.vertices[v.0 as usize] = None;
            }
        }
        Ok(())
    }

    // =========================================================================
    // DUPLICATION & EXTRUSION
    // =========================================================================

    /// Copies an element set in place and moves the selection to the copies.
    ///
    /// Vertices of listed edges and faces are copied implicitly; an edge is
    /// copied when listed or when it belongs to a listed face.
    pub fn duplicate(&mut self, set: &ElementSet) -> MeshResult<DuplicateMap> {
        let mut verts = BTreeSet::new();
        let mut edges = BTreeSet::new();
        for &v in &set.vertices {
            self.vertex(v)?;
            verts.insert(v);
        }
        for &e in &set.edges {
            verts.extend(self.edge(e)?.verts);
            edges.insert(e);
        }
        for &f in &set.faces {
            let face = self.face(f)?;
            verts.extend(face.verts.iter().copied());
            edges.extend(face.edges.iter().copied());
        }

        let mut map = DuplicateMap::default();
        for v in verts {
            let position = self.vertex(v)?.position;
            map.vertices.insert(v, self.add_vertex(position));
        }
        for e in edges {
            let [a, b] = self.edge(e)?.verts;
            let copy = self.add_edge(map.vertices[&a], map.vertices[&b])?;
            map.edges.insert(e, copy);
        }
        for &f in &set.faces {
            let loop_copy: Vec<_> = self.face(f)?.verts.iter().map(|v| map.vertices[v]).collect();
            map.faces.insert(f, self.add_face(&loop_copy)?);
        }

        self.deselect_all();
        for &v in map.vertices.values() {
            self.select_vertex(v, true)?;
        }
        for &e in map.edges.values() {
            self.select_edge(e, true)?;
        }
        for &f in map.faces.values() {
            self.select_face(f, true)?;
        }
        debug!(vertices = map.vertices.len(), faces = map.faces.len(), "duplicated elements");
        Ok(map)
    }

    /// Extrudes edges into new quads sharing the original edge.
    ///
    /// The extruded copy of each endpoint is shared by every edge in the set
    /// that touches it, so a connected run of edges extrudes into a
    /// connected strip. New faces are wound against the face already on the
    /// edge. The selection moves to the new outer edges and their vertices.
    pub fn extrude_edges(&mut self, edges: &[EdgeId]) -> MeshResult<ExtrudeMap> {
        for &e in edges {
            self.edge(e)?;
        }

        let mut map = ExtrudeMap::default();
        for &e in edges {
            let edge = self.edge(e)?;
            let [a, b] = edge.verts;
            let wound_a_to_b = match edge.faces.first() {
                Some(&f) => self.face(f)?.has_directed_edge(a, b),
                None => false,
            };

            let a2 = self.extruded_copy(&mut map, a)?;
            let b2 = self.extruded_copy(&mut map, b)?;
            let quad = if wound_a_to_b { [b, a, a2, b2] } else { [a, b, b2, a2] };
            let face = self.add_face(&quad)?;
            map.faces.push(face);
            if let Some(outer) = self.find_edge(a2, b2) {
                map.edges.push(outer);
            }
        }

        self.deselect_all();
        for &v in map.vertices.values() {
            self.select_vertex(v, true)?;
        }
        for &e in &map.edges {
            self.select_edge(e, true)?;
        }
        debug!(edges = edges.len(), "extruded edges");
        Ok(map)
    }

    fn extruded_copy(&mut self, map: &mut ExtrudeMap, v: VertexId) -> MeshResult<VertexId> {
        if let Some(&copy) = map.vertices.get(&v) {
            return Ok(copy);
        }
        let copy = self.add_vertex(self.vertex(v)?.position);
        map.vertices.insert(v, copy);
        Ok(copy)
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Moves vertices by `delta`. Composes with any previous translation.
    pub fn translate_vertices(&mut self, vertices: &[VertexId], delta: DVec3) -> MeshResult<()> {
        for &v in vertices {
            self.vertex(v)?;
        }
        for &v in vertices {
            self.vertex_mut(v)?.position += delta;
        }
        Ok(())
    }

    /// Rotates vertices by `angle` radians about the world `axis` through
    /// `pivot`. Composes with any previous rotation.
    pub fn rotate_vertices(
        &mut self,
        vertices: &[VertexId],
        pivot: DVec3,
        axis: Axis,
        angle: f64,
    ) -> MeshResult<()> {
        for &v in vertices {
            self.vertex(v)?;
        }
        let rotation = DQuat::from_axis_angle(axis.unit(), angle);
        for &v in vertices {
            let vertex = self.vertex_mut(v)?;
            vertex.position = pivot + rotation * (vertex.position - pivot);
        }
        Ok(())
    }
}

/// Rotates a loop so it begins at `start`; returns the loop unchanged if
/// `start` is absent.
fn rotate_to_start(verts: &[VertexId], start: VertexId) -> Vec<VertexId> {
    let offset = verts.iter().position(|&v| v == start).unwrap_or(0);
    verts[offset..].iter().chain(&verts[..offset]).copied().collect()
}
