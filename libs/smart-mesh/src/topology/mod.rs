//! # Topology Queries
//!
//! Pure queries over a mesh snapshot. None of them mutate the mesh, and each
//! runs in time proportional to the degree of the elements involved; no query
//! walks the whole mesh.
//!
//! ## Heuristics
//!
//! [`is_corner_vertex`] is an approximation: it flags any vertex touching
//! more than two faces, which includes ordinary high-valence interior
//! vertices. Callers use it only to gate patch-fill seeding, where a false
//! positive costs nothing but an extra candidate.

use std::collections::BTreeSet;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{EdgeId, FaceId, Mesh, VertexId};

/// True iff the edge has exactly one incident face.
///
/// # Examples
/// ```
/// use smart_mesh::{primitives, topology};
/// let mesh = primitives::quad(1.0);
/// let (edge, _) = mesh.edges().next().unwrap();
/// assert!(topology::is_border_edge(&mesh, edge).unwrap());
/// ```
pub fn is_border_edge(mesh: &Mesh, edge: EdgeId) -> MeshResult<bool> {
    Ok(mesh.edge(edge)?.faces().len() == 1)
}

/// True iff at least two border edges meet at the vertex.
pub fn is_border_vertex(mesh: &Mesh, vertex: VertexId) -> MeshResult<bool> {
    let mut border = 0;
    for &e in mesh.vertex(vertex)?.edges() {
        if is_border_edge(mesh, e)? {
            border += 1;
        }
    }
    Ok(border >= 2)
}

/// True iff every given vertex is a border vertex. False for no vertices.
pub fn are_border_vertices(mesh: &Mesh, vertices: &[VertexId]) -> MeshResult<bool> {
    if vertices.is_empty() {
        return Ok(false);
    }
    for &v in vertices {
        if !is_border_vertex(mesh, v)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Heuristic corner test: the vertex touches more than two faces.
///
/// Not a geometric test. Interior vertices of any grid (valence 4) pass as
/// well; see the module notes.
pub fn is_corner_vertex(mesh: &Mesh, vertex: VertexId) -> MeshResult<bool> {
    Ok(mesh.vertex(vertex)?.faces().len() > 2)
}

/// True iff exactly one edge joins the two vertices.
///
/// Fails with [`MeshError::InvalidArity`] unless given exactly two vertices.
pub fn share_edge(mesh: &Mesh, vertices: &[VertexId]) -> MeshResult<bool> {
    let &[a, b] = vertices else {
        return Err(MeshError::InvalidArity {
            expected: 2,
            actual: vertices.len(),
        });
    };
    let first: BTreeSet<EdgeId> = mesh.vertex(a)?.edges().iter().copied().collect();
    let shared = mesh
        .vertex(b)?
        .edges()
        .iter()
        .filter(|e| first.contains(e))
        .count();
    Ok(shared == 1)
}

/// True iff some face is incident to every given vertex. False for no
/// vertices.
pub fn share_face(mesh: &Mesh, vertices: &[VertexId]) -> MeshResult<bool> {
    let Some((&first, rest)) = vertices.split_first() else {
        return Ok(false);
    };
    let mut common: BTreeSet<FaceId> = mesh.vertex(first)?.faces().iter().copied().collect();
    for &v in rest {
        let faces: BTreeSet<FaceId> = mesh.vertex(v)?.faces().iter().copied().collect();
        common = common.intersection(&faces).copied().collect();
    }
    Ok(!common.is_empty())
}

/// Candidate vertices for seeding a local patch fill around `vertex`.
///
/// Gathers the vertex itself and those edge-neighbours that are border
/// vertices, then keeps the ones that are both border and (heuristic)
/// corner vertices. Results are in handle order without duplicates.
pub fn fill_seed_vertices(mesh: &Mesh, vertex: VertexId) -> MeshResult<Vec<VertexId>> {
    let mut candidates = BTreeSet::from([vertex]);
    for &e in mesh.vertex(vertex)?.edges() {
        if let Some(other) = mesh.edge(e)?.other_vertex(vertex) {
            if is_border_vertex(mesh, other)? {
                candidates.insert(other);
            }
        }
    }

    let mut seeds = Vec::new();
    for v in candidates {
        if is_border_vertex(mesh, v)? && is_corner_vertex(mesh, v)? {
            seeds.push(v);
        }
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests;
