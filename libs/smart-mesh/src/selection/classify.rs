//! Edge-set predicates.
//!
//! `is_border` counts ordered `(edge, neighbour)` pairs where the neighbour
//! is another selected edge sharing an endpoint. A closed loop gives every
//! edge two such neighbours, so a selection passes when the pair count
//! reaches twice its size. Open runs and partial borders fall short and are
//! reported as "not a border". Several disjoint closed loops selected at once
//! each contribute two pairs per edge and therefore pass together.
//!
//! `is_ring` is a local test and accepts L-shaped corner selections that do
//! not form a true ring. That rate of false positives is accepted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MeshResult;
use crate::mesh::{EdgeId, Mesh, VertexId};
use crate::topology::is_border_edge;

/// Structural reading of an edge selection, in decreasing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionShape {
    /// Closed loop(s) of border edges.
    BorderLoop,
    /// Edges fanning out of one shared vertex.
    AdjacentFan,
    /// Edges running across a strip of faces.
    Ring,
    /// None of the above, or nothing selected.
    None,
}

/// True iff the endpoints of all edges have exactly one vertex in common.
pub fn is_adjacent(mesh: &Mesh, edges: &[EdgeId]) -> MeshResult<bool> {
    let Some((&first, rest)) = edges.split_first() else {
        return Ok(false);
    };
    let mut common: BTreeSet<VertexId> = mesh.edge(first)?.verts().into_iter().collect();
    for &e in rest {
        let verts = mesh.edge(e)?.verts();
        common.retain(|v| verts.contains(v));
    }
    Ok(common.len() == 1)
}

/// True iff every edge is a border edge and the set closes on itself.
///
/// # Examples
/// ```
/// use smart_mesh::{primitives, selection};
/// let mesh = primitives::open_box(1.0);
/// let rim: Vec<_> = mesh
///     .edges()
///     .filter(|(_, e)| e.faces().len() == 1)
///     .map(|(id, _)| id)
///     .collect();
/// assert!(selection::is_border(&mesh, &rim).unwrap());
/// assert!(!selection::is_border(&mesh, &rim[..3]).unwrap());
/// ```
pub fn is_border(mesh: &Mesh, edges: &[EdgeId]) -> MeshResult<bool> {
    if edges.is_empty() {
        return Ok(false);
    }
    for &e in edges {
        if !is_border_edge(mesh, e)? {
            return Ok(false);
        }
    }

    let set: BTreeSet<EdgeId> = edges.iter().copied().collect();
    let mut pairs = 0usize;
    for &e in &set {
        for v in mesh.edge(e)?.verts() {
            pairs += mesh
                .vertex(v)?
                .edges()
                .iter()
                .filter(|&&n| n != e && set.contains(&n))
                .count();
        }
    }
    trace!(edges = set.len(), pairs, "border loop pair count");
    Ok(pairs >= 2 * set.len())
}

/// True iff every edge shares a face with at least one other selected edge.
pub fn is_ring(mesh: &Mesh, edges: &[EdgeId]) -> MeshResult<bool> {
    if edges.is_empty() {
        return Ok(false);
    }
    let set: BTreeSet<EdgeId> = edges.iter().copied().collect();
    for &e in &set {
        let mut qualifies = false;
        for &f in mesh.edge(e)?.faces() {
            if mesh.face(f)?.edges().iter().any(|&n| n != e && set.contains(&n)) {
                qualifies = true;
                break;
            }
        }
        if !qualifies {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Reads the shape of an edge selection. A border loop wins over a fan,
/// which wins over a ring.
pub fn classify(mesh: &Mesh, edges: &[EdgeId]) -> MeshResult<SelectionShape> {
    if is_border(mesh, edges)? {
        Ok(SelectionShape::BorderLoop)
    } else if is_adjacent(mesh, edges)? {
        Ok(SelectionShape::AdjacentFan)
    } else if is_ring(mesh, edges)? {
        Ok(SelectionShape::Ring)
    } else {
        Ok(SelectionShape::None)
    }
}
