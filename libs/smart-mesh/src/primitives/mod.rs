//! # Primitives
//!
//! Small quad meshes used as fixtures and as starting geometry for hosts
//! without their own modelling primitives.
//!
//! | Primitive  | V  | E  | F  | Boundary            |
//! |------------|----|----|----|---------------------|
//! | `quad`     | 4  | 4  | 1  | the 4 sides         |
//! | `grid`     | (n+1)(m+1) | n(m+1)+m(n+1) | nm | outer rim |
//! | `open_box` | 8  | 12 | 5  | the 4 top edges     |
//! | `cube`     | 8  | 12 | 6  | none                |

use glam::DVec3;

use crate::mesh::{Mesh, VertexId};

/// Single square in the XY plane, lower-left corner at the origin.
pub fn quad(size: f64) -> Mesh {
    grid(1, 1, size)
}

/// `columns × rows` grid of square quads in the XY plane, wound
/// counter-clockwise seen from +Z.
///
/// # Examples
/// ```
/// use smart_mesh::primitives::grid;
/// let mesh = grid(3, 2, 1.0);
/// assert_eq!(mesh.stats().faces, 6);
/// assert_eq!(mesh.stats().vertices, 12);
/// ```
pub fn grid(columns: u32, rows: u32, spacing: f64) -> Mesh {
    let mut mesh = Mesh::new();
    let stride = columns as usize + 1;
    let mut ids: Vec<VertexId> = Vec::with_capacity(stride * (rows as usize + 1));
    for y in 0..=rows {
        for x in 0..=columns {
            ids.push(mesh.add_vertex(DVec3::new(x as f64 * spacing, y as f64 * spacing, 0.0)));
        }
    }
    for y in 0..rows as usize {
        for x in 0..columns as usize {
            let v0 = ids[y * stride + x];
            let v1 = ids[y * stride + x + 1];
            let v2 = ids[(y + 1) * stride + x + 1];
            let v3 = ids[(y + 1) * stride + x];
            // Fresh, distinct vertices: cannot fail.
            let _ = mesh.add_face(&[v0, v1, v2, v3]);
        }
    }
    mesh
}

/// Axis-aligned cube with outward-facing quads, min corner at the origin.
pub fn cube(size: f64) -> Mesh {
    box_faces(size, true)
}

/// Cube without its top (+Z) face: five quads whose top rim is a closed
/// loop of four border edges.
pub fn open_box(size: f64) -> Mesh {
    box_faces(size, false)
}

fn box_faces(size: f64, with_top: bool) -> Mesh {
    let mut mesh = Mesh::new();
    let corners: Vec<VertexId> = [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (0.0, 1.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y, z)| mesh.add_vertex(DVec3::new(x, y, z) * size))
    .collect();

    let mut loops = vec![
        [0, 3, 2, 1], // bottom
        [0, 1, 5, 4], // front
        [1, 2, 6, 5], // right
        [2, 3, 7, 6], // back
        [3, 0, 4, 7], // left
    ];
    if with_top {
        loops.push([4, 5, 6, 7]);
    }
    for face in loops {
        let verts = face.map(|i| corners[i]);
        // Fresh, distinct vertices: cannot fail.
        let _ = mesh.add_face(&verts);
    }
    mesh
}
