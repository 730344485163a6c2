//! Tests for the topology queries.

use glam::DVec3;

use super::*;
use crate::primitives::{cube, grid, open_box};

fn vid(mesh: &Mesh, x: f64, y: f64, z: f64) -> VertexId {
    let target = DVec3::new(x, y, z);
    mesh.vertices()
        .find(|(_, v)| v.position.distance(target) < 1e-9)
        .map(|(id, _)| id)
        .unwrap()
}

#[test]
fn border_edges_of_open_box_are_the_rim() {
    let mesh = open_box(1.0);
    for (id, edge) in mesh.edges() {
        let on_rim = edge
            .verts()
            .iter()
            .all(|&v| mesh.vertex(v).unwrap().position.z == 1.0);
        assert_eq!(is_border_edge(&mesh, id).unwrap(), on_rim);
    }
}

#[test]
fn closed_mesh_has_no_border_vertices() {
    let mesh = cube(1.0);
    for (id, _) in mesh.vertices() {
        assert!(!is_border_vertex(&mesh, id).unwrap());
    }
}

#[test]
fn border_vertex_needs_two_border_edges() {
    let mesh = grid(2, 2, 1.0);
    assert!(is_border_vertex(&mesh, vid(&mesh, 0.0, 0.0, 0.0)).unwrap());
    assert!(is_border_vertex(&mesh, vid(&mesh, 1.0, 0.0, 0.0)).unwrap());
    assert!(!is_border_vertex(&mesh, vid(&mesh, 1.0, 1.0, 0.0)).unwrap());
}

#[test]
fn are_border_vertices_is_false_for_empty_input() {
    let mesh = grid(1, 1, 1.0);
    assert!(!are_border_vertices(&mesh, &[]).unwrap());
    let all: Vec<_> = mesh.vertices().map(|(id, _)| id).collect();
    assert!(are_border_vertices(&mesh, &all).unwrap());
}

#[test]
fn corner_heuristic_flags_interior_grid_vertex() {
    let mesh = grid(2, 2, 1.0);
    // Known false positive: an interior valence-4 vertex touches 4 faces.
    assert!(is_corner_vertex(&mesh, vid(&mesh, 1.0, 1.0, 0.0)).unwrap());
    assert!(!is_corner_vertex(&mesh, vid(&mesh, 0.0, 0.0, 0.0)).unwrap());
    assert!(!is_corner_vertex(&mesh, vid(&mesh, 1.0, 0.0, 0.0)).unwrap());
}

#[test]
fn share_edge_requires_two_vertices() {
    let mesh = grid(1, 1, 1.0);
    let a = vid(&mesh, 0.0, 0.0, 0.0);
    for input in [vec![], vec![a], vec![a, a, a]] {
        assert_eq!(
            share_edge(&mesh, &input).unwrap_err(),
            MeshError::InvalidArity {
                expected: 2,
                actual: input.len()
            }
        );
    }
}

#[test]
fn share_edge_distinguishes_neighbours_from_diagonals() {
    let mesh = grid(1, 1, 1.0);
    let a = vid(&mesh, 0.0, 0.0, 0.0);
    let b = vid(&mesh, 1.0, 0.0, 0.0);
    let c = vid(&mesh, 1.0, 1.0, 0.0);
    assert!(share_edge(&mesh, &[a, b]).unwrap());
    assert!(!share_edge(&mesh, &[a, c]).unwrap());
}

#[test]
fn share_face_uses_intersection_of_incident_faces() {
    let mesh = grid(2, 1, 1.0);
    let a = vid(&mesh, 0.0, 0.0, 0.0);
    let c = vid(&mesh, 1.0, 1.0, 0.0);
    let far = vid(&mesh, 2.0, 0.0, 0.0);
    assert!(share_face(&mesh, &[a, c]).unwrap());
    assert!(!share_face(&mesh, &[a, far]).unwrap());
    assert!(!share_face(&mesh, &[]).unwrap());
    assert!(share_face(&mesh, &[far]).unwrap());
}

#[test]
fn queries_report_missing_handles() {
    let mesh = grid(1, 1, 1.0);
    assert_eq!(
        is_border_edge(&mesh, EdgeId(500)).unwrap_err(),
        MeshError::MissingEdge(EdgeId(500))
    );
    assert_eq!(
        is_corner_vertex(&mesh, VertexId(500)).unwrap_err(),
        MeshError::MissingVertex(VertexId(500))
    );
}

#[test]
fn fill_seeds_on_l_shaped_boundary() {
    // 2x2 grid with the top-right quad removed: the inner corner at (1,1)
    // is a border vertex touching three faces.
    let mut mesh = grid(2, 2, 1.0);
    let top_right = mesh
        .faces()
        .find(|(_, f)| {
            f.verts()
                .iter()
                .any(|&v| mesh.vertex(v).unwrap().position == DVec3::new(2.0, 2.0, 0.0))
        })
        .map(|(id, _)| id)
        .unwrap();
    mesh.delete_faces(&[top_right]).unwrap();

    let inner = vid(&mesh, 1.0, 1.0, 0.0);
    let neighbour = vid(&mesh, 1.0, 2.0, 0.0);
    assert_eq!(fill_seed_vertices(&mesh, inner).unwrap(), vec![inner]);
    assert_eq!(fill_seed_vertices(&mesh, neighbour).unwrap(), vec![inner]);
}
