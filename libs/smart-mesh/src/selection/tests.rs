//! Tests for selection capture and the edge-set classifier.

use glam::DVec3;

use super::*;
use crate::primitives::{cube, grid, open_box, quad};

fn vid(mesh: &Mesh, x: f64, y: f64, z: f64) -> VertexId {
    let target = DVec3::new(x, y, z);
    mesh.vertices()
        .find(|(_, v)| v.position.distance(target) < 1e-9)
        .map(|(id, _)| id)
        .unwrap()
}

fn edge(mesh: &Mesh, a: (f64, f64, f64), b: (f64, f64, f64)) -> EdgeId {
    mesh.find_edge(vid(mesh, a.0, a.1, a.2), vid(mesh, b.0, b.1, b.2))
        .unwrap()
}

fn rim(mesh: &Mesh) -> Vec<EdgeId> {
    mesh.edges()
        .filter(|(_, e)| e.faces().len() == 1)
        .map(|(id, _)| id)
        .collect()
}

// =============================================================================
// CAPTURE
// =============================================================================

#[test]
fn edge_mode_flushes_endpoints_and_enclosed_faces() {
    let mut mesh = quad(1.0);
    let all: Vec<_> = mesh.edges().map(|(id, _)| id).collect();
    for &e in &all[..3] {
        mesh.select_edge(e, true).unwrap();
    }
    let sel = Selection::capture(&mesh, SelectionMode::Edge);
    assert_eq!(sel.edges().len(), 3);
    assert_eq!(sel.vertices().len(), 4);
    assert!(sel.faces().is_empty());

    mesh.select_edge(all[3], true).unwrap();
    let sel = Selection::capture(&mesh, SelectionMode::Edge);
    assert_eq!(sel.faces().len(), 1);
}

#[test]
fn vertex_mode_flushes_edges_with_both_ends() {
    let mut mesh = grid(2, 1, 1.0);
    for v in [vid(&mesh, 0.0, 0.0, 0.0), vid(&mesh, 1.0, 0.0, 0.0)] {
        mesh.select_vertex(v, true).unwrap();
    }
    let sel = Selection::capture(&mesh, SelectionMode::Vertex);
    assert_eq!(sel.vertices().len(), 2);
    assert_eq!(sel.edges().len(), 1);
    assert!(sel.faces().is_empty());
}

#[test]
fn face_mode_flushes_loops_without_duplicates() {
    let mut mesh = grid(2, 1, 1.0);
    let faces: Vec<_> = mesh.faces().map(|(id, _)| id).collect();
    for &f in &faces {
        mesh.select_face(f, true).unwrap();
    }
    let sel = Selection::capture(&mesh, SelectionMode::Face);
    assert_eq!(sel.faces().len(), 2);
    assert_eq!(sel.edges().len(), 7);
    assert_eq!(sel.vertices().len(), 6);
}

#[test]
fn object_mode_carries_no_elements() {
    let mut mesh = quad(1.0);
    let v = vid(&mesh, 0.0, 0.0, 0.0);
    mesh.select_vertex(v, true).unwrap();
    let sel = Selection::capture(&mesh, SelectionMode::Object);
    assert!(sel.is_empty());
    assert!(sel.elements().is_empty());
    assert!(!SelectionMode::Object.is_mesh());
    assert!(SelectionMode::Face.is_mesh());
}

#[test]
fn selection_goes_stale_after_topology_edit() {
    let mut mesh = quad(1.0);
    let sel = Selection::capture(&mesh, SelectionMode::Edge);
    assert!(sel.validate(&mesh).is_ok());

    let v = vid(&mesh, 0.0, 0.0, 0.0);
    mesh.translate_vertices(&[v], DVec3::Z).unwrap();
    assert!(sel.validate(&mesh).is_ok(), "moving vertices keeps handles valid");

    mesh.add_vertex(DVec3::ONE);
    assert_eq!(
        sel.validate(&mesh).unwrap_err(),
        MeshError::StaleSelection {
            captured: sel.revision(),
            current: mesh.revision()
        }
    );
}

// =============================================================================
// CLASSIFIER
// =============================================================================

#[test]
fn empty_input_is_false_everywhere() {
    let mesh = quad(1.0);
    assert!(!is_adjacent(&mesh, &[]).unwrap());
    assert!(!is_border(&mesh, &[]).unwrap());
    assert!(!is_ring(&mesh, &[]).unwrap());
    assert_eq!(classify(&mesh, &[]).unwrap(), SelectionShape::None);
}

#[test]
fn closed_border_loop_passes_and_every_proper_subset_fails() {
    let mesh = open_box(1.0);
    let loop_edges = rim(&mesh);
    assert_eq!(loop_edges.len(), 4);
    assert!(is_border(&mesh, &loop_edges).unwrap());

    for mask in 1u32..(1 << loop_edges.len()) - 1 {
        let subset: Vec<_> = loop_edges
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &e)| e)
            .collect();
        assert!(!is_border(&mesh, &subset).unwrap(), "subset {mask:#06b}");
    }
}

#[test]
fn interior_edges_are_never_a_border() {
    let mesh = cube(1.0);
    let top = [
        edge(&mesh, (0.0, 0.0, 1.0), (1.0, 0.0, 1.0)),
        edge(&mesh, (1.0, 0.0, 1.0), (1.0, 1.0, 1.0)),
        edge(&mesh, (1.0, 1.0, 1.0), (0.0, 1.0, 1.0)),
        edge(&mesh, (0.0, 1.0, 1.0), (0.0, 0.0, 1.0)),
    ];
    assert!(!is_border(&mesh, &top).unwrap());
}

#[test]
fn disjoint_closed_loops_pass_together() {
    let mut mesh = open_box(1.0);
    let mut loops = rim(&mesh);
    let other = open_box(1.0);
    // Second open box, shifted, added into the same mesh.
    let mut ids = std::collections::BTreeMap::new();
    for (id, v) in other.vertices() {
        ids.insert(id, mesh.add_vertex(v.position + DVec3::new(5.0, 0.0, 0.0)));
    }
    for (_, f) in other.faces() {
        let verts: Vec<_> = f.verts().iter().map(|v| ids[v]).collect();
        mesh.add_face(&verts).unwrap();
    }
    loops = rim(&mesh).into_iter().chain(loops).collect();
    loops.sort();
    loops.dedup();
    assert_eq!(loops.len(), 8);
    assert!(is_border(&mesh, &loops).unwrap());
}

#[test]
fn adjacency_needs_exactly_one_common_vertex() {
    let mesh = grid(2, 2, 1.0);
    let centre = (1.0, 1.0, 0.0);
    let fan = [
        edge(&mesh, centre, (1.0, 0.0, 0.0)),
        edge(&mesh, centre, (2.0, 1.0, 0.0)),
        edge(&mesh, centre, (1.0, 2.0, 0.0)),
    ];
    assert!(is_adjacent(&mesh, &fan).unwrap());

    let apart = [
        edge(&mesh, (0.0, 0.0, 0.0), (1.0, 0.0, 0.0)),
        edge(&mesh, (0.0, 2.0, 0.0), (1.0, 2.0, 0.0)),
    ];
    assert!(!is_adjacent(&mesh, &apart).unwrap());

    // A lone edge has both endpoints in common.
    assert!(!is_adjacent(&mesh, &fan[..1]).unwrap());
}

#[test]
fn parallel_edges_across_a_strip_form_a_ring() {
    let mesh = grid(3, 1, 1.0);
    let rungs: Vec<_> = (0..=3)
        .map(|x| edge(&mesh, (x as f64, 0.0, 0.0), (x as f64, 1.0, 0.0)))
        .collect();
    assert!(is_ring(&mesh, &rungs).unwrap());
    assert_eq!(classify(&mesh, &rungs).unwrap(), SelectionShape::Ring);

    // Gap in the middle: the two end rungs share no face with a selected edge.
    assert!(!is_ring(&mesh, &[rungs[0], rungs[3]]).unwrap());
}

#[test]
fn l_shaped_corner_is_an_accepted_ring_false_positive() {
    let mesh = quad(1.0);
    let corner = [
        edge(&mesh, (0.0, 0.0, 0.0), (1.0, 0.0, 0.0)),
        edge(&mesh, (1.0, 0.0, 0.0), (1.0, 1.0, 0.0)),
    ];
    assert!(is_ring(&mesh, &corner).unwrap());
}

#[test]
fn classification_prefers_border_then_fan() {
    let mesh = quad(1.0);
    let all: Vec<_> = mesh.edges().map(|(id, _)| id).collect();
    assert_eq!(classify(&mesh, &all).unwrap(), SelectionShape::BorderLoop);

    let corner = [
        edge(&mesh, (0.0, 0.0, 0.0), (1.0, 0.0, 0.0)),
        edge(&mesh, (1.0, 0.0, 0.0), (1.0, 1.0, 0.0)),
    ];
    assert_eq!(classify(&mesh, &corner).unwrap(), SelectionShape::AdjacentFan);
}

#[test]
fn classifier_reports_missing_edges() {
    let mesh = quad(1.0);
    assert_eq!(
        is_adjacent(&mesh, &[EdgeId(99)]).unwrap_err(),
        MeshError::MissingEdge(EdgeId(99))
    );
}
