//! End-to-end command sessions against the in-memory scene.

use approx::assert_relative_eq;
use config::constants::{ToolConfig, RADIAL_MODIFIER_NAME};
use glam::{DVec2, DVec3};
use smart_mesh::{primitives, Axis, Mesh, MeshStats, SelectionMode, VertexId};
use smart_tools::radial::RadialSymmetry;
use smart_tools::{
    dispatch, quick_ffd, Button, Completion, Gesture, GestureState, InMemoryScene, Invoked, Key,
    Modifiers, OrthoViewport, PointerEvent, RadialEditor, SceneHost, SmartExtrude, ToolContext,
};

fn run<G: Gesture>(
    invoked: Invoked<G>,
    events: &[PointerEvent],
    cx: &mut ToolContext<'_>,
) -> GestureState<G> {
    let mut state = match invoked {
        Invoked::Modal(gesture) => GestureState::Active(gesture),
        Invoked::Done(completion) => panic!("command finished immediately: {completion:?}"),
    };
    for event in events {
        state = state.step(event, cx).unwrap();
    }
    state
}

fn mesh_scene(mode: SelectionMode, mesh: Mesh, select: impl FnOnce(&mut Mesh)) -> InMemoryScene {
    let mut scene = InMemoryScene::new(mode);
    let object = scene.add_object("Mesh", Some(mesh));
    if let Some(mesh) = object.mesh.as_mut() {
        select(mesh);
    }
    scene
}

fn stats(scene: &InMemoryScene) -> MeshStats {
    scene.mesh().unwrap().stats()
}

/// Extrudes, drags, then cancels; the scene must end with the counts it
/// started with.
fn extrude_and_cancel(scene: &mut InMemoryScene) {
    let view = OrthoViewport::top();
    let mut cx = ToolContext {
        scene,
        viewport: &view,
    };
    let invoked = SmartExtrude::invoke(&mut cx, DVec2::ZERO, &ToolConfig::default()).unwrap();
    let end = run(
        invoked,
        &[
            PointerEvent::moved(0.5, 0.2),
            PointerEvent::moved(0.5, 2.5),
            PointerEvent::Press(Button::Right),
        ],
        &mut cx,
    );
    assert_eq!(end, GestureState::Cancelled);
}

// =============================================================================
// EXTRUDE THEN CANCEL
// =============================================================================

#[test]
fn cancelled_rim_extrude_leaves_the_box_as_it_was() {
    let mut scene = mesh_scene(SelectionMode::Edge, primitives::open_box(1.0), |mesh| {
        let rim: Vec<_> = mesh
            .edges()
            .filter(|(_, e)| e.faces().len() == 1)
            .map(|(id, _)| id)
            .collect();
        for e in rim {
            mesh.select_edge(e, true).unwrap();
        }
    });
    let before = stats(&scene);
    extrude_and_cancel(&mut scene);
    assert_eq!(stats(&scene), before);
}

#[test]
fn cancelled_single_edge_extrude_leaves_the_quad_as_it_was() {
    let mut scene = mesh_scene(SelectionMode::Edge, primitives::quad(1.0), |mesh| {
        let (edge, _) = mesh.edges().next().unwrap();
        mesh.select_edge(edge, true).unwrap();
    });
    let before = stats(&scene);
    extrude_and_cancel(&mut scene);
    assert_eq!(stats(&scene), before);
}

#[test]
fn cancelled_face_extrude_removes_the_copy() {
    let mut scene = mesh_scene(SelectionMode::Face, primitives::cube(1.0), |mesh| {
        let (face, _) = mesh.faces().next().unwrap();
        mesh.select_face(face, true).unwrap();
    });
    let before = stats(&scene);
    extrude_and_cancel(&mut scene);
    assert_eq!(stats(&scene), before);
}

#[test]
fn cancelled_vertex_extrude_removes_the_copy() {
    let mut scene = mesh_scene(SelectionMode::Vertex, primitives::quad(1.0), |mesh| {
        mesh.select_vertex(VertexId(3), true).unwrap();
    });
    let before = stats(&scene);
    extrude_and_cancel(&mut scene);
    assert_eq!(stats(&scene), before);
    assert_eq!(
        scene.mesh().unwrap().vertex(VertexId(3)).unwrap().position,
        DVec3::new(1.0, 1.0, 0.0)
    );
}

#[test]
fn cancelled_object_extrude_removes_the_duplicate() {
    let mut scene = InMemoryScene::new(SelectionMode::Object);
    scene.add_object("Cube", Some(primitives::cube(1.0))).selected = true;
    extrude_and_cancel(&mut scene);

    assert_eq!(scene.objects().len(), 1);
    assert_eq!(scene.object("Cube").unwrap().location, DVec3::ZERO);
}

#[test]
fn cancelled_curve_extrude_removes_the_new_points() {
    let mut scene = InMemoryScene::new(SelectionMode::Curve);
    scene.add_curve_point(DVec3::ZERO, false);
    scene.add_curve_point(DVec3::X, true);
    extrude_and_cancel(&mut scene);

    let positions: Vec<DVec3> = scene.curve_points().iter().map(|p| p.position).collect();
    assert_eq!(positions, [DVec3::ZERO, DVec3::X]);
}

#[test]
fn committed_face_extrude_keeps_the_moved_copy() {
    let mut scene = mesh_scene(SelectionMode::Face, primitives::quad(1.0), |mesh| {
        let (face, _) = mesh.faces().next().unwrap();
        mesh.select_face(face, true).unwrap();
    });
    let view = OrthoViewport::top();
    let mut cx = ToolContext {
        scene: &mut scene,
        viewport: &view,
    };
    let invoked = SmartExtrude::invoke(&mut cx, DVec2::ZERO, &ToolConfig::default()).unwrap();
    let end = run(
        invoked,
        &[
            PointerEvent::moved(-4.0, 1.0),
            PointerEvent::Key(Key::Other),
            PointerEvent::Release(Button::Left),
        ],
        &mut cx,
    );
    assert_eq!(end, GestureState::Committed);

    let mesh = scene.mesh().unwrap();
    assert_eq!(mesh.face_count(), 2);
    let shifted = mesh.vertices().filter(|(_, v)| v.position.x <= -3.0).count();
    assert_eq!(shifted, 4);
}

// =============================================================================
// SMART DELETE
// =============================================================================

#[test]
fn deleting_a_rim_loop_twice_empties_the_box() {
    let select_rim = |mesh: &mut Mesh| {
        let rim: Vec<_> = mesh
            .edges()
            .filter(|(_, e)| e.faces().len() == 1)
            .map(|(id, _)| id)
            .collect();
        for e in rim {
            mesh.select_edge(e, true).unwrap();
        }
    };
    let mut scene = mesh_scene(SelectionMode::Edge, primitives::open_box(1.0), select_rim);

    assert_eq!(dispatch::smart_delete(&mut scene).unwrap(), Completion::Applied);
    assert_eq!(stats(&scene).faces, 1);

    // The bottom is now bounded by a fresh loop.
    select_rim(scene.mesh_mut().unwrap());
    assert_eq!(dispatch::smart_delete(&mut scene).unwrap(), Completion::Applied);
    assert!(scene.mesh().unwrap().is_empty());
}

// =============================================================================
// RADIAL SYMMETRY & FFD
// =============================================================================

#[test]
fn radial_session_edits_count_then_axis() {
    let mut scene = InMemoryScene::new(SelectionMode::Object);
    scene.add_object("Gear", Some(primitives::cube(1.0)));
    let config = ToolConfig::default();
    let invoked = RadialEditor::invoke(&mut scene, 0.0, &config).unwrap();

    let view = OrthoViewport::top();
    let mut cx = ToolContext {
        scene: &mut scene,
        viewport: &view,
    };
    let ctrl = |x: f64| PointerEvent::Move {
        position: DVec2::new(x, 0.0),
        modifiers: Modifiers::CTRL,
    };
    let end = run(
        invoked,
        &[
            PointerEvent::moved(250.0, 0.0),
            ctrl(250.0),
            ctrl(350.0),
            PointerEvent::Release(Button::Left),
        ],
        &mut cx,
    );
    assert_eq!(end, GestureState::Committed);

    let stored = scene.radial_symmetry(RADIAL_MODIFIER_NAME).unwrap();
    assert_eq!(
        RadialSymmetry::recover(&stored, config.tolerance),
        RadialSymmetry::new(5, Axis::X)
    );
    assert_relative_eq!(stored.offset_rotation.x, 72f64.to_radians(), epsilon = 1e-12);
}

#[test]
fn quick_ffd_cycles_create_then_apply() {
    let mut scene = InMemoryScene::new(SelectionMode::Object);
    scene.add_object("Cube", Some(primitives::cube(1.0)));

    assert_eq!(quick_ffd(&mut scene).unwrap(), Completion::Applied);
    assert_eq!(scene.active_object_name().as_deref(), Some("Cube.Lattice"));

    assert_eq!(quick_ffd(&mut scene).unwrap(), Completion::Applied);
    assert_eq!(scene.active_object_name().as_deref(), Some("Cube"));
    assert_eq!(scene.objects().len(), 1);
}
