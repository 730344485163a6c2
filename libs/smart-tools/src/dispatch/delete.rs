use std::collections::BTreeSet;

use smart_mesh::{selection, FaceId, Mesh, Selection, SelectionMode};
use tracing::{debug, info};

use crate::error::{Completion, SkipReason, ToolResult};
use crate::host::{active_mesh_mut, SceneHost};

/// Deletes whatever the host has selected, choosing the edit by mode.
pub fn smart_delete(scene: &mut dyn SceneHost) -> ToolResult<Completion> {
    match scene.mode() {
        SelectionMode::Object => {
            if scene.selected_object_count() == 0 {
                return Ok(Completion::Skipped(SkipReason::EmptySelection));
            }
            scene.delete_selected_objects()?;
            info!("smart delete: objects");
            Ok(Completion::Applied)
        }
        SelectionMode::Curve => {
            if scene.selected_curve_point_count() == 0 {
                return Ok(Completion::Skipped(SkipReason::EmptySelection));
            }
            scene.delete_curve_points()?;
            info!("smart delete: curve points");
            Ok(Completion::Applied)
        }
        mode @ (SelectionMode::Vertex | SelectionMode::Edge | SelectionMode::Face) => {
            delete_mesh_selection(active_mesh_mut(scene)?, mode)
        }
    }
}

/// Mesh half of [`smart_delete`].
///
/// # Examples
/// ```
/// use smart_mesh::{primitives, SelectionMode};
/// use smart_tools::dispatch::delete_mesh_selection;
/// use smart_tools::Completion;
///
/// let mut mesh = primitives::quad(1.0);
/// let edges: Vec<_> = mesh.edges().map(|(id, _)| id).collect();
/// for e in edges {
///     mesh.select_edge(e, true).unwrap();
/// }
/// // A closed border loop takes its face with it.
/// let done = delete_mesh_selection(&mut mesh, SelectionMode::Edge).unwrap();
/// assert_eq!(done, Completion::Applied);
/// assert!(mesh.is_empty());
/// ```
pub fn delete_mesh_selection(mesh: &mut Mesh, mode: SelectionMode) -> ToolResult<Completion> {
    let selected = Selection::capture(mesh, mode);
    if selected.is_empty() {
        return Ok(Completion::Skipped(SkipReason::EmptySelection));
    }

    match mode {
        SelectionMode::Vertex => {
            mesh.delete_vertices(selected.vertices())?;
            info!(vertices = selected.vertices().len(), "smart delete: vertices");
        }
        SelectionMode::Edge => {
            let edges = selected.edges();
            if selection::is_border(mesh, edges)? {
                let mut faces = BTreeSet::new();
                for &e in edges {
                    faces.extend(mesh.edge(e)?.faces().iter().copied());
                }
                let faces: Vec<FaceId> = faces.into_iter().collect();
                selected.validate(mesh)?;
                mesh.delete_faces(&faces)?;
                info!(faces = faces.len(), "smart delete: border loop faces");
            } else {
                let dissolved = mesh.dissolve_edges(edges)?;
                debug!(requested = edges.len(), dissolved, "dissolve");
                if dissolved == 0 {
                    return Ok(Completion::Skipped(SkipReason::UnsupportedTopology));
                }
                info!(edges = dissolved, "smart delete: dissolved edges");
            }
        }
        SelectionMode::Face => {
            mesh.delete_faces(selected.faces())?;
            info!(faces = selected.faces().len(), "smart delete: faces");
        }
        SelectionMode::Object | SelectionMode::Curve => {
            return Ok(Completion::Skipped(SkipReason::EmptySelection));
        }
    }
    Ok(Completion::Applied)
}
