use smart_mesh::{topology, Mesh, Selection, SelectionMode};
use tracing::info;

use crate::error::{SkipReason, ToolResult};
use crate::host::{active_mesh_mut, SceneHost};
use crate::modal::GestureTarget;

/// Outcome of the extrude step that precedes the modal move.
#[derive(Debug, Clone, PartialEq)]
pub enum Extruded {
    /// New geometry exists and is selected; the target moves it.
    Geometry(GestureTarget),
    /// Nothing was created.
    Skipped(SkipReason),
}

/// Creates the geometry a smart extrude then moves, choosing the edit by
/// mode.
pub fn smart_extrude(scene: &mut dyn SceneHost) -> ToolResult<Extruded> {
    match scene.mode() {
        SelectionMode::Object => {
            if scene.selected_object_count() == 0 {
                return Ok(Extruded::Skipped(SkipReason::EmptySelection));
            }
            scene.duplicate_selected_objects()?;
            info!("smart extrude: duplicated objects");
            Ok(Extruded::Geometry(GestureTarget::Scene))
        }
        SelectionMode::Curve => {
            if scene.selected_curve_point_count() == 0 {
                return Ok(Extruded::Skipped(SkipReason::EmptySelection));
            }
            scene.extrude_curve_points()?;
            info!("smart extrude: curve points");
            Ok(Extruded::Geometry(GestureTarget::Scene))
        }
        mode @ (SelectionMode::Vertex | SelectionMode::Edge | SelectionMode::Face) => {
            extrude_mesh_selection(active_mesh_mut(scene)?, mode)
        }
    }
}

/// Mesh half of [`smart_extrude`].
///
/// Extruding interior edges is not defined, so an edge selection that is
/// not entirely border edges is skipped untouched.
pub fn extrude_mesh_selection(mesh: &mut Mesh, mode: SelectionMode) -> ToolResult<Extruded> {
    let selected = Selection::capture(mesh, mode);
    if selected.is_empty() {
        return Ok(Extruded::Skipped(SkipReason::EmptySelection));
    }

    let new_vertices = match mode {
        SelectionMode::Edge => {
            for &e in selected.edges() {
                if !topology::is_border_edge(mesh, e)? {
                    info!("smart extrude: interior edge selected, skipping");
                    return Ok(Extruded::Skipped(SkipReason::UnsupportedTopology));
                }
            }
            let map = mesh.extrude_edges(selected.edges())?;
            info!(edges = map.edges.len(), "smart extrude: border edges");
            map.new_vertices()
        }
        SelectionMode::Vertex | SelectionMode::Face => {
            let map = mesh.duplicate(selected.elements())?;
            info!(vertices = map.vertices.len(), "smart extrude: duplicated elements");
            map.vertices.into_values().collect()
        }
        SelectionMode::Object | SelectionMode::Curve => {
            return Ok(Extruded::Skipped(SkipReason::EmptySelection));
        }
    };
    Ok(Extruded::Geometry(GestureTarget::mesh(mesh, new_vertices)?))
}
