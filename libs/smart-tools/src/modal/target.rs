//! What a running gesture moves.

use glam::DVec3;
use smart_mesh::{Axis, Mesh, Selection, SelectionMode, VertexId};

use crate::error::ToolResult;
use crate::host::{active_mesh, active_mesh_mut, MeshTransform, SceneHost, TransformTarget};

/// Geometry a gesture transforms, resolved against the host on every event
/// so no borrow outlives a single step.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureTarget {
    /// The host's own selection (objects or curve points).
    Scene,
    /// Vertices of the active mesh, rotating about a fixed pivot.
    Mesh {
        /// Vertices moved by the gesture.
        vertices: Vec<VertexId>,
        /// Rotation pivot captured when the gesture started.
        pivot: DVec3,
    },
}

impl GestureTarget {
    /// Targets `vertices`, pivoting about their current centroid.
    pub fn mesh(mesh: &Mesh, vertices: Vec<VertexId>) -> ToolResult<Self> {
        let pivot = mesh.centroid(&vertices)?.unwrap_or(DVec3::ZERO);
        Ok(GestureTarget::Mesh { vertices, pivot })
    }

    /// Whatever the host currently has selected under its mode, `None` when
    /// nothing is.
    pub fn from_selection(scene: &dyn SceneHost) -> ToolResult<Option<Self>> {
        let mode = scene.mode();
        let selected = match mode {
            SelectionMode::Object => scene.selected_object_count() > 0,
            SelectionMode::Curve => scene.selected_curve_point_count() > 0,
            SelectionMode::Vertex | SelectionMode::Edge | SelectionMode::Face => {
                let mesh = active_mesh(scene)?;
                let selection = Selection::capture(mesh, mode);
                if selection.is_empty() {
                    return Ok(None);
                }
                return Self::mesh(mesh, selection.vertices().to_vec()).map(Some);
            }
        };
        Ok(selected.then_some(GestureTarget::Scene))
    }

    /// Applies a translation increment.
    pub fn translate(&self, scene: &mut dyn SceneHost, delta: DVec3) -> ToolResult<()> {
        match self {
            GestureTarget::Scene => scene.translate(delta),
            GestureTarget::Mesh { vertices, pivot } => {
                MeshTransform::new(active_mesh_mut(scene)?, vertices, *pivot).translate(delta)
            }
        }
    }

    /// Applies a rotation increment.
    pub fn rotate(&self, scene: &mut dyn SceneHost, axis: Axis, angle: f64) -> ToolResult<()> {
        match self {
            GestureTarget::Scene => scene.rotate(axis, angle),
            GestureTarget::Mesh { vertices, pivot } => {
                MeshTransform::new(active_mesh_mut(scene)?, vertices, *pivot).rotate(axis, angle)
            }
        }
    }
}
