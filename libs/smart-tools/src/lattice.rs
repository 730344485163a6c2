//! # Quick FFD
//!
//! One command toggling a free-form-deformation lattice around the active
//! object:
//!
//! 1. Active object is itself `<obj>.Lattice` → apply it to `<obj>`.
//! 2. `<active>.Lattice` exists → start editing it.
//! 3. Otherwise → create a cage around the object (object mode) or around
//!    the selected vertices (mesh modes, bound through a vertex group).

use config::constants::{FFD_VERTEX_GROUP, LATTICE_SUFFIX};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use smart_mesh::{Selection, SelectionMode, VertexId};
use tracing::info;

use crate::error::{Completion, SkipReason, ToolError, ToolResult};
use crate::host::{active_mesh, SceneHost};

/// Box a lattice is fitted to, in world space.
///
/// # Examples
/// ```
/// use glam::{DQuat, DVec3};
/// use smart_tools::lattice::LatticeCage;
///
/// let cage = LatticeCage::from_points(
///     &[DVec3::new(-1.0, 0.0, 2.0), DVec3::new(3.0, 2.0, 4.0)],
///     DQuat::IDENTITY,
/// )
/// .unwrap();
/// assert_eq!(cage.center, DVec3::new(1.0, 1.0, 3.0));
/// assert_eq!(cage.dimensions, DVec3::new(4.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeCage {
    /// Centre of the bounding box.
    pub center: DVec3,
    /// Extent along each axis; becomes the lattice scale.
    pub dimensions: DVec3,
    /// Lattice orientation.
    pub rotation: DQuat,
}

impl LatticeCage {
    /// Axis-aligned bounds of `points`. `None` when there are no points.
    pub fn from_points(points: &[DVec3], rotation: DQuat) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self {
            center: (min + max) / 2.0,
            dimensions: max - min,
            rotation,
        })
    }
}

/// What quick FFD will do for the current scene.
#[derive(Debug, Clone, PartialEq)]
pub enum FfdAction {
    /// Bake `lattice` into `object` and remove it.
    Apply {
        /// Deformed object.
        object: String,
        /// Lattice to bake.
        lattice: String,
    },
    /// Start editing an existing lattice.
    Edit {
        /// Lattice to edit.
        lattice: String,
    },
    /// Fit a new lattice.
    Create {
        /// Object to deform.
        object: String,
        /// Name for the new lattice.
        lattice: String,
        /// Cage shape.
        cage: LatticeCage,
        /// Vertices bound through the FFD vertex group, mesh modes only.
        group: Option<Vec<VertexId>>,
    },
}

/// Decides what [`quick_ffd`] does without changing anything.
pub fn plan_ffd(scene: &dyn SceneHost) -> ToolResult<Result<FfdAction, SkipReason>> {
    let Some(active) = scene.active_object_name() else {
        return Ok(Err(SkipReason::EmptySelection));
    };

    if let Some(object) = active.strip_suffix(LATTICE_SUFFIX) {
        return Ok(Ok(FfdAction::Apply {
            object: object.to_string(),
            lattice: active.clone(),
        }));
    }

    let lattice = format!("{active}{LATTICE_SUFFIX}");
    if scene.object_exists(&lattice) {
        return Ok(Ok(FfdAction::Edit { lattice }));
    }

    let mesh = active_mesh(scene)?;
    let world = scene.active_world_matrix();
    let (points, rotation, group) = match scene.mode() {
        SelectionMode::Object => {
            let points: Vec<DVec3> = mesh
                .vertices()
                .map(|(_, v)| world.transform_point3(v.position))
                .collect();
            let (_, rotation, _) = world.to_scale_rotation_translation();
            (points, rotation, None)
        }
        mode @ (SelectionMode::Vertex | SelectionMode::Edge | SelectionMode::Face) => {
            let selection = Selection::capture(mesh, mode);
            let mut points = Vec::with_capacity(selection.vertices().len());
            for &v in selection.vertices() {
                points.push(world.transform_point3(mesh.vertex(v)?.position));
            }
            (points, DQuat::IDENTITY, Some(selection.vertices().to_vec()))
        }
        SelectionMode::Curve => {
            return Err(ToolError::host("quick FFD needs a mesh object"));
        }
    };

    Ok(match LatticeCage::from_points(&points, rotation) {
        Some(cage) => Ok(FfdAction::Create {
            object: active,
            lattice,
            cage,
            group,
        }),
        None => Err(SkipReason::EmptySelection),
    })
}

/// Applies, edits or creates the active object's FFD lattice.
pub fn quick_ffd(scene: &mut dyn SceneHost) -> ToolResult<Completion> {
    let action = match plan_ffd(&*scene)? {
        Ok(action) => action,
        Err(reason) => return Ok(Completion::Skipped(reason)),
    };
    match action {
        FfdAction::Apply { object, lattice } => {
            scene.apply_lattice(&object, &lattice)?;
            info!(%object, %lattice, "applied lattice");
        }
        FfdAction::Edit { lattice } => {
            scene.edit_lattice(&lattice)?;
            info!(%lattice, "editing lattice");
        }
        FfdAction::Create {
            object,
            lattice,
            cage,
            group,
        } => {
            let group = group.as_deref().map(|members| (FFD_VERTEX_GROUP, members));
            scene.create_lattice(&object, &lattice, &cage, group)?;
            info!(%object, %lattice, dimensions = ?cage.dimensions, "created lattice");
        }
    }
    Ok(Completion::Applied)
}
