//! # Host Interfaces
//!
//! Seams between the tools and the editor hosting them.
//!
//! | Trait               | Provides                                         |
//! |---------------------|--------------------------------------------------|
//! | [`Viewport`]        | region pixel → world point on the view plane     |
//! | [`TransformTarget`] | additive translate / rotate of "the selection"   |
//! | [`SceneHost`]       | objects, curves, modifiers, lattices, the mesh   |
//!
//! [`InMemoryScene`] implements [`SceneHost`] without an editor behind it and
//! is what the tests drive.

mod memory;


pub use memory::{CurvePoint, InMemoryScene, LatticeBinding, RadialArray, SceneObject};

use glam::{DMat4, DQuat, DVec2, DVec3};
use smart_mesh::{Axis, Mesh, SelectionMode, VertexId};

use crate::error::{ToolError, ToolResult};
use crate::lattice::LatticeCage;
use crate::radial::RadialModifier;

// =============================================================================
// VIEWPORT
// =============================================================================

/// Converts region coordinates into world space.
pub trait Viewport {
    /// World point under `region` on the plane through the world origin
    /// facing the view.
    fn region_to_world(&self, region: DVec2) -> DVec3;
}

/// Orthographic view: region pixels map linearly onto the view plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoViewport {
    /// View-to-world rotation; identity looks down -Z with +X right, +Y up.
    pub rotation: DQuat,
    /// Region coordinates of the world origin.
    pub center: DVec2,
    /// Region pixels per world unit.
    pub pixels_per_unit: f64,
}

impl OrthoViewport {
    /// Creates a viewport; fails unless `pixels_per_unit` is positive.
    pub fn new(rotation: DQuat, center: DVec2, pixels_per_unit: f64) -> ToolResult<Self> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(ToolError::host(format!(
                "pixels per unit must be positive, got {pixels_per_unit}"
            )));
        }
        Ok(Self {
            rotation,
            center,
            pixels_per_unit,
        })
    }

    /// Top view with one pixel per unit, origin at region (0, 0).
    pub fn top() -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            center: DVec2::ZERO,
            pixels_per_unit: 1.0,
        }
    }
}

impl Viewport for OrthoViewport {
    fn region_to_world(&self, region: DVec2) -> DVec3 {
        let local = (region - self.center) / self.pixels_per_unit;
        self.rotation * local.extend(0.0)
    }
}

// =============================================================================
// TRANSFORM TARGET
// =============================================================================

/// Something the modal gestures can move. Both operations compose with
/// whatever was applied before.
pub trait TransformTarget {
    /// Moves the target by `delta`.
    fn translate(&mut self, delta: DVec3) -> ToolResult<()>;

    /// Rotates the target by `angle` radians about the world `axis`.
    fn rotate(&mut self, axis: Axis, angle: f64) -> ToolResult<()>;
}

/// A set of mesh vertices seen as a transform target, rotating about a pivot
/// fixed by the caller.
#[derive(Debug)]
pub struct MeshTransform<'a> {
    mesh: &'a mut Mesh,
    vertices: &'a [VertexId],
    pivot: DVec3,
}

impl<'a> MeshTransform<'a> {
    /// Wraps `vertices` of `mesh`.
    pub fn new(mesh: &'a mut Mesh, vertices: &'a [VertexId], pivot: DVec3) -> Self {
        Self {
            mesh,
            vertices,
            pivot,
        }
    }
}

impl TransformTarget for MeshTransform<'_> {
    fn translate(&mut self, delta: DVec3) -> ToolResult<()> {
        self.mesh.translate_vertices(self.vertices, delta)?;
        Ok(())
    }

    fn rotate(&mut self, axis: Axis, angle: f64) -> ToolResult<()> {
        self.mesh
            .rotate_vertices(self.vertices, self.pivot, axis, angle)?;
        Ok(())
    }
}

// =============================================================================
// SCENE HOST
// =============================================================================

/// The editor around the tools.
///
/// As a [`TransformTarget`] the host moves whatever its own selection is in
/// object and curve modes; mesh selections are moved through
/// [`MeshTransform`] instead.
pub trait SceneHost: TransformTarget {
    /// Current selection mode.
    fn mode(&self) -> SelectionMode;

    /// Mesh of the active object, if it has one.
    fn mesh(&self) -> Option<&Mesh>;

    /// Mutable mesh of the active object, if it has one.
    fn mesh_mut(&mut self) -> Option<&mut Mesh>;

    // -------------------------------------------------------------------------
    // Objects & curves
    // -------------------------------------------------------------------------

    /// Number of selected objects.
    fn selected_object_count(&self) -> usize;

    /// Deletes the selected objects.
    fn delete_selected_objects(&mut self) -> ToolResult<()>;

    /// Duplicates the selected objects in place; the copies become the
    /// selection.
    fn duplicate_selected_objects(&mut self) -> ToolResult<()>;

    /// Number of selected curve control points.
    fn selected_curve_point_count(&self) -> usize;

    /// Deletes the selected curve control points.
    fn delete_curve_points(&mut self) -> ToolResult<()>;

    /// Extrudes the selected curve control points in place; the new points
    /// become the selection.
    fn extrude_curve_points(&mut self) -> ToolResult<()>;

    /// Name of the active object.
    fn active_object_name(&self) -> Option<String>;

    /// Whether an object with this name exists.
    fn object_exists(&self, name: &str) -> bool;

    /// Object-to-world matrix of the active object.
    fn active_world_matrix(&self) -> DMat4;

    // -------------------------------------------------------------------------
    // Radial symmetry
    // -------------------------------------------------------------------------

    /// The named radial symmetry modifier on the active object.
    fn radial_symmetry(&self, modifier: &str) -> Option<RadialModifier>;

    /// Adds a radial symmetry modifier driven by a new pivot object.
    fn add_radial_symmetry(
        &mut self,
        modifier: &str,
        pivot: &str,
        settings: RadialModifier,
    ) -> ToolResult<()>;

    /// Updates an existing radial symmetry modifier and its pivot.
    fn set_radial_symmetry(&mut self, modifier: &str, settings: RadialModifier) -> ToolResult<()>;

    // -------------------------------------------------------------------------
    // Lattices
    // -------------------------------------------------------------------------

    /// Creates lattice `lattice` shaped like `cage`, binds `object` to it
    /// (restricted to `group` when given) and starts editing the lattice.
    fn create_lattice(
        &mut self,
        object: &str,
        lattice: &str,
        cage: &LatticeCage,
        group: Option<(&str, &[VertexId])>,
    ) -> ToolResult<()>;

    /// Makes `lattice` active and starts editing it.
    fn edit_lattice(&mut self, lattice: &str) -> ToolResult<()>;

    /// Bakes the lattice deformation into `object` and removes `lattice`
    /// together with its vertex group.
    fn apply_lattice(&mut self, object: &str, lattice: &str) -> ToolResult<()>;
}

/// The active mesh, or a host error when the active object has none.
pub(crate) fn active_mesh(scene: &dyn SceneHost) -> ToolResult<&Mesh> {
    scene
        .mesh()
        .ok_or_else(|| ToolError::host("active object has no mesh"))
}

/// Mutable counterpart of [`active_mesh`].
pub(crate) fn active_mesh_mut(scene: &mut dyn SceneHost) -> ToolResult<&mut Mesh> {
    scene
        .mesh_mut()
        .ok_or_else(|| ToolError::host("active object has no mesh"))
}
