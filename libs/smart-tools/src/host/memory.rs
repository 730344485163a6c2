//! In-memory scene host.
//!
//! Keeps a flat list of named objects and one curve, enough to run every
//! command without an editor. Lattice deformation itself is not evaluated:
//! applying a lattice drops the binding and the lattice object and leaves
//! the mesh as the undeformed cage found it.

use glam::{DMat4, DQuat, DVec3, EulerRot};
use smart_mesh::{Axis, Mesh, SelectionMode, VertexId};
use tracing::debug;

use super::{SceneHost, TransformTarget};
use crate::error::{ToolError, ToolResult};
use crate::lattice::LatticeCage;
use crate::radial::RadialModifier;

/// A lattice deforming an object.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeBinding {
    /// Name of the lattice object.
    pub lattice: String,
    /// Vertex group restricting the deformation, with its members.
    pub group: Option<(String, Vec<VertexId>)>,
}

/// Radial symmetry array on an object. The count lives on the modifier,
/// the offset rotation on the pivot object.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialArray {
    /// Modifier name.
    pub modifier: String,
    /// Name of the pivot object supplying the offset rotation.
    pub pivot: String,
    /// Number of copies.
    pub count: u32,
}

/// Object in an [`InMemoryScene`].
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Unique name.
    pub name: String,
    /// Object selection flag.
    pub selected: bool,
    /// World location.
    pub location: DVec3,
    /// XYZ Euler rotation in radians.
    pub rotation: DVec3,
    /// Mesh data, if the object is a mesh.
    pub mesh: Option<Mesh>,
    /// Radial symmetry modifiers.
    pub radial: Vec<RadialArray>,
    /// Lattice deforming this object.
    pub lattice: Option<LatticeBinding>,
    /// Cage shape, if this object is a lattice.
    pub cage: Option<LatticeCage>,
}

impl SceneObject {
    /// Unselected object at the origin.
    pub fn new(name: impl Into<String>, mesh: Option<Mesh>) -> Self {
        Self {
            name: name.into(),
            selected: false,
            location: DVec3::ZERO,
            rotation: DVec3::ZERO,
            mesh,
            radial: Vec::new(),
            lattice: None,
            cage: None,
        }
    }

    /// Rotation as a quaternion.
    pub fn orientation(&self) -> DQuat {
        DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Object-to-world matrix.
    pub fn world_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.orientation(), self.location)
    }

    /// Turns the object by `angle` radians about the world `axis`.
    pub fn rotate_world(&mut self, axis: Axis, angle: f64) {
        let turned = DQuat::from_axis_angle(axis.unit(), angle) * self.orientation();
        let (x, y, z) = turned.to_euler(EulerRot::XYZ);
        self.rotation = DVec3::new(x, y, z);
    }
}

/// Curve control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// World position.
    pub position: DVec3,
    /// Selection flag.
    pub selected: bool,
}

/// Scene host kept entirely in memory.
///
/// # Examples
/// ```
/// use smart_mesh::{primitives, SelectionMode};
/// use smart_tools::host::{InMemoryScene, SceneHost};
///
/// let mut scene = InMemoryScene::new(SelectionMode::Object);
/// scene.add_object("Cube", Some(primitives::cube(1.0)));
/// scene.select_object("Cube", true).unwrap();
/// assert_eq!(scene.selected_object_count(), 1);
/// assert_eq!(scene.active_object_name().as_deref(), Some("Cube"));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryScene {
    mode: SelectionMode,
    objects: Vec<SceneObject>,
    active: Option<usize>,
    curve: Vec<CurvePoint>,
    editing_lattice: Option<String>,
}

impl InMemoryScene {
    /// Empty scene in `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            objects: Vec::new(),
            active: None,
            curve: Vec::new(),
            editing_lattice: None,
        }
    }

    /// Switches selection mode.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Adds an object and makes it active.
    pub fn add_object(&mut self, name: impl Into<String>, mesh: Option<Mesh>) -> &mut SceneObject {
        self.objects.push(SceneObject::new(name, mesh));
        let index = self.objects.len() - 1;
        self.active = Some(index);
        &mut self.objects[index]
    }

    /// Object by name.
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Mutable object by name.
    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    /// All objects in creation order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Makes the named object active.
    pub fn set_active(&mut self, name: &str) -> ToolResult<()> {
        self.active = Some(self.index_of(name)?);
        Ok(())
    }

    /// Sets an object's selection flag.
    pub fn select_object(&mut self, name: &str, selected: bool) -> ToolResult<()> {
        let index = self.index_of(name)?;
        self.objects[index].selected = selected;
        Ok(())
    }

    /// Appends a curve control point.
    pub fn add_curve_point(&mut self, position: DVec3, selected: bool) {
        self.curve.push(CurvePoint { position, selected });
    }

    /// Curve control points in order.
    pub fn curve_points(&self) -> &[CurvePoint] {
        &self.curve
    }

    /// Lattice currently being edited.
    pub fn editing_lattice(&self) -> Option<&str> {
        self.editing_lattice.as_deref()
    }

    fn index_of(&self, name: &str) -> ToolResult<usize> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .ok_or_else(|| ToolError::host(format!("no object named {name:?}")))
    }

    fn active_object(&self) -> Option<&SceneObject> {
        self.active.and_then(|i| self.objects.get(i))
    }

    fn active_object_mut(&mut self) -> ToolResult<&mut SceneObject> {
        self.active
            .and_then(|i| self.objects.get_mut(i))
            .ok_or_else(|| ToolError::host("no active object"))
    }

    fn remove_object(&mut self, name: &str) -> ToolResult<()> {
        let index = self.index_of(name)?;
        let active_name = self.active_object().map(|o| o.name.clone());
        self.objects.remove(index);
        self.active = active_name.and_then(|n| self.objects.iter().position(|o| o.name == n));
        Ok(())
    }

    fn unique_name(&self, base: &str) -> String {
        (1..)
            .map(|i| format!("{base}.{i:03}"))
            .find(|candidate| self.object(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    fn selected_points_centroid(&self) -> Option<DVec3> {
        let selected: Vec<DVec3> = self
            .curve
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.position)
            .collect();
        if selected.is_empty() {
            return None;
        }
        Some(selected.iter().copied().sum::<DVec3>() / selected.len() as f64)
    }
}

impl TransformTarget for InMemoryScene {
    fn translate(&mut self, delta: DVec3) -> ToolResult<()> {
        match self.mode {
            SelectionMode::Object => {
                for object in self.objects.iter_mut().filter(|o| o.selected) {
                    object.location += delta;
                }
            }
            SelectionMode::Curve => {
                for point in self.curve.iter_mut().filter(|p| p.selected) {
                    point.position += delta;
                }
            }
            mode => {
                return Err(ToolError::host(format!(
                    "{mode:?} selections are moved through the mesh"
                )))
            }
        }
        Ok(())
    }

    fn rotate(&mut self, axis: Axis, angle: f64) -> ToolResult<()> {
        match self.mode {
            SelectionMode::Object => {
                for object in self.objects.iter_mut().filter(|o| o.selected) {
                    object.rotate_world(axis, angle);
                }
            }
            SelectionMode::Curve => {
                let Some(pivot) = self.selected_points_centroid() else {
                    return Ok(());
                };
                let rotation = DQuat::from_axis_angle(axis.unit(), angle);
                for point in self.curve.iter_mut().filter(|p| p.selected) {
                    point.position = pivot + rotation * (point.position - pivot);
                }
            }
            mode => {
                return Err(ToolError::host(format!(
                    "{mode:?} selections are moved through the mesh"
                )))
            }
        }
        Ok(())
    }
}

impl SceneHost for InMemoryScene {
    fn mode(&self) -> SelectionMode {
        self.mode
    }

    fn mesh(&self) -> Option<&Mesh> {
        self.active_object().and_then(|o| o.mesh.as_ref())
    }

    fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        self.active
            .and_then(|i| self.objects.get_mut(i))
            .and_then(|o| o.mesh.as_mut())
    }

    fn selected_object_count(&self) -> usize {
        self.objects.iter().filter(|o| o.selected).count()
    }

    fn delete_selected_objects(&mut self) -> ToolResult<()> {
        let doomed: Vec<String> = self
            .objects
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.name.clone())
            .collect();
        for name in &doomed {
            self.remove_object(name)?;
        }
        debug!(count = doomed.len(), "deleted objects");
        Ok(())
    }

    fn duplicate_selected_objects(&mut self) -> ToolResult<()> {
        let originals: Vec<usize> = (0..self.objects.len())
            .filter(|&i| self.objects[i].selected)
            .collect();
        for &i in &originals {
            let mut copy = self.objects[i].clone();
            copy.name = self.unique_name(&self.objects[i].name);
            self.objects[i].selected = false;
            self.objects.push(copy);
            self.active = Some(self.objects.len() - 1);
        }
        Ok(())
    }

    fn selected_curve_point_count(&self) -> usize {
        self.curve.iter().filter(|p| p.selected).count()
    }

    fn delete_curve_points(&mut self) -> ToolResult<()> {
        self.curve.retain(|p| !p.selected);
        Ok(())
    }

    fn extrude_curve_points(&mut self) -> ToolResult<()> {
        let copies: Vec<CurvePoint> = self.curve.iter().filter(|p| p.selected).copied().collect();
        for point in &mut self.curve {
            point.selected = false;
        }
        self.curve.extend(copies);
        Ok(())
    }

    fn active_object_name(&self) -> Option<String> {
        self.active_object().map(|o| o.name.clone())
    }

    fn object_exists(&self, name: &str) -> bool {
        self.object(name).is_some()
    }

    fn active_world_matrix(&self) -> DMat4 {
        self.active_object()
            .map(SceneObject::world_matrix)
            .unwrap_or(DMat4::IDENTITY)
    }

    fn radial_symmetry(&self, modifier: &str) -> Option<RadialModifier> {
        let array = self
            .active_object()?
            .radial
            .iter()
            .find(|r| r.modifier == modifier)?;
        let pivot = self.object(&array.pivot)?;
        Some(RadialModifier {
            count: array.count,
            offset_rotation: pivot.rotation,
        })
    }

    fn add_radial_symmetry(
        &mut self,
        modifier: &str,
        pivot: &str,
        settings: RadialModifier,
    ) -> ToolResult<()> {
        let active = self.active;
        let object = self.active_object_mut()?;
        object.radial.push(RadialArray {
            modifier: modifier.to_string(),
            pivot: pivot.to_string(),
            count: settings.count,
        });
        let mut helper = SceneObject::new(pivot, None);
        helper.location = object.location;
        self.objects.push(helper);
        self.active = active;
        self.set_radial_symmetry(modifier, settings)
    }

    fn set_radial_symmetry(&mut self, modifier: &str, settings: RadialModifier) -> ToolResult<()> {
        let array = self
            .active_object_mut()?
            .radial
            .iter_mut()
            .find(|r| r.modifier == modifier)
            .ok_or_else(|| ToolError::host(format!("no modifier named {modifier:?}")))?;
        array.count = settings.count;
        let pivot = array.pivot.clone();
        self.object_mut(&pivot)
            .ok_or_else(|| ToolError::host(format!("pivot {pivot:?} is gone")))?
            .rotation = settings.offset_rotation;
        Ok(())
    }

    fn create_lattice(
        &mut self,
        object: &str,
        lattice: &str,
        cage: &LatticeCage,
        group: Option<(&str, &[VertexId])>,
    ) -> ToolResult<()> {
        let target = self.index_of(object)?;
        self.objects[target].lattice = Some(LatticeBinding {
            lattice: lattice.to_string(),
            group: group.map(|(name, members)| (name.to_string(), members.to_vec())),
        });
        self.objects[target].selected = false;

        let mut cage_object = SceneObject::new(lattice, None);
        cage_object.location = cage.center;
        cage_object.cage = Some(*cage);
        cage_object.selected = true;
        self.objects.push(cage_object);
        self.edit_lattice(lattice)
    }

    fn edit_lattice(&mut self, lattice: &str) -> ToolResult<()> {
        let index = self.index_of(lattice)?;
        for object in &mut self.objects {
            object.selected = false;
        }
        self.objects[index].selected = true;
        self.active = Some(index);
        self.editing_lattice = Some(lattice.to_string());
        Ok(())
    }

    fn apply_lattice(&mut self, object: &str, lattice: &str) -> ToolResult<()> {
        let target = self.index_of(object)?;
        self.objects[target].lattice = None;
        self.remove_object(lattice)?;
        if self.editing_lattice.as_deref() == Some(lattice) {
            self.editing_lattice = None;
        }
        let target = self.index_of(object)?;
        for other in &mut self.objects {
            other.selected = false;
        }
        self.objects[target].selected = true;
        self.active = Some(target);
        Ok(())
    }
}
