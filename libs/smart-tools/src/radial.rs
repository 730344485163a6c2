//! # Radial Symmetry Editor
//!
//! Modal editor for a radial array: `count` copies of an object spaced
//! `360° / count` about one world axis through a pivot object.
//!
//! Horizontal pointer travel edits the count. Holding ctrl switches the same
//! travel to cycling the axis. Every switch re-anchors the pointer and the
//! current values so the edit continues from where it is instead of jumping.
//!
//! ```text
//! count = max(1, anchor_count + floor(dx * sensitivity))
//! axis  = floor(anchor_axis + dx * sensitivity) mod 3
//! ```

use config::constants::{ToolConfig, AXIS_COUNT, RADIAL_MODIFIER_NAME, RADIAL_PIVOT_SUFFIX};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use smart_mesh::Axis;
use tracing::{debug, info};

use crate::error::{Completion, SkipReason, ToolResult};
use crate::event::{Button, PointerEvent};
use crate::host::SceneHost;
use crate::modal::{Gesture, GestureState, Invoked, ToolContext};

// =============================================================================
// SETTINGS
// =============================================================================

/// Radial symmetry settings as the host stores them: a copy count on the
/// array modifier and an Euler offset rotation on the pivot object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialModifier {
    /// Number of copies.
    pub count: u32,
    /// XYZ Euler rotation of the pivot, radians.
    pub offset_rotation: DVec3,
}

/// Radial symmetry settings as the editor works with them.
///
/// # Examples
/// ```
/// use smart_mesh::Axis;
/// use smart_tools::radial::RadialSymmetry;
///
/// let sym = RadialSymmetry::new(4, Axis::Y);
/// let rotation = sym.offset_rotation();
/// assert!((rotation.y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(RadialSymmetry::recover(&sym.to_modifier(), 1e-9), sym);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadialSymmetry {
    /// Number of copies, never below 1.
    pub count: u32,
    /// Axis the copies are spread around.
    pub axis: Axis,
}

impl RadialSymmetry {
    /// Settings with `count` clamped to at least 1.
    pub fn new(count: u32, axis: Axis) -> Self {
        Self {
            count: count.max(1),
            axis,
        }
    }

    /// Euler offset rotation putting `360° / count` on the axis.
    pub fn offset_rotation(&self) -> DVec3 {
        self.axis.vector((360.0 / self.count.max(1) as f64).to_radians())
    }

    /// Host representation of these settings.
    pub fn to_modifier(&self) -> RadialModifier {
        RadialModifier {
            count: self.count,
            offset_rotation: self.offset_rotation(),
        }
    }

    /// Reads settings back from the host. The axis is the first Euler
    /// component above `tolerance`, X then Y then Z; a rotation with none
    /// falls back to X.
    pub fn recover(modifier: &RadialModifier, tolerance: f64) -> Self {
        let axis = Axis::ALL
            .into_iter()
            .find(|&a| a.component(modifier.offset_rotation) > tolerance)
            .unwrap_or(Axis::X);
        Self::new(modifier.count, axis)
    }
}

// =============================================================================
// EDITOR GESTURE
// =============================================================================

/// Which value horizontal motion edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditMode {
    Count,
    Axis,
}

/// Running radial symmetry edit.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialEditor {
    original: RadialSymmetry,
    current: RadialSymmetry,
    anchor_x: f64,
    anchor: RadialSymmetry,
    mode: EditMode,
    sensitivity: f64,
}

impl RadialEditor {
    /// Starts editing the active object's radial symmetry, creating it with
    /// the default count about Z when absent.
    pub fn invoke(
        scene: &mut dyn SceneHost,
        pointer_x: f64,
        config: &ToolConfig,
    ) -> ToolResult<Invoked<Self>> {
        let Some(name) = scene.active_object_name() else {
            return Ok(Invoked::Done(Completion::Skipped(SkipReason::EmptySelection)));
        };
        let modifier = match scene.radial_symmetry(RADIAL_MODIFIER_NAME) {
            Some(existing) => existing,
            None => {
                let fresh = RadialSymmetry::new(config.default_radial_count, Axis::Z).to_modifier();
                let pivot = format!("{name}{RADIAL_PIVOT_SUFFIX}");
                scene.add_radial_symmetry(RADIAL_MODIFIER_NAME, &pivot, fresh)?;
                info!(object = %name, pivot = %pivot, "created radial symmetry");
                fresh
            }
        };
        let settings = RadialSymmetry::recover(&modifier, config.tolerance);
        Ok(Invoked::Modal(Self {
            original: settings,
            current: settings,
            anchor_x: pointer_x,
            anchor: settings,
            mode: EditMode::Count,
            sensitivity: config.radial_sensitivity,
        }))
    }

    /// Settings as last written to the host.
    pub fn current(&self) -> RadialSymmetry {
        self.current
    }

    /// Settings found when the editor started.
    pub fn original(&self) -> RadialSymmetry {
        self.original
    }

    fn motion(&mut self, x: f64, ctrl: bool) {
        let mode = if ctrl { EditMode::Axis } else { EditMode::Count };
        if mode != self.mode {
            self.mode = mode;
            self.anchor_x = x;
            self.anchor = self.current;
        }
        let steps = (x - self.anchor_x) * self.sensitivity;
        match self.mode {
            EditMode::Count => {
                let count = self.anchor.count as i64 + steps.floor() as i64;
                if count < 1 {
                    self.current.count = 1;
                    self.anchor_x = x;
                    self.anchor.count = 1;
                } else {
                    self.current.count = u32::try_from(count).unwrap_or(u32::MAX);
                }
            }
            EditMode::Axis => {
                let cycled = (self.anchor.axis.index() as f64 + steps)
                    .rem_euclid(AXIS_COUNT as f64)
                    .floor() as usize;
                self.current.axis = Axis::from_index(cycled.min(2)).unwrap_or(Axis::Z);
            }
        }
    }
}

impl Gesture for RadialEditor {
    fn handle(
        mut self,
        event: &PointerEvent,
        cx: &mut ToolContext<'_>,
    ) -> ToolResult<GestureState<Self>> {
        match *event {
            PointerEvent::Move {
                position,
                modifiers,
            } => {
                self.motion(position.x, modifiers.ctrl);
                cx.scene
                    .set_radial_symmetry(RADIAL_MODIFIER_NAME, self.current.to_modifier())?;
                debug!(count = self.current.count, axis = ?self.current.axis, "radial symmetry");
                Ok(GestureState::Active(self))
            }
            PointerEvent::Release(Button::Left) => {
                info!(
                    count = self.current.count,
                    axis = ?self.current.axis,
                    "radial symmetry committed"
                );
                Ok(GestureState::Committed)
            }
            ref cancel if cancel.is_cancel() => {
                cx.scene
                    .set_radial_symmetry(RADIAL_MODIFIER_NAME, self.original.to_modifier())?;
                info!("radial symmetry cancelled");
                Ok(GestureState::Cancelled)
            }
            _ => Ok(GestureState::Active(self)),
        }
    }
}
