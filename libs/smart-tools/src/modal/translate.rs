//! Smart translate: dominant-axis locked move (or turn) of the selection.
//!
//! Confirmed by releasing the middle button; right click or Escape puts
//! everything back.

use config::constants::ToolConfig;
use glam::{DVec2, DVec3};
use tracing::{debug, info};

use super::accumulator::{RotateAccumulator, TranslateAccumulator};
use super::target::GestureTarget;
use super::{Gesture, GestureState, Invoked, ToolContext};
use crate::error::{Completion, SkipReason, ToolError, ToolResult};
use crate::event::{Button, PointerEvent};
use crate::host::SceneHost;

/// What pointer travel is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Move along the dominant axis.
    Translate,
    /// Turn about the dominant axis.
    Rotate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Accumulator {
    Translate(TranslateAccumulator),
    Rotate(RotateAccumulator),
}

/// Running smart translate gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartTranslate {
    target: GestureTarget,
    accumulator: Accumulator,
}

impl SmartTranslate {
    /// Starts moving the current selection from the pointer at `pointer`.
    pub fn invoke(
        cx: &mut ToolContext<'_>,
        pointer: DVec2,
        motion: Motion,
        config: &ToolConfig,
    ) -> ToolResult<Invoked<Self>> {
        let Some(target) = GestureTarget::from_selection(&*cx.scene)? else {
            return Ok(Invoked::Done(Completion::Skipped(SkipReason::EmptySelection)));
        };
        let origin = cx.viewport.region_to_world(pointer);
        let accumulator = match motion {
            Motion::Translate => Accumulator::Translate(TranslateAccumulator::new(
                origin,
                config.translate_sensitivity,
            )),
            Motion::Rotate => {
                Accumulator::Rotate(RotateAccumulator::new(origin, config.rotate_sensitivity()))
            }
        };
        info!(?motion, "smart translate started");
        Ok(Invoked::Modal(Self {
            target,
            accumulator,
        }))
    }

    /// Translation currently applied, or per-axis angles when rotating.
    pub fn cumulative(&self) -> DVec3 {
        match &self.accumulator {
            Accumulator::Translate(acc) => acc.cumulative(),
            Accumulator::Rotate(acc) => acc.cumulative(),
        }
    }

    /// What the gesture moves.
    pub fn target(&self) -> &GestureTarget {
        &self.target
    }

    fn apply(&mut self, scene: &mut dyn SceneHost, world: DVec3) -> ToolResult<()> {
        match &mut self.accumulator {
            Accumulator::Translate(acc) => {
                let increment = acc.update(world);
                debug!(?increment, "translate");
                self.target.translate(scene, increment)
            }
            Accumulator::Rotate(acc) => {
                for (axis, angle) in acc.update(world) {
                    self.target.rotate(scene, axis, angle)?;
                }
                Ok(())
            }
        }
    }

    fn rollback(&mut self, scene: &mut dyn SceneHost) -> ToolResult<()> {
        let result = match &mut self.accumulator {
            Accumulator::Translate(acc) => self.target.translate(scene, acc.rollback()),
            Accumulator::Rotate(acc) => acc
                .rollback()
                .into_iter()
                .try_for_each(|(axis, angle)| self.target.rotate(scene, axis, angle)),
        };
        result.map_err(|e| ToolError::RollbackFailed {
            reason: e.to_string(),
        })
    }
}

impl Gesture for SmartTranslate {
    fn handle(
        mut self,
        event: &PointerEvent,
        cx: &mut ToolContext<'_>,
    ) -> ToolResult<GestureState<Self>> {
        match *event {
            PointerEvent::Move { position, .. } => {
                let world = cx.viewport.region_to_world(position);
                self.apply(cx.scene, world)?;
                Ok(GestureState::Active(self))
            }
            PointerEvent::Release(Button::Middle) => {
                info!(cumulative = ?self.cumulative(), "smart translate committed");
                Ok(GestureState::Committed)
            }
            ref cancel if cancel.is_cancel() => {
                self.rollback(cx.scene)?;
                info!("smart translate cancelled");
                Ok(GestureState::Cancelled)
            }
            _ => Ok(GestureState::Active(self)),
        }
    }
}

/// Applies a translation increment for `pointer` through `acc`.
pub(crate) fn follow_pointer(
    acc: &mut TranslateAccumulator,
    target: &GestureTarget,
    cx: &mut ToolContext<'_>,
    pointer: DVec2,
) -> ToolResult<()> {
    let world = cx.viewport.region_to_world(pointer);
    let increment = acc.update(world);
    target.translate(cx.scene, increment)
}

/// Undoes everything `acc` applied.
pub(crate) fn undo_translation(
    acc: &mut TranslateAccumulator,
    target: &GestureTarget,
    scene: &mut dyn SceneHost,
) -> ToolResult<()> {
    target
        .translate(scene, acc.rollback())
        .map_err(|e| ToolError::RollbackFailed {
            reason: e.to_string(),
        })
}
