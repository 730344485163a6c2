//! Smart extrude: context-sensitive extrude followed by a smart translate of
//! the new geometry.
//!
//! Confirmed by releasing the left button. Cancelling moves the new geometry
//! back and then smart-deletes it, which leaves the mesh (or scene) with the
//! element counts it had before the gesture.

use config::constants::ToolConfig;
use glam::{DVec2, DVec3};
use tracing::info;

use super::accumulator::TranslateAccumulator;
use super::target::GestureTarget;
use super::translate::{follow_pointer, undo_translation};
use super::{Gesture, GestureState, Invoked, ToolContext};
use crate::dispatch::{smart_delete, smart_extrude, Extruded};
use crate::error::{Completion, ToolResult};
use crate::event::{Button, PointerEvent};

/// Running smart extrude gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartExtrude {
    target: GestureTarget,
    accumulator: TranslateAccumulator,
}

impl SmartExtrude {
    /// Extrudes the current selection and starts moving the result from the
    /// pointer at `pointer`.
    pub fn invoke(
        cx: &mut ToolContext<'_>,
        pointer: DVec2,
        config: &ToolConfig,
    ) -> ToolResult<Invoked<Self>> {
        let origin = cx.viewport.region_to_world(pointer);
        let target = match smart_extrude(cx.scene)? {
            Extruded::Geometry(target) => target,
            Extruded::Skipped(reason) => return Ok(Invoked::Done(Completion::Skipped(reason))),
        };
        info!("smart extrude started");
        Ok(Invoked::Modal(Self {
            target,
            accumulator: TranslateAccumulator::new(origin, config.translate_sensitivity),
        }))
    }

    /// Translation currently applied to the new geometry.
    pub fn cumulative(&self) -> DVec3 {
        self.accumulator.cumulative()
    }

    /// What the gesture moves.
    pub fn target(&self) -> &GestureTarget {
        &self.target
    }
}

impl Gesture for SmartExtrude {
    fn handle(
        mut self,
        event: &PointerEvent,
        cx: &mut ToolContext<'_>,
    ) -> ToolResult<GestureState<Self>> {
        match *event {
            PointerEvent::Move { position, .. } => {
                follow_pointer(&mut self.accumulator, &self.target, cx, position)?;
                Ok(GestureState::Active(self))
            }
            PointerEvent::Release(Button::Left) => {
                info!(cumulative = ?self.cumulative(), "smart extrude committed");
                Ok(GestureState::Committed)
            }
            ref cancel if cancel.is_cancel() => {
                undo_translation(&mut self.accumulator, &self.target, cx.scene)?;
                let removed = smart_delete(cx.scene)?;
                info!(?removed, "smart extrude cancelled");
                Ok(GestureState::Cancelled)
            }
            _ => Ok(GestureState::Active(self)),
        }
    }
}
