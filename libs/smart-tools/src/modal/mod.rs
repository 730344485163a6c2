//! # Modal Gestures
//!
//! Interactive operations spanning many pointer events between a start
//! trigger and a commit or cancel.
//!
//! ## State Threading
//!
//! A gesture is a plain value. Each event consumes it and yields the next
//! [`GestureState`]:
//!
//! ```text
//! invoke ──► Active(g) ──step──► Active(g') ──step──► Committed
//!                                           └─step──► Cancelled
//! ```
//!
//! Once committed or cancelled there is no gesture left to step, and
//! [`GestureState::step`] answers [`ToolError::GestureNotActive`].
//!
//! ## Exact Cancellation
//!
//! Host transforms compose, so the accumulators apply increments and keep
//! the cumulative total. Cancelling applies the negated total recorded at
//! that moment, never a value re-derived from pointer positions.

mod accumulator;
mod extrude;
mod target;
mod translate;


pub use accumulator::{RotateAccumulator, TranslateAccumulator};
pub use extrude::SmartExtrude;
pub use target::GestureTarget;
pub use translate::{Motion, SmartTranslate};

use crate::error::{Completion, ToolError, ToolResult};
use crate::event::PointerEvent;
use crate::host::{SceneHost, Viewport};

/// Everything a gesture may touch while handling one event.
pub struct ToolContext<'a> {
    /// The editor.
    pub scene: &'a mut dyn SceneHost,
    /// View used to place pointer positions in the world.
    pub viewport: &'a dyn Viewport,
}

/// Lifecycle of a gesture after it was invoked.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState<G> {
    /// Still consuming events.
    Active(G),
    /// Confirmed; the applied transform stays.
    Committed,
    /// Abandoned; the applied transform was undone.
    Cancelled,
}

impl<G: Gesture> GestureState<G> {
    /// Feeds one event to an active gesture.
    ///
    /// An error ends the gesture where it stands: there is no state to
    /// resume.
    pub fn step(self, event: &PointerEvent, cx: &mut ToolContext<'_>) -> ToolResult<Self> {
        match self {
            GestureState::Active(gesture) => gesture.handle(event, cx),
            GestureState::Committed | GestureState::Cancelled => Err(ToolError::GestureNotActive),
        }
    }

    /// True while events are still accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, GestureState::Active(_))
    }
}

/// Result of invoking a modal command.
#[derive(Debug, Clone, PartialEq)]
pub enum Invoked<G> {
    /// The gesture started and wants events.
    Modal(G),
    /// The command finished immediately.
    Done(Completion),
}

/// A gesture consuming one event at a time.
pub trait Gesture: Sized {
    /// Handles `event`, returning the next state.
    fn handle(
        self,
        event: &PointerEvent,
        cx: &mut ToolContext<'_>,
    ) -> ToolResult<GestureState<Self>>;
}
