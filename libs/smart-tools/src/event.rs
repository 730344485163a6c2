//! Pointer and keyboard events fed to modal gestures.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt key.
    pub alt: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Only control held.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

/// Keys the gestures react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Cancels the running gesture.
    Escape,
    /// Any other key; ignored.
    Other,
}

/// One input sample in region (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer moved.
    Move {
        /// Region coordinates of the pointer.
        position: DVec2,
        /// Modifier keys held.
        modifiers: Modifiers,
    },
    /// Button pressed.
    Press(Button),
    /// Button released.
    Release(Button),
    /// Key pressed.
    Key(Key),
}

impl PointerEvent {
    /// Move event with no modifiers held.
    pub fn moved(x: f64, y: f64) -> Self {
        PointerEvent::Move {
            position: DVec2::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Whether this event cancels a gesture (right press or Escape).
    pub fn is_cancel(&self) -> bool {
        matches!(
            self,
            PointerEvent::Press(Button::Right) | PointerEvent::Key(Key::Escape)
        )
    }
}
