//! Decoded input events consumed by the controller.
//!
//! These types are independent of any windowing toolkit. The desktop shell
//! translates egui events into them (see [`crate::app`]).

use super::viewport::{ScreenPos, WheelDirection};

/// Mouse buttons the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button
    Primary,
    /// Usually the right button; drives panning
    Secondary,
    /// Usually the wheel button; ignored
    Middle,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control (or Command on macOS); acts as the connect modifier
    pub connect: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Modifiers = Modifiers { connect: false };

    /// Only the connect modifier held.
    pub const CONNECT: Modifiers = Modifiers { connect: true };
}

/// Keys with an editor binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Deletes the selected element
    Delete,
    /// Fits the view to the graph (space bar)
    FitView,
    /// Anything else
    Other,
}

/// Mouse buttons held while the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldButtons {
    /// Primary button held
    pub primary: bool,
    /// Secondary button held
    pub secondary: bool,
}

/// A single decoded input event in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A mouse button went down
    PointerPressed {
        /// Pointer position
        pos: ScreenPos,
        /// Which button
        button: PointerButton,
        /// Modifiers held at press time
        modifiers: Modifiers,
    },
    /// A mouse button went up
    PointerReleased {
        /// Pointer position
        pos: ScreenPos,
        /// Which button
        button: PointerButton,
    },
    /// The pointer moved with at least one button held
    PointerDragged {
        /// Pointer position
        pos: ScreenPos,
        /// Buttons held during the move
        held: HeldButtons,
    },
    /// One wheel notch
    Wheel {
        /// Pointer position, used as the zoom anchor
        pos: ScreenPos,
        /// Rotation direction
        direction: WheelDirection,
    },
    /// A key went down
    KeyPressed {
        /// The key
        key: Key,
    },
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// View or model state changed and the canvas should be repainted
    pub redraw: bool,
}

impl EventOutcome {
    /// Nothing changed.
    pub const IGNORED: EventOutcome = EventOutcome { redraw: false };
    /// Something changed; repaint.
    pub const REDRAW: EventOutcome = EventOutcome { redraw: true };
}
