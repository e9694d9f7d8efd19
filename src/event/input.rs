//! Mouse input types.
//!
//! Input sources translate whatever their backend delivers into
//! [`MouseEvent`]s with screen-space positions; the tree works out the
//! target and the local coordinates during dispatch.

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// MouseButton / MouseAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What happened to the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

impl MouseAction {
    /// The button involved, if any.
    pub fn button(self) -> Option<MouseButton> {
        match self {
            Self::Down(b) | Self::Up(b) | Self::Drag(b) => Some(b),
            Self::Moved | Self::ScrollUp | Self::ScrollDown => None,
        }
    }
}

// ---------------------------------------------------------------------------
// MouseEvent
// ---------------------------------------------------------------------------

/// A mouse event travelling from its target up through the ancestors.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseAction,
    /// Screen-space position.
    pub position: Point,
    /// Position relative to the component whose handlers are running.
    pub local: Point,
    propagation_stopped: bool,
}

impl MouseEvent {
    pub fn new(kind: MouseAction, position: Point) -> Self {
        Self {
            kind,
            position,
            local: position,
            propagation_stopped: false,
        }
    }

    /// Keep the event from reaching further ancestors. Handlers already
    /// registered on the current component still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
