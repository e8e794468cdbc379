// SPDX-License-Identifier: MPL-2.0
//! Navigation events raised by the gallery.
//!
//! Events are plain data. The gallery produces them and never inspects
//! events it did not create itself.

/// What triggered a navigation or lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// Programmatic change with no user gesture behind it.
    #[default]
    Normal,
    /// Pointer click on an arrow, thumbnail or backdrop.
    Click,
    /// Key press handled by the viewer.
    Keyboard,
    /// Touch swipe on the viewer.
    Swipe,
    /// Data or image load.
    Load,
}

/// Value carried by a [`NavigationEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPayload {
    Flag(bool),
    /// 1-based position of the image being shown.
    Position(usize),
}

/// Event emitted on the gallery outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub kind: Action,
    pub payload: EventPayload,
}

impl NavigationEvent {
    #[must_use]
    pub fn new(kind: Action, payload: EventPayload) -> Self {
        Self { kind, payload }
    }

    /// Creates an event carrying a boolean flag.
    #[must_use]
    pub fn flag(kind: Action, value: bool) -> Self {
        Self::new(kind, EventPayload::Flag(value))
    }

    /// Creates an event carrying the 1-based position of `index`.
    #[must_use]
    pub fn position_of(kind: Action, index: usize) -> Self {
        Self::new(kind, EventPayload::Position(index + 1))
    }

    /// Returns the 1-based position, if this event carries one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.payload {
            EventPayload::Position(position) => Some(position),
            EventPayload::Flag(_) => None,
        }
    }

    /// Returns the flag value, if this event carries one.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self.payload {
            EventPayload::Flag(value) => Some(value),
            EventPayload::Position(_) => None,
        }
    }
}

/// Direction of a touch swipe on the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moves right to left: shows the next image.
    Left,
    /// Finger moves left to right: shows the previous image.
    Right,
}
