// SPDX-License-Identifier: MPL-2.0
//! Keyboard codes and per-instance key remapping.

/// Platform key code as delivered by the host's key-down events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for KeyCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// Default key codes used when no remap is configured.
pub mod key_codes {
    use super::KeyCode;

    /// Escape closes the viewer.
    pub const ESC: KeyCode = KeyCode(27);
    /// Left arrow shows the previous image.
    pub const LEFT: KeyCode = KeyCode(37);
    /// Right arrow shows the next image.
    pub const RIGHT: KeyCode = KeyCode(39);
}

/// Viewer command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Previous,
    Next,
}

/// Overrides for the viewer keys. Each unset key keeps its default
/// independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardRemap {
    pub esc: Option<KeyCode>,
    pub left: Option<KeyCode>,
    pub right: Option<KeyCode>,
}

impl KeyboardRemap {
    #[must_use]
    pub fn esc(&self) -> KeyCode {
        self.esc.unwrap_or(key_codes::ESC)
    }

    #[must_use]
    pub fn left(&self) -> KeyCode {
        self.left.unwrap_or(key_codes::LEFT)
    }

    #[must_use]
    pub fn right(&self) -> KeyCode {
        self.right.unwrap_or(key_codes::RIGHT)
    }

    /// Maps a key code to a viewer command.
    ///
    /// When one code is bound to several commands, close wins over
    /// previous, and previous over next.
    #[must_use]
    pub fn resolve(&self, code: KeyCode) -> Option<KeyCommand> {
        if code == self.esc() {
            Some(KeyCommand::Close)
        } else if code == self.left() {
            Some(KeyCommand::Previous)
        } else if code == self.right() {
            Some(KeyCommand::Next)
        } else {
            None
        }
    }
}
