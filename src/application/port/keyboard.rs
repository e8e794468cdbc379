// SPDX-License-Identifier: MPL-2.0
//! Keyboard-shortcut service port.
//!
//! The host owns the actual key listener. The gallery only describes which
//! combination it wants and what should happen; when the combination fires,
//! the host hands the [`ShortcutAction`] back to
//! [`Gallery::on_shortcut`](crate::application::Gallery::on_shortcut).

/// Combinations bound to the platform "save" shortcut.
pub const SAVE_SHORTCUT_COMBOS: [&str; 2] = ["ctrl+s", "meta+s"];

/// Work requested by a registered shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Save the image currently shown in the viewer.
    DownloadCurrent,
}

/// How the host should treat the key event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutResponse {
    /// Suppress the platform's default handling (e.g. the browser save dialog).
    PreventDefault,
    /// Let the event continue to the platform.
    Propagate,
}

/// A single shortcut registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Key combinations, any of which triggers the action.
    pub combos: Vec<String>,
    pub action: ShortcutAction,
}

impl Shortcut {
    /// The download-on-save registration installed while the viewer is open.
    #[must_use]
    pub fn download() -> Self {
        Self {
            combos: SAVE_SHORTCUT_COMBOS.iter().map(ToString::to_string).collect(),
            action: ShortcutAction::DownloadCurrent,
        }
    }

    /// Returns true if `combo` is one of this shortcut's combinations.
    #[must_use]
    pub fn matches(&self, combo: &str) -> bool {
        self.combos.iter().any(|c| c.eq_ignore_ascii_case(combo))
    }
}

/// External keyboard-shortcut registry.
///
/// Implementations must tolerate `reset_all` being called when nothing is
/// registered.
pub trait KeyboardService {
    /// Adds a registration.
    fn register(&mut self, shortcut: Shortcut);

    /// Removes every registration.
    fn reset_all(&mut self);
}

impl<T: KeyboardService + ?Sized> KeyboardService for &mut T {
    fn register(&mut self, shortcut: Shortcut) {
        (**self).register(shortcut);
    }

    fn reset_all(&mut self) {
        (**self).reset_all();
    }
}

impl<T: KeyboardService + ?Sized> KeyboardService for Box<T> {
    fn register(&mut self, shortcut: Shortcut) {
        (**self).register(shortcut);
    }

    fn reset_all(&mut self) {
        (**self).reset_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_shortcut_binds_both_save_combos() {
        let shortcut = Shortcut::download();
        assert!(shortcut.matches("ctrl+s"));
        assert!(shortcut.matches("META+S"));
        assert!(!shortcut.matches("ctrl+p"));
        assert_eq!(shortcut.action, ShortcutAction::DownloadCurrent);
    }
}
