// SPDX-License-Identifier: MPL-2.0
//! In-process adapters.
//!
//! [`InMemoryShortcuts`] is a complete shortcut registry for hosts that
//! dispatch key combinations themselves (terminal front-ends, tests).
//! [`RecordingDownloads`] keeps every save request instead of performing it.

use crate::application::port::{DownloadPlatform, KeyboardService, Shortcut, ShortcutAction};

/// Shortcut registry kept in memory.
#[derive(Debug, Default)]
pub struct InMemoryShortcuts {
    registrations: Vec<Shortcut>,
    reset_count: usize,
}

impl InMemoryShortcuts {
    #[must_use]
    pub fn registrations(&self) -> &[Shortcut] {
        &self.registrations
    }

    /// Number of `reset_all` calls received so far.
    #[must_use]
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }

    /// Looks up the action bound to `combo`, latest registration first.
    #[must_use]
    pub fn fire(&self, combo: &str) -> Option<ShortcutAction> {
        self.registrations
            .iter()
            .rev()
            .find(|shortcut| shortcut.matches(combo))
            .map(|shortcut| shortcut.action)
    }
}

impl KeyboardService for InMemoryShortcuts {
    fn register(&mut self, shortcut: Shortcut) {
        self.registrations.push(shortcut);
    }

    fn reset_all(&mut self) {
        self.registrations.clear();
        self.reset_count += 1;
    }
}

/// A save request captured by [`RecordingDownloads`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub path: String,
    pub filename: String,
}

/// Download sink that records requests.
#[derive(Debug, Default)]
pub struct RecordingDownloads {
    saved: Vec<SaveRequest>,
}

impl RecordingDownloads {
    #[must_use]
    pub fn saved(&self) -> &[SaveRequest] {
        &self.saved
    }
}

impl DownloadPlatform for RecordingDownloads {
    fn save(&mut self, path: &str, filename: &str) {
        self.saved.push(SaveRequest {
            path: path.to_string(),
            filename: filename.to_string(),
        });
    }
}
