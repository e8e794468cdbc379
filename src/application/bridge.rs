// SPDX-License-Identifier: MPL-2.0
//! Keeps the keyboard service in step with the viewer's open state.
//!
//! While the viewer is open exactly one download shortcut is registered.
//! Closing or tearing down always resets the service, registered or not.

use crate::application::port::{KeyboardService, Shortcut};

#[derive(Debug)]
pub struct ShortcutBridge<K: KeyboardService> {
    service: K,
    active: bool,
}

impl<K: KeyboardService> ShortcutBridge<K> {
    pub fn new(service: K) -> Self {
        Self {
            service,
            active: false,
        }
    }

    /// Installs the download shortcut, replacing a previous one.
    pub fn install(&mut self) {
        if self.active {
            self.service.reset_all();
        }
        self.service.register(Shortcut::download());
        self.active = true;
        log::debug!("download shortcut registered");
    }

    /// Clears every registration of the service.
    pub fn clear(&mut self) {
        self.service.reset_all();
        if self.active {
            log::debug!("download shortcut cleared");
        }
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn service(&self) -> &K {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut K {
        &mut self.service
    }
}
