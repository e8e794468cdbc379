// SPDX-License-Identifier: MPL-2.0
//! Visibility of the viewer's toolbar buttons.
//!
//! The gallery core does not read these flags; it stores them so the
//! rendering layer gets them from the same place as the rest of the state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonsConfig {
    pub download: bool,
    pub ext_url: bool,
    pub close: bool,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            download: false,
            ext_url: false,
            close: true,
        }
    }
}
