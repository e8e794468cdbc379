// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the settings file. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Feature switches
//! - **Keyboard**: Viewer key codes
//! - **Buttons**: Toolbar visibility

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Downloads are disabled unless explicitly enabled.
pub const DEFAULT_DOWNLOADABLE: bool = false;

/// Clicking the backdrop does not close the viewer by default.
pub const DEFAULT_CLOSE_ON_OUTSIDE_CLICK: bool = false;

/// Pointer value meaning "no initial image, show the strip".
pub const NO_IMAGE_POINTER: i64 = -1;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Key code closing the viewer (Escape).
pub const DEFAULT_ESC_KEY_CODE: u32 = 27;

/// Key code showing the previous image (left arrow).
pub const DEFAULT_LEFT_KEY_CODE: u32 = 37;

/// Key code showing the next image (right arrow).
pub const DEFAULT_RIGHT_KEY_CODE: u32 = 39;

// ==========================================================================
// Button Defaults
// ==========================================================================

pub const DEFAULT_SHOW_DOWNLOAD_BUTTON: bool = false;

pub const DEFAULT_SHOW_EXT_URL_BUTTON: bool = false;

pub const DEFAULT_SHOW_CLOSE_BUTTON: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(NO_IMAGE_POINTER < 0);

    // Every viewer command needs its own key
    assert!(DEFAULT_ESC_KEY_CODE != DEFAULT_LEFT_KEY_CODE);
    assert!(DEFAULT_ESC_KEY_CODE != DEFAULT_RIGHT_KEY_CODE);
    assert!(DEFAULT_LEFT_KEY_CODE != DEFAULT_RIGHT_KEY_CODE);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{key_codes, ButtonsConfig};

    #[test]
    fn key_defaults_match_domain() {
        assert_eq!(key_codes::ESC.value(), DEFAULT_ESC_KEY_CODE);
        assert_eq!(key_codes::LEFT.value(), DEFAULT_LEFT_KEY_CODE);
        assert_eq!(key_codes::RIGHT.value(), DEFAULT_RIGHT_KEY_CODE);
    }

    #[test]
    fn button_defaults_match_domain() {
        let buttons = ButtonsConfig::default();
        assert_eq!(buttons.download, DEFAULT_SHOW_DOWNLOAD_BUTTON);
        assert_eq!(buttons.ext_url, DEFAULT_SHOW_EXT_URL_BUTTON);
        assert_eq!(buttons.close, DEFAULT_SHOW_CLOSE_BUTTON);
    }
}
