// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The gallery talks to its host only through these traits. Adapters live in
//! [`crate::infrastructure`] or in the embedding application.
//!
//! # Available Ports
//!
//! - [`keyboard`]: Shortcut registration ([`KeyboardService`])
//! - [`download`]: Saving the current image ([`DownloadPlatform`])
//!
//! # Design Notes
//!
//! - Traits use domain types and plain strings only
//! - Blanket impls for `&mut T` and `Box<T>` let hosts keep ownership of
//!   their services or erase their type
//! - Shortcuts carry an action value instead of a callback, so the gallery
//!   never has to be shared with the service

pub mod download;
pub mod keyboard;

pub use download::DownloadPlatform;
pub use keyboard::{
    KeyboardService, Shortcut, ShortcutAction, ShortcutResponse, SAVE_SHORTCUT_COMBOS,
};
