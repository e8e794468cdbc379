// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Pure data used by the gallery controller: image descriptors, navigation
//! events, keyboard remapping, caption formatting and button flags.

pub mod buttons;
pub mod description;
pub mod event;
pub mod image;
pub mod keyboard;

pub use buttons::ButtonsConfig;
pub use description::{DescriptionFormat, DescriptionOverrides};
pub use event::{Action, EventPayload, NavigationEvent, SwipeDirection};
pub use image::Image;
pub use keyboard::{key_codes, KeyCode, KeyCommand, KeyboardRemap};
