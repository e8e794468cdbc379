// SPDX-License-Identifier: MPL-2.0
//! Application layer - the gallery state machine and its ports.
//!
//! # Modules
//!
//! - [`gallery`]: The [`Gallery`] controller
//! - [`navigation`]: Pure circular index arithmetic
//! - [`events`]: Multicast event outputs
//! - [`source`]: Literal and streamed image inputs
//! - [`bridge`]: Keyboard-service registration lifecycle
//! - [`port`]: Traits implemented by the host

pub mod bridge;
pub mod events;
pub mod gallery;
pub mod navigation;
pub mod port;
pub mod source;

pub use events::{EventEmitter, GalleryEvents, GalleryOutput, ListenerId};
pub use gallery::{Gallery, GalleryOptions, InputChange};
pub use navigation::NavigationInfo;
pub use source::{ImageSender, ImageSource, ImageStream};
