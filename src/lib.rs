// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is the navigation and event-coordination core of an image
//! gallery with a full-screen lightbox viewer.
//!
//! It tracks the current image, navigates circularly, emits lifecycle events,
//! keeps a keyboard-shortcut service in step with the viewer, and reconciles
//! literal and streamed image lists into one state. Rendering is left to the
//! host, which reads everything it needs from [`application::Gallery`].

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
