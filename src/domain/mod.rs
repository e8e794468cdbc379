// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`GalleryError`](error::GalleryError))
//! - [`gallery`]: Gallery types ([`Image`](gallery::Image),
//!   [`NavigationEvent`](gallery::NavigationEvent),
//!   [`KeyboardRemap`](gallery::KeyboardRemap),
//!   [`DescriptionFormat`](gallery::DescriptionFormat))

pub mod error;
pub mod gallery;
