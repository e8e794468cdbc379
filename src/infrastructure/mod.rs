// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory`]: In-process shortcut registry and recording download sink
//!   (implement [`KeyboardService`] and [`DownloadPlatform`])
//! - [`fs_download`]: Saves images by copying local files into a directory
//!   (implements [`DownloadPlatform`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Platform failures are logged, never returned to the gallery
//!
//! [`KeyboardService`]: crate::application::port::KeyboardService
//! [`DownloadPlatform`]: crate::application::port::DownloadPlatform

pub mod fs_download;
pub mod memory;

// Re-export main types for convenience
pub use fs_download::FsDownloader;
pub use memory::{InMemoryShortcuts, RecordingDownloads, SaveRequest};
