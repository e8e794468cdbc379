// SPDX-License-Identifier: MPL-2.0
//! Download adapter for local files.

use crate::application::port::DownloadPlatform;
use std::fs;
use std::path::{Path, PathBuf};

/// Saves images by copying them into a target directory.
///
/// Only local paths can be saved. Remote URLs and copy failures are logged
/// and otherwise ignored, like a browser that refuses a download.
#[derive(Debug, Clone)]
pub struct FsDownloader {
    target_dir: PathBuf,
}

impl FsDownloader {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    #[must_use]
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

impl DownloadPlatform for FsDownloader {
    fn save(&mut self, path: &str, filename: &str) {
        if filename.is_empty() {
            log::warn!("cannot save {path}: no file name");
            return;
        }
        if path.contains("://") {
            log::warn!("cannot save {path}: remote resources are not supported");
            return;
        }

        let destination = self.target_dir.join(filename);
        let result = fs::create_dir_all(&self.target_dir)
            .and_then(|()| fs::copy(path, &destination));
        match result {
            Ok(bytes) => log::info!("saved {path} to {} ({bytes} bytes)", destination.display()),
            Err(err) => log::warn!("failed to save {path}: {err}"),
        }
    }
}
