// SPDX-License-Identifier: MPL-2.0
//! Download platform port.
//!
//! Saving a file is a host capability (browser anchor, native dialog, copy
//! to disk). Failures are the platform's business: the gallery neither
//! detects nor reports them.

/// Host capability that saves the resource at `path` under `filename`.
pub trait DownloadPlatform {
    fn save(&mut self, path: &str, filename: &str);
}

impl<T: DownloadPlatform + ?Sized> DownloadPlatform for &mut T {
    fn save(&mut self, path: &str, filename: &str) {
        (**self).save(path, filename);
    }
}

impl<T: DownloadPlatform + ?Sized> DownloadPlatform for Box<T> {
    fn save(&mut self, path: &str, filename: &str) {
        (**self).save(path, filename);
    }
}
