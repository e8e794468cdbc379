// SPDX-License-Identifier: MPL-2.0
//! Gallery precondition errors.

use std::fmt;

/// Errors raised when a gallery operation's precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The requested image index does not exist in the current list.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of images in the gallery.
        len: usize,
    },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::IndexOutOfRange { index, len } => {
                write!(f, "Image index {index} out of range for {len} images")
            }
        }
    }
}

impl std::error::Error for GalleryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_index_and_len() {
        let err = GalleryError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Image index 7 out of range for 3 images");
    }
}
