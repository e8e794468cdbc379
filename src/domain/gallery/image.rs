// SPDX-License-Identifier: MPL-2.0
//! Image descriptors shown by the gallery.

/// A single gallery entry.
///
/// Identity is positional: two equal descriptors at different indices are
/// still two distinct entries of the gallery.
///
/// # Example
///
/// ```
/// use gallery_lens::domain::gallery::Image;
///
/// let image = Image::new("assets/photos/sunset.jpg").with_description("Sunset");
///
/// assert_eq!(image.file_name(), "sunset.jpg");
/// assert_eq!(image.description(), Some("Sunset"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Path or URL of the full-size image.
    pub img: String,
    /// Path or URL of the thumbnail used by the gallery strip.
    pub thumb: Option<String>,
    /// Free-form caption appended to the position text.
    pub description: Option<String>,
    /// External link opened by the rendering layer.
    pub ext_url: Option<String>,
}

impl Image {
    /// Creates an image with only its full-size path set.
    #[must_use]
    pub fn new(img: impl Into<String>) -> Self {
        Self {
            img: img.into(),
            thumb: None,
            description: None,
            ext_url: None,
        }
    }

    #[must_use]
    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_ext_url(mut self, ext_url: impl Into<String>) -> Self {
        self.ext_url = Some(ext_url.into());
        self
    }

    /// Returns the caption, treating an empty string as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }

    /// Returns the thumbnail path, falling back to the full-size path.
    #[must_use]
    pub fn thumb_or_img(&self) -> &str {
        self.thumb.as_deref().unwrap_or(&self.img)
    }

    /// Returns the part of the path after the last `/` or `\`.
    ///
    /// A path without separators is returned whole.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self.img.rfind(['/', '\\']) {
            Some(pos) => &self.img[pos + 1..],
            None => &self.img,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_last_forward_slash() {
        let image = Image::new("https://example.com/gallery/img1.jpg");
        assert_eq!(image.file_name(), "img1.jpg");
    }

    #[test]
    fn file_name_uses_last_backslash() {
        let image = Image::new(r"C:\Users\me\Pictures\holiday.png");
        assert_eq!(image.file_name(), "holiday.png");
    }

    #[test]
    fn file_name_handles_mixed_separators() {
        let image = Image::new(r"assets/raw\nested/final.webp");
        assert_eq!(image.file_name(), "final.webp");
    }

    #[test]
    fn file_name_without_separator_is_whole_path() {
        let image = Image::new("plain.gif");
        assert_eq!(image.file_name(), "plain.gif");
    }

    #[test]
    fn file_name_of_trailing_separator_is_empty() {
        let image = Image::new("assets/dir/");
        assert_eq!(image.file_name(), "");
    }

    #[test]
    fn empty_description_counts_as_absent() {
        let image = Image::new("a.jpg").with_description("");
        assert_eq!(image.description(), None);
    }

    #[test]
    fn thumb_falls_back_to_full_image() {
        let plain = Image::new("a.jpg");
        assert_eq!(plain.thumb_or_img(), "a.jpg");

        let with_thumb = Image::new("a.jpg").with_thumb("a_thumb.jpg");
        assert_eq!(with_thumb.thumb_or_img(), "a_thumb.jpg");
    }
}
