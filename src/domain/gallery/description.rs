// SPDX-License-Identifier: MPL-2.0
//! Caption text built from the current position and image description.

/// English label placed before the position.
pub const DEFAULT_IMAGE_TEXT: &str = "Image ";
/// English separator between the position and the total count.
pub const DEFAULT_NUMBER_SEPARATOR: &str = "/";
/// English separator between the position text and the image description.
pub const DEFAULT_BEFORE_TEXT_DESCRIPTION: &str = " - ";

/// Fully resolved caption format.
///
/// Built once per gallery instance by filling a [`DescriptionOverrides`]
/// with defaults, see [`DescriptionOverrides::fill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionFormat {
    pub image_text: String,
    pub number_separator: String,
    pub before_text_description: String,
    /// When set, replaces the computed caption entirely.
    pub custom_full_description: Option<String>,
}

impl Default for DescriptionFormat {
    fn default() -> Self {
        Self {
            image_text: DEFAULT_IMAGE_TEXT.to_string(),
            number_separator: DEFAULT_NUMBER_SEPARATOR.to_string(),
            before_text_description: DEFAULT_BEFORE_TEXT_DESCRIPTION.to_string(),
            custom_full_description: None,
        }
    }
}

impl DescriptionFormat {
    /// Builds the caption for the image at `index` (0-based) out of `total`.
    ///
    /// ```
    /// use gallery_lens::domain::gallery::DescriptionFormat;
    ///
    /// let format = DescriptionFormat::default();
    /// assert_eq!(format.compose(0, 5, None), "Image 1/5");
    /// assert_eq!(format.compose(1, 5, Some("Desc 2")), "Image 2/5 - Desc 2");
    /// ```
    #[must_use]
    pub fn compose(&self, index: usize, total: usize, description: Option<&str>) -> String {
        if let Some(custom) = &self.custom_full_description {
            return custom.clone();
        }

        let mut caption = format!(
            "{}{}{}{}",
            self.image_text,
            index + 1,
            self.number_separator,
            total
        );
        if let Some(text) = description.filter(|text| !text.is_empty()) {
            caption.push_str(&self.before_text_description);
            caption.push_str(text);
        }
        caption
    }
}

/// Caption settings as supplied by the host, every field optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptionOverrides {
    pub image_text: Option<String>,
    pub number_separator: Option<String>,
    pub before_text_description: Option<String>,
    pub custom_full_description: Option<String>,
}

impl DescriptionOverrides {
    /// Fills every unset field from `defaults`.
    ///
    /// The custom full description is never taken from `defaults`.
    #[must_use]
    pub fn fill(self, defaults: DescriptionFormat) -> DescriptionFormat {
        DescriptionFormat {
            image_text: self.image_text.unwrap_or(defaults.image_text),
            number_separator: self.number_separator.unwrap_or(defaults.number_separator),
            before_text_description: self
                .before_text_description
                .unwrap_or(defaults.before_text_description),
            custom_full_description: self.custom_full_description,
        }
    }
}
