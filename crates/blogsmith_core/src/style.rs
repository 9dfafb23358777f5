//! Audience styles a blog can be written for.

use blogsmith_error::{FormError, FormErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Job profile the blog is written for.
///
/// The display label is what lands in the prompt and in the style selector.
/// Parsing accepts either the label or the variant name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum BlogStyle {
    /// Academic and research audience
    #[default]
    #[strum(to_string = "Researchers")]
    Researchers,
    /// Practitioners working with data
    #[strum(to_string = "Data Scientist", serialize = "DataScientist")]
    DataScientist,
    /// General readership
    #[strum(to_string = "Common People", serialize = "CommonPeople")]
    CommonPeople,
}

impl BlogStyle {
    /// All styles in selector order.
    pub fn all() -> impl Iterator<Item = BlogStyle> {
        <BlogStyle as strum::IntoEnumIterator>::iter()
    }

    /// Parse a submitted selector value.
    ///
    /// Surrounding whitespace is ignored; anything outside the fixed option
    /// set is rejected.
    pub fn from_label(label: &str) -> Result<Self, FormError> {
        BlogStyle::from_str(label.trim())
            .map_err(|_| FormError::new(FormErrorKind::UnknownStyle(label.to_string())))
    }
}
