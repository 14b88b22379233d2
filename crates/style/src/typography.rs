//! Typography directives.
//!
//! No defaulting happens at this layer: a missing field means "inherit",
//! and the book-wide typography fallback is applied by the caller.

use foliant_types::Scalar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
}

impl Typography {
    /// Overlays the present fields of `over` onto `self`.
    pub fn apply(&mut self, over: &Typography) {
        if over.font_size.is_some() {
            self.font_size = over.font_size.clone();
        }
        if over.font_family.is_some() {
            self.font_family = over.font_family.clone();
        }
        if over.font_weight.is_some() {
            self.font_weight = over.font_weight.clone();
        }
        if over.line_height.is_some() {
            self.line_height = over.line_height.clone();
        }
        if over.letter_spacing.is_some() {
            self.letter_spacing = over.letter_spacing.clone();
        }
        if over.text_align.is_some() {
            self.text_align = over.text_align.clone();
        }
        if over.text_transform.is_some() {
            self.text_transform = over.text_transform.clone();
        }
    }
}
