//! The content-element union for structured page content.

use crate::media::{ImageConfig, VideoConfig};
use foliant_style::PageStyle;
use serde::{Deserialize, Serialize};

/// One entry in a page's content sequence. Sequence order is preserved.
///
/// Unrecognized type tags deserialize to `Unknown` and render as nothing;
/// a configuration is never rejected for carrying an element this version
/// does not understand.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentElement {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<PageStyle>,
    },
    Heading {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        /// 1-6; defaults to 2 at render time.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<PageStyle>,
    },
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<ImageConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<PageStyle>,
    },
    Video {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video: Option<VideoConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<PageStyle>,
    },
    Divider {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<PageStyle>,
    },
    Spacer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<PageStyle>,
    },
    #[serde(other)]
    Unknown,
}

impl ContentElement {
    /// The element's style override, when it carries one.
    pub fn style(&self) -> Option<&PageStyle> {
        match self {
            ContentElement::Text { style, .. }
            | ContentElement::Heading { style, .. }
            | ContentElement::Image { style, .. }
            | ContentElement::Video { style, .. }
            | ContentElement::Divider { style, .. }
            | ContentElement::Spacer { style, .. } => style.as_ref(),
            ContentElement::Unknown => None,
        }
    }
}
