//! Per-page configuration.

use crate::content::ContentElement;
use crate::media::{ImageConfig, VideoConfig};
use foliant_style::{LayoutStyle, PageStyle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Cover,
    Chapter,
    Content,
    Custom,
}

/// Page stiffness. Hard pages flip as a rigid sheet and receive the
/// portrait slide correction during transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Soft,
    Hard,
}

/// Page content: either a plain text block or a structured sequence.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PageContent {
    Plain(String),
    Elements(Vec<ContentElement>),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(rename = "type")]
    pub kind: PageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PageStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutStyle>,
}

impl PageConfig {
    /// A bare page of the given type, for building configs in code.
    pub fn new(kind: PageType) -> Self {
        Self {
            kind,
            density: None,
            number: None,
            title: None,
            content: None,
            style: None,
            image: None,
            video: None,
            layout: None,
        }
    }

    /// Effective density: the explicit value if present, else hard for
    /// covers and chapters, soft otherwise.
    pub fn density(&self) -> Density {
        self.density.unwrap_or(match self.kind {
            PageType::Cover | PageType::Chapter => Density::Hard,
            PageType::Content | PageType::Custom => Density::Soft,
        })
    }

    /// Effective page number: the explicit value if present, else derived
    /// from the page's position in the book.
    pub fn page_number(&self, index: usize) -> u32 {
        self.number.unwrap_or(index as u32 + 1)
    }
}
