//! The top-level book configuration.

use crate::error::ConfigError;
use crate::page::PageConfig;
use crate::presets;
use crate::settings::{ControlsConfig, EngineSettings};
use crate::size::BookSize;
use foliant_style::{Background, ColorValue, Typography};
use serde::{Deserialize, Serialize};

/// Book-wide color defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

/// Book-wide style defaults, applied beneath every page's own style.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<GlobalColors>,
}

/// The whole declarative book. Only `size` and `pages` are required;
/// the order of `pages` IS the book's page order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub size: BookSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_style: Option<GlobalStyle>,
    pub pages: Vec<PageConfig>,
    #[serde(default)]
    pub settings: EngineSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<ControlsConfig>,
}

impl BookConfig {
    /// Parses a configuration from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A configuration with the stock desktop size and default settings.
    pub fn with_defaults(pages: Vec<PageConfig>) -> Self {
        Self {
            title: None,
            size: presets::desktop(),
            global_style: None,
            pages,
            settings: EngineSettings::default(),
            controls: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The book-wide typography: the configured global record, else the
    /// stock defaults.
    pub fn global_typography(&self) -> Typography {
        self.global_style
            .as_ref()
            .and_then(|g| g.typography.clone())
            .unwrap_or_else(presets::default_typography)
    }
}
