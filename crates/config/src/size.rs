//! Book size constraints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    Fixed,
    /// Stretch elastically between the min/max bounds.
    #[default]
    Stretch,
}

/// The pixel box the flip widget is given: either fixed, or stretched
/// between the min/max bounds when `size` is `stretch`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookSize {
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeMode>,
}

impl BookSize {
    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            size: Some(SizeMode::Fixed),
        }
    }

    /// The effective mode; omitted means stretch.
    pub fn mode(&self) -> SizeMode {
        self.size.clone().unwrap_or_default()
    }
}
