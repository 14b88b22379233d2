//! Flip-widget settings and control-bar configuration.
//!
//! Missing fields take the stock defaults at parse time, so a settings
//! block only needs to name what it changes.

use foliant_style::PageStyle;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_flipping_time() -> u32 {
    1000
}

fn default_max_shadow_opacity() -> f32 {
    0.5
}

fn default_swipe_distance() -> f32 {
    30.0
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    #[serde(default = "default_true")]
    pub show_cover: bool,
    #[serde(default = "default_true")]
    pub mobile_scroll_support: bool,
    #[serde(default = "default_true")]
    pub draw_shadow: bool,
    /// Flip animation duration in milliseconds.
    #[serde(default = "default_flipping_time")]
    pub flipping_time: u32,
    #[serde(default = "default_max_shadow_opacity")]
    pub max_shadow_opacity: f32,
    #[serde(default = "default_true")]
    pub use_portrait: bool,
    #[serde(default)]
    pub start_page: usize,
    #[serde(default = "default_true")]
    pub click_event_forward: bool,
    #[serde(default = "default_true")]
    pub use_mouse_events: bool,
    #[serde(default = "default_swipe_distance")]
    pub swipe_distance: f32,
    #[serde(default = "default_true")]
    pub show_page_corners: bool,
    #[serde(default)]
    pub disable_flip_by_click: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            show_cover: true,
            mobile_scroll_support: true,
            draw_shadow: true,
            flipping_time: 1000,
            max_shadow_opacity: 0.5,
            use_portrait: true,
            start_page: 0,
            click_event_forward: true,
            use_mouse_events: true,
            swipe_distance: 30.0,
            show_page_corners: true,
            disable_flip_by_click: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControlsPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControlsConfig {
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default)]
    pub position: ControlsPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PageStyle>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { show: true, position: ControlsPosition::Bottom, style: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_settings_take_defaults() {
        let settings: EngineSettings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert!(settings.show_cover);
        assert_eq!(settings.flipping_time, 1000);
        assert_eq!(settings.max_shadow_opacity, 0.5);
    }

    #[test]
    fn test_partial_settings_keep_other_defaults() {
        let settings: EngineSettings = serde_json::from_value(json!({
            "flippingTime": 600,
            "drawShadow": false,
        }))
        .unwrap();
        assert_eq!(settings.flipping_time, 600);
        assert!(!settings.draw_shadow);
        assert!(settings.use_portrait);
        assert_eq!(settings.swipe_distance, 30.0);
    }
}
