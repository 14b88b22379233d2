//! Image and video configuration.
//!
//! `url` is optional on the wire: an element without one renders as a
//! placeholder rather than failing the whole configuration.

use foliant_style::SpacingValue;
use foliant_types::Scalar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Cover,
    #[default]
    Contain,
    Fill,
    None,
    ScaleDown,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ObjectFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<SpacingValue>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<bool>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<SpacingValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_without_url_still_parses() {
        let image: ImageConfig =
            serde_json::from_value(json!({ "width": 300, "borderRadius": 8 })).unwrap();
        assert!(image.url.is_none());
        assert_eq!(image.width, Some(Scalar::Number(300.0)));
    }

    #[test]
    fn test_video_loop_wire_name() {
        let video: VideoConfig = serde_json::from_value(json!({
            "url": "https://youtu.be/D70j-NRgNbI",
            "loop": true,
        }))
        .unwrap();
        assert_eq!(video.looped, Some(true));
    }
}
