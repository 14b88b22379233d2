//! The page render tree: typed nodes the host renderer walks.
//!
//! Resolution is permissive throughout. A malformed element, such as an
//! image or video without a url, becomes an explicit placeholder node;
//! the worst case for bad input is a degraded visual for that one element.

use crate::video::normalize_embed_url;
use foliant_config::{ContentElement, ImageConfig, ObjectFit, PageConfig, PageContent, VideoConfig};
use foliant_style::{ResolvedStyle, resolve_style};
use foliant_types::Scalar;
use serde::Serialize;

const DIVIDER_DEFAULT_HEIGHT: f32 = 1.0;
const SPACER_DEFAULT_HEIGHT: f32 = 20.0;
const HEADING_DEFAULT_LEVEL: u8 = 2;
const VIDEO_DEFAULT_WIDTH: f64 = 280.0;
const VIDEO_DEFAULT_HEIGHT: f64 = 160.0;
const VIDEO_DEFAULT_RADIUS: f32 = 8.0;

/// A resolved image, defaults applied.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Scalar>,
    pub alt: String,
    pub object_fit: ObjectFit,
    pub object_position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

/// A resolved video, url normalized and defaults applied.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoNode {
    pub src: String,
    pub width: Scalar,
    pub height: Scalar,
    pub autoplay: bool,
    pub controls: bool,
    pub looped: bool,
    pub muted: bool,
    pub border_radius: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

/// One node of a page's render tree, in content order.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderNode {
    Text {
        content: String,
        style: ResolvedStyle,
    },
    Heading {
        level: u8,
        content: String,
        style: ResolvedStyle,
    },
    Image {
        #[serde(flatten)]
        image: ImageNode,
        style: ResolvedStyle,
    },
    Video {
        #[serde(flatten)]
        video: VideoNode,
        style: ResolvedStyle,
    },
    Divider {
        height: f32,
        style: ResolvedStyle,
    },
    Spacer {
        height: f32,
        style: ResolvedStyle,
    },
    /// Stands in for an element that cannot render (missing media url).
    Placeholder {
        label: String,
    },
}

fn resolve_image(config: &ImageConfig) -> Option<ImageNode> {
    let url = config.url.clone()?;
    Some(ImageNode {
        url,
        width: config.width.clone(),
        height: config.height.clone(),
        alt: config.alt.clone().unwrap_or_default(),
        object_fit: config.object_fit.clone().unwrap_or_default(),
        object_position: config
            .object_position
            .clone()
            .unwrap_or_else(|| "center".to_string()),
        border_radius: config.border_radius,
        margin: config.margin.as_ref().map(|m| m.to_css()),
    })
}

fn resolve_video(config: &VideoConfig) -> Option<VideoNode> {
    let url = config.url.clone()?;
    Some(VideoNode {
        src: normalize_embed_url(&url),
        width: config.width.clone().unwrap_or(Scalar::Number(VIDEO_DEFAULT_WIDTH)),
        height: config.height.clone().unwrap_or(Scalar::Number(VIDEO_DEFAULT_HEIGHT)),
        autoplay: config.autoplay.unwrap_or(false),
        controls: config.controls.unwrap_or(true),
        looped: config.looped.unwrap_or(false),
        muted: config.muted.unwrap_or(false),
        border_radius: config.border_radius.unwrap_or(VIDEO_DEFAULT_RADIUS),
        margin: config.margin.as_ref().map(|m| m.to_css()),
    })
}

fn image_node(config: &ImageConfig, style: ResolvedStyle) -> RenderNode {
    match resolve_image(config) {
        Some(image) => RenderNode::Image { image, style },
        None => {
            log::debug!("image element without url rendered as placeholder");
            RenderNode::Placeholder { label: "image".to_string() }
        }
    }
}

fn video_node(config: &VideoConfig, style: ResolvedStyle) -> RenderNode {
    match resolve_video(config) {
        Some(video) => RenderNode::Video { video, style },
        None => {
            log::debug!("video element without url rendered as placeholder");
            RenderNode::Placeholder { label: "video".to_string() }
        }
    }
}

fn render_element(element: &ContentElement) -> Option<RenderNode> {
    let style = element
        .style()
        .map(resolve_style)
        .unwrap_or_default();

    let node = match element {
        ContentElement::Text { content, .. } => RenderNode::Text {
            content: content.clone().unwrap_or_default(),
            style,
        },
        ContentElement::Heading { content, level, .. } => RenderNode::Heading {
            level: level.unwrap_or(HEADING_DEFAULT_LEVEL).clamp(1, 6),
            content: content.clone().unwrap_or_default(),
            style,
        },
        ContentElement::Image { image, .. } => match image {
            Some(image) => image_node(image, style),
            None => RenderNode::Placeholder { label: "image".to_string() },
        },
        ContentElement::Video { video, .. } => match video {
            Some(video) => video_node(video, style),
            None => RenderNode::Placeholder { label: "video".to_string() },
        },
        ContentElement::Divider { height, .. } => RenderNode::Divider {
            height: height.unwrap_or(DIVIDER_DEFAULT_HEIGHT),
            style,
        },
        ContentElement::Spacer { height, .. } => RenderNode::Spacer {
            height: height.unwrap_or(SPACER_DEFAULT_HEIGHT),
            style,
        },
        ContentElement::Unknown => return None,
    };
    Some(node)
}

/// Builds a page's render tree: the content sequence in order, then the
/// page-level image and video when present.
pub fn render_page(config: &PageConfig) -> Vec<RenderNode> {
    let mut nodes = Vec::new();

    match &config.content {
        Some(PageContent::Plain(text)) => {
            nodes.push(RenderNode::Text {
                content: text.clone(),
                style: ResolvedStyle::default(),
            });
        }
        Some(PageContent::Elements(elements)) => {
            nodes.extend(elements.iter().filter_map(render_element));
        }
        None => {}
    }

    if let Some(image) = &config.image {
        nodes.push(image_node(image, ResolvedStyle::default()));
    }
    if let Some(video) = &config.video {
        nodes.push(video_node(video, ResolvedStyle::default()));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: serde_json::Value) -> PageConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_plain_content_is_one_text_node() {
        let nodes = render_page(&page(json!({
            "type": "content", "content": "Lorem ipsum",
        })));
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0], RenderNode::Text { content, .. } if content == "Lorem ipsum"));
    }

    #[test]
    fn test_element_sequence_order_is_preserved() {
        let nodes = render_page(&page(json!({
            "type": "content",
            "content": [
                { "type": "heading", "level": 3, "content": "Welcome!" },
                { "type": "text", "content": "Body" },
                { "type": "spacer" },
                { "type": "divider" },
            ],
        })));
        assert_eq!(nodes.len(), 4);
        assert!(matches!(nodes[0], RenderNode::Heading { level: 3, .. }));
        assert!(matches!(nodes[1], RenderNode::Text { .. }));
        assert!(matches!(nodes[2], RenderNode::Spacer { height, .. } if height == 20.0));
        assert!(matches!(nodes[3], RenderNode::Divider { height, .. } if height == 1.0));
    }

    #[test]
    fn test_heading_level_defaults_and_clamps() {
        let nodes = render_page(&page(json!({
            "type": "content",
            "content": [
                { "type": "heading", "content": "A" },
                { "type": "heading", "level": 9, "content": "B" },
            ],
        })));
        assert!(matches!(nodes[0], RenderNode::Heading { level: 2, .. }));
        assert!(matches!(nodes[1], RenderNode::Heading { level: 6, .. }));
    }

    #[test]
    fn test_image_without_url_is_placeholder() {
        let nodes = render_page(&page(json!({
            "type": "content",
            "content": [ { "type": "image", "image": { "width": 300 } } ],
        })));
        assert!(matches!(&nodes[0], RenderNode::Placeholder { label } if label == "image"));
    }

    #[test]
    fn test_video_url_is_normalized_with_defaults() {
        let nodes = render_page(&page(json!({
            "type": "content",
            "video": { "url": "https://www.youtube.com/watch?v=D70j-NRgNbI" },
        })));
        match &nodes[0] {
            RenderNode::Video { video, .. } => {
                assert_eq!(video.src, "https://www.youtube.com/embed/D70j-NRgNbI");
                assert_eq!(video.width, Scalar::Number(280.0));
                assert_eq!(video.height, Scalar::Number(160.0));
                assert_eq!(video.border_radius, 8.0);
                assert!(video.controls);
                assert!(!video.autoplay);
            }
            other => panic!("expected video node, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_elements_render_as_nothing() {
        let nodes = render_page(&page(json!({
            "type": "content",
            "content": [
                { "type": "carousel" },
                { "type": "text", "content": "still here" },
            ],
        })));
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_direct_media_renders_after_content() {
        let nodes = render_page(&page(json!({
            "type": "content",
            "content": "Text first",
            "image": { "url": "https://picsum.photos/200/300" },
        })));
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[1], RenderNode::Image { .. }));
    }

    #[test]
    fn test_element_style_override_is_resolved() {
        let nodes = render_page(&page(json!({
            "type": "content",
            "content": [
                { "type": "heading", "content": "H", "style": { "color": "#667eea" } },
            ],
        })));
        match &nodes[0] {
            RenderNode::Heading { style, .. } => {
                assert_eq!(style.color.as_deref(), Some("#667eea"));
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }
}
