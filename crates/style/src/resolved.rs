//! Resolution from the configuration style to the render-ready record.

use crate::border::BorderStyle;
use crate::color::resolve_color;
use crate::layout::{AlignItems, Display, FlexDirection, FlexWrap, JustifyContent};
use crate::stylesheet::{Background, ImageRepeat, ImageSize, PageStyle};
use crate::typography::{TextAlign, TextTransform};
use foliant_types::Scalar;
use serde::Serialize;

/// A fully resolved, render-ready style record.
///
/// Paint channels and shorthand fields are final CSS value strings;
/// typography and layout directives pass through as written.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    // Background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_repeat: Option<ImageRepeat>,

    // Foreground
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    // Typography
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

    // Spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,

    // Border
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,

    // Layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,

    // Other
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

fn resolve_background(out: &mut ResolvedStyle, background: &Background) {
    if background.color.is_some() {
        // Backgrounds prefer the gradient table for names in both tables.
        out.background = Some(resolve_color(background.color.as_ref(), true));
    }
    if let Some(url) = &background.image {
        out.background_image = Some(format!("url({})", url));
        out.background_size = Some(background.image_size.clone().unwrap_or_default());
        out.background_position =
            Some(background.image_position.clone().unwrap_or_else(|| "center".to_string()));
        out.background_repeat = Some(background.image_repeat.clone().unwrap_or_default());
    }
}

/// Resolves a configuration style into the normalized record.
pub fn resolve_style(style: &PageStyle) -> ResolvedStyle {
    let mut out = ResolvedStyle::default();

    if let Some(background) = &style.background {
        resolve_background(&mut out, background);
    }

    if style.color.is_some() {
        out.color = Some(resolve_color(style.color.as_ref(), false));
    }

    if let Some(typography) = &style.typography {
        out.font_size = typography.font_size.clone();
        out.font_family = typography.font_family.clone();
        out.font_weight = typography.font_weight.clone();
        out.line_height = typography.line_height.clone();
        out.letter_spacing = typography.letter_spacing.clone();
        out.text_align = typography.text_align.clone();
        out.text_transform = typography.text_transform.clone();
    }

    if let Some(spacing) = &style.spacing {
        out.padding = spacing.padding.as_ref().map(|p| p.to_css());
        out.margin = spacing.margin.as_ref().map(|m| m.to_css());
        out.gap = spacing.gap.map(|g| format!("{}px", g));
    }

    if let Some(border) = &style.border {
        out.border_width = border.width.map(|w| format!("{}px", w));
        out.border_style = border.style.clone();
        out.border_color = border.color.clone();
        out.border_radius = border.radius.as_ref().map(|r| r.to_css());
    }

    if let Some(layout) = &style.layout {
        out.display = layout.display.clone();
        out.flex_direction = layout.flex_direction.clone();
        out.justify_content = layout.justify_content.clone();
        out.align_items = layout.align_items.clone();
        out.flex_wrap = layout.flex_wrap.clone();
        // The layout gap shares the spacing gap's channel and wins when
        // both are present.
        if let Some(gap) = layout.gap {
            out.gap = Some(format!("{}px", gap));
        }
    }

    if style.opacity.is_some() {
        out.opacity = style.opacity;
    }
    if style.box_shadow.is_some() {
        out.box_shadow = style.box_shadow.clone();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style(value: serde_json::Value) -> PageStyle {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_style_resolves_empty() {
        assert_eq!(resolve_style(&PageStyle::default()), ResolvedStyle::default());
    }

    #[test]
    fn test_background_named_color_prefers_gradient() {
        let resolved = resolve_style(&style(json!({
            "background": { "color": "purple" },
        })));
        assert_eq!(
            resolved.background.as_deref(),
            Some("linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
        );
    }

    #[test]
    fn test_foreground_named_color_stays_solid() {
        let resolved = resolve_style(&style(json!({ "color": "purple" })));
        assert_eq!(resolved.color.as_deref(), Some("#f3e5f5"));
    }

    #[test]
    fn test_background_image_defaults() {
        let resolved = resolve_style(&style(json!({
            "background": { "color": "#fff", "image": "https://example.com/bg.png" },
        })));
        assert_eq!(resolved.background.as_deref(), Some("#fff"));
        assert_eq!(
            resolved.background_image.as_deref(),
            Some("url(https://example.com/bg.png)")
        );
        assert_eq!(resolved.background_size, Some(ImageSize::Cover));
        assert_eq!(resolved.background_position.as_deref(), Some("center"));
        assert_eq!(resolved.background_repeat, Some(ImageRepeat::NoRepeat));
    }

    #[test]
    fn test_spacing_channels() {
        let resolved = resolve_style(&style(json!({
            "spacing": { "padding": { "top": 10, "right": 20 }, "margin": 4, "gap": 8 },
        })));
        assert_eq!(resolved.padding.as_deref(), Some("10px 20px 10px 20px"));
        assert_eq!(resolved.margin.as_deref(), Some("4px"));
        assert_eq!(resolved.gap.as_deref(), Some("8px"));
    }

    #[test]
    fn test_border_channels_are_independent() {
        let resolved = resolve_style(&style(json!({
            "border": { "width": 2, "radius": { "topLeft": 8, "topRight": 8 } },
        })));
        assert_eq!(resolved.border_width.as_deref(), Some("2px"));
        assert!(resolved.border_style.is_none());
        assert!(resolved.border_color.is_none());
        assert_eq!(resolved.border_radius.as_deref(), Some("8px 8px 0px 0px"));
    }

    #[test]
    fn test_layout_gap_wins_over_spacing_gap() {
        let resolved = resolve_style(&style(json!({
            "spacing": { "gap": 8 },
            "layout": { "display": "flex", "gap": 24 },
        })));
        assert_eq!(resolved.gap.as_deref(), Some("24px"));
        assert_eq!(resolved.display, Some(Display::Flex));
    }

    #[test]
    fn test_opacity_and_shadow_pass_through() {
        let resolved = resolve_style(&style(json!({
            "opacity": 0.85,
            "boxShadow": "0 2px 8px rgba(0,0,0,0.2)",
        })));
        assert_eq!(resolved.opacity, Some(0.85));
        assert_eq!(resolved.box_shadow.as_deref(), Some("0 2px 8px rgba(0,0,0,0.2)"));
    }
}
