//! The page/element style record and the cascade merge.

use crate::border::Border;
use crate::color::ColorValue;
use crate::layout::LayoutStyle;
use crate::spacing::Spacing;
use crate::typography::Typography;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSize {
    #[default]
    Cover,
    Contain,
    Auto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRepeat {
    #[default]
    NoRepeat,
    Repeat,
    RepeatX,
    RepeatY,
}

/// The background sub-record: a paint layer plus an optional image layer.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_repeat: Option<ImageRepeat>,
}

impl Background {
    /// Overlays the present fields of `over` onto `self`.
    pub fn apply(&mut self, over: &Background) {
        if over.color.is_some() {
            self.color = over.color.clone();
        }
        if over.image.is_some() {
            self.image = over.image.clone();
        }
        if over.image_size.is_some() {
            self.image_size = over.image_size.clone();
        }
        if over.image_position.is_some() {
            self.image_position = over.image_position.clone();
        }
        if over.image_repeat.is_some() {
            self.image_repeat = over.image_repeat.clone();
        }
    }
}

/// A page or element style as written in the configuration.
///
/// Every field is independently optional; absence means "inherit the
/// platform default", never "zero".
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

/// Merges `to_apply` into `base`, more specific layer last.
///
/// Sub-records merge field-by-field rather than wholesale: an element
/// setting only `color` leaves the page's typography intact, and an
/// element typography setting only `fontWeight` keeps the page's
/// `fontSize`.
pub fn merge_page_styles(base: &mut PageStyle, to_apply: &PageStyle) {
    if let Some(over) = &to_apply.background {
        base.background.get_or_insert_with(Background::default).apply(over);
    }
    if to_apply.color.is_some() {
        base.color = to_apply.color.clone();
    }
    if let Some(over) = &to_apply.typography {
        base.typography.get_or_insert_with(Typography::default).apply(over);
    }
    if let Some(over) = &to_apply.spacing {
        base.spacing.get_or_insert_with(Spacing::default).apply(over);
    }
    if let Some(over) = &to_apply.border {
        base.border.get_or_insert_with(Border::default).apply(over);
    }
    if let Some(over) = &to_apply.layout {
        base.layout.get_or_insert_with(LayoutStyle::default).apply(over);
    }
    if to_apply.opacity.is_some() {
        base.opacity = to_apply.opacity;
    }
    if to_apply.box_shadow.is_some() {
        base.box_shadow = to_apply.box_shadow.clone();
    }
}

impl PageStyle {
    /// Folds a stack of layers (least specific first) into one style.
    pub fn cascade<'a>(layers: impl IntoIterator<Item = &'a PageStyle>) -> PageStyle {
        let mut merged = PageStyle::default();
        for layer in layers {
            merge_page_styles(&mut merged, layer);
        }
        merged
    }
}
