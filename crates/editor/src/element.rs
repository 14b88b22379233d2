//! Placed layout elements: the records behind the free-form page overlay.

use foliant_types::{ElementId, clamp_position, clamp_span};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Title,
    #[default]
    Text,
    Image,
    Video,
    Shape,
    /// Imported documents may carry kinds this version does not know;
    /// they keep their geometry and render as placeholders.
    Unknown,
}

impl<'de> Deserialize<'de> for ElementKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "title" => ElementKind::Title,
            "text" => ElementKind::Text,
            "image" => ElementKind::Image,
            "video" => ElementKind::Video,
            "shape" => ElementKind::Shape,
            _ => ElementKind::Unknown,
        })
    }
}

impl ElementKind {
    /// Default size for a freshly dropped element, percent of the page box.
    pub fn default_size(self) -> (f32, f32) {
        match self {
            ElementKind::Title => (40.0, 12.0),
            ElementKind::Text => (30.0, 20.0),
            ElementKind::Image => (30.0, 25.0),
            ElementKind::Video => (35.0, 25.0),
            ElementKind::Shape => (20.0, 20.0),
            ElementKind::Unknown => (20.0, 20.0),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Title => "title",
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::Shape => "shape",
            ElementKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Line,
}

/// One placed element. Geometry is percent of the page box; payload
/// fields are populated per kind and left alone otherwise.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutElement {
    #[serde(default)]
    pub id: ElementId,
    #[serde(rename = "type", default)]
    pub kind: ElementKind,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,
}

impl LayoutElement {
    /// Builds a new element at a drop point: the position is adjusted so
    /// the element centers on the pointer, then clamped into range.
    pub fn at_drop_point(kind: ElementKind, drop_x: f32, drop_y: f32, z_index: i32) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id: generate_id(kind),
            kind,
            x: clamp_position(drop_x - width / 2.0),
            y: clamp_position(drop_y - height / 2.0),
            width,
            height,
            z_index,
            content: None,
            url: None,
            shape: match kind {
                ElementKind::Shape => Some(ShapeKind::default()),
                _ => None,
            },
        }
    }

    /// Moves the element, clamping both axes. z-order is unchanged.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = clamp_position(x);
        self.y = clamp_position(y);
    }

    /// Shallow-merges a property patch; geometry fields present in the
    /// patch are independently re-clamped.
    pub fn patch(&mut self, patch: &ElementPatch) {
        if let Some(x) = patch.x {
            self.x = clamp_position(x);
        }
        if let Some(y) = patch.y {
            self.y = clamp_position(y);
        }
        if let Some(width) = patch.width {
            self.width = clamp_span(width);
        }
        if let Some(height) = patch.height {
            self.height = clamp_span(height);
        }
        if let Some(z_index) = patch.z_index {
            self.z_index = z_index;
        }
        if patch.content.is_some() {
            self.content = patch.content.clone();
        }
        if patch.url.is_some() {
            self.url = patch.url.clone();
        }
        if patch.shape.is_some() {
            self.shape = patch.shape;
        }
    }
}

/// A partial element update, the inspector-driven edit path.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,
}

/// Generates a fresh element id, e.g. `text-9f3c01ab`.
fn generate_id(kind: ElementKind) -> ElementId {
    ElementId::from(format!("{}-{:08x}", kind, rand::random::<u32>()))
}
