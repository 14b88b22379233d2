//! Border directives and the 4-corner radius shorthand.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    None,
}

/// A border-radius directive: uniform or per-corner.
///
/// Unlike spacing, corners do NOT inherit from each other; a missing
/// corner is simply 0. Rendered in CSS order: top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RadiusValue {
    Uniform(f32),
    Corners {
        #[serde(rename = "topLeft", skip_serializing_if = "Option::is_none")]
        top_left: Option<f32>,
        #[serde(rename = "topRight", skip_serializing_if = "Option::is_none")]
        top_right: Option<f32>,
        #[serde(rename = "bottomLeft", skip_serializing_if = "Option::is_none")]
        bottom_left: Option<f32>,
        #[serde(rename = "bottomRight", skip_serializing_if = "Option::is_none")]
        bottom_right: Option<f32>,
    },
}

impl RadiusValue {
    pub fn to_css(&self) -> String {
        match *self {
            RadiusValue::Uniform(v) => format!("{}px", v),
            RadiusValue::Corners { top_left, top_right, bottom_left, bottom_right } => {
                format!(
                    "{}px {}px {}px {}px",
                    top_left.unwrap_or(0.0),
                    top_right.unwrap_or(0.0),
                    bottom_right.unwrap_or(0.0),
                    bottom_left.unwrap_or(0.0),
                )
            }
        }
    }
}

impl From<f32> for RadiusValue {
    fn from(v: f32) -> Self {
        RadiusValue::Uniform(v)
    }
}

impl<'de> Deserialize<'de> for RadiusValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RadiusDef {
            Num(f32),
            Corners {
                #[serde(rename = "topLeft", default)]
                top_left: Option<f32>,
                #[serde(rename = "topRight", default)]
                top_right: Option<f32>,
                #[serde(rename = "bottomLeft", default)]
                bottom_left: Option<f32>,
                #[serde(rename = "bottomRight", default)]
                bottom_right: Option<f32>,
            },
        }

        match RadiusDef::deserialize(deserializer)? {
            RadiusDef::Num(v) => Ok(RadiusValue::Uniform(v)),
            RadiusDef::Corners { top_left, top_right, bottom_left, bottom_right } => {
                Ok(RadiusValue::Corners { top_left, top_right, bottom_left, bottom_right })
            }
        }
    }
}

/// The border sub-record of a page or element style.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<RadiusValue>,
}

impl Border {
    /// Overlays the present fields of `over` onto `self`.
    pub fn apply(&mut self, over: &Border) {
        if over.width.is_some() {
            self.width = over.width;
        }
        if over.style.is_some() {
            self.style = over.style.clone();
        }
        if over.color.is_some() {
            self.color = over.color.clone();
        }
        if over.radius.is_some() {
            self.radius = over.radius.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uniform_radius() {
        let r: RadiusValue = serde_json::from_value(json!(8)).unwrap();
        assert_eq!(r.to_css(), "8px");
    }

    #[test]
    fn test_corners_do_not_inherit() {
        let r: RadiusValue = serde_json::from_value(json!({ "topLeft": 12 })).unwrap();
        assert_eq!(r.to_css(), "12px 0px 0px 0px");
    }

    #[test]
    fn test_corner_css_order() {
        let r: RadiusValue = serde_json::from_value(json!({
            "topLeft": 1, "topRight": 2, "bottomLeft": 3, "bottomRight": 4,
        }))
        .unwrap();
        // CSS order is top-left, top-right, bottom-right, bottom-left.
        assert_eq!(r.to_css(), "1px 2px 4px 3px");
    }

    #[test]
    fn test_border_deserialize() {
        let b: Border = serde_json::from_value(json!({
            "width": 2, "style": "dashed", "color": "#333", "radius": 4,
        }))
        .unwrap();
        assert_eq!(b.width, Some(2.0));
        assert_eq!(b.style, Some(BorderStyle::Dashed));
        assert_eq!(b.color.as_deref(), Some("#333"));
    }
}
