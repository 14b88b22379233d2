//! Spacing shorthand: padding, margin, and gap.

use serde::{Deserialize, Deserializer, Serialize};

/// A spacing directive: a uniform value or a partial 4-side record.
///
/// Partial sides expand with the CSS shorthand inheritance rule: right
/// falls back to top, bottom falls back to top, left falls back to
/// right-then-top. A missing top counts as 0.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SpacingValue {
    Uniform(f32),
    Sides {
        #[serde(skip_serializing_if = "Option::is_none")]
        top: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        right: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        bottom: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        left: Option<f32>,
    },
}

impl SpacingValue {
    /// Expands to (top, right, bottom, left) pixel values.
    pub fn expand(&self) -> (f32, f32, f32, f32) {
        match *self {
            SpacingValue::Uniform(v) => (v, v, v, v),
            SpacingValue::Sides { top, right, bottom, left } => {
                let t = top.unwrap_or(0.0);
                let r = right.or(top).unwrap_or(0.0);
                let b = bottom.or(top).unwrap_or(0.0);
                let l = left.or(right).or(top).unwrap_or(0.0);
                (t, r, b, l)
            }
        }
    }

    /// Renders the CSS shorthand string.
    pub fn to_css(&self) -> String {
        match self {
            SpacingValue::Uniform(v) => format!("{}px", v),
            SpacingValue::Sides { .. } => {
                let (t, r, b, l) = self.expand();
                format!("{}px {}px {}px {}px", t, r, b, l)
            }
        }
    }
}

impl From<f32> for SpacingValue {
    fn from(v: f32) -> Self {
        SpacingValue::Uniform(v)
    }
}

impl<'de> Deserialize<'de> for SpacingValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum SpacingDef {
            Num(f32),
            Sides {
                #[serde(default)]
                top: Option<f32>,
                #[serde(default)]
                right: Option<f32>,
                #[serde(default)]
                bottom: Option<f32>,
                #[serde(default)]
                left: Option<f32>,
            },
        }

        match SpacingDef::deserialize(deserializer)? {
            SpacingDef::Num(v) => Ok(SpacingValue::Uniform(v)),
            SpacingDef::Sides { top, right, bottom, left } => {
                Ok(SpacingValue::Sides { top, right, bottom, left })
            }
        }
    }
}

/// The spacing sub-record of a page or element style.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<SpacingValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<SpacingValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
}

impl Spacing {
    /// Overlays the present fields of `over` onto `self`.
    pub fn apply(&mut self, over: &Spacing) {
        if over.padding.is_some() {
            self.padding = over.padding.clone();
        }
        if over.margin.is_some() {
            self.margin = over.margin.clone();
        }
        if over.gap.is_some() {
            self.gap = over.gap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uniform_renders_single_value() {
        let v: SpacingValue = serde_json::from_value(json!(20)).unwrap();
        assert_eq!(v.to_css(), "20px");
    }

    #[test]
    fn test_top_only_spreads_to_all_sides() {
        let v: SpacingValue = serde_json::from_value(json!({ "top": 10 })).unwrap();
        assert_eq!(v.to_css(), "10px 10px 10px 10px");
    }

    #[test]
    fn test_left_inherits_right_then_top() {
        let v: SpacingValue = serde_json::from_value(json!({ "top": 10, "right": 20 })).unwrap();
        assert_eq!(v.to_css(), "10px 20px 10px 20px");
    }

    #[test]
    fn test_missing_top_counts_as_zero() {
        let v: SpacingValue = serde_json::from_value(json!({ "left": 5 })).unwrap();
        assert_eq!(v.to_css(), "0px 0px 0px 5px");
    }

    #[test]
    fn test_explicit_sides_win() {
        let v: SpacingValue =
            serde_json::from_value(json!({ "top": 1, "right": 2, "bottom": 3, "left": 4 }))
                .unwrap();
        assert_eq!(v.expand(), (1.0, 2.0, 3.0, 4.0));
    }
}
