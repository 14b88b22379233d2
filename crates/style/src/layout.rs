//! Flex-like layout directives. Passed through resolution verbatim;
//! only the numeric gap is converted to a size unit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    #[default]
    Flex,
    Block,
    Grid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[default]
    #[serde(rename = "nowrap")]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// The layout sub-record of a page or element style.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
}

impl LayoutStyle {
    /// Overlays the present fields of `over` onto `self`.
    pub fn apply(&mut self, over: &LayoutStyle) {
        if over.display.is_some() {
            self.display = over.display.clone();
        }
        if over.flex_direction.is_some() {
            self.flex_direction = over.flex_direction.clone();
        }
        if over.justify_content.is_some() {
            self.justify_content = over.justify_content.clone();
        }
        if over.align_items.is_some() {
            self.align_items = over.align_items.clone();
        }
        if over.flex_wrap.is_some() {
            self.flex_wrap = over.flex_wrap.clone();
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
    fn test_kebab_case_wire_names() {
        let l: LayoutStyle = serde_json::from_value(json!({
            "display": "flex",
            "flexDirection": "row-reverse",
            "justifyContent": "space-between",
            "flexWrap": "nowrap",
            "gap": 12,
        }))
        .unwrap();
        assert_eq!(l.display, Some(Display::Flex));
        assert_eq!(l.flex_direction, Some(FlexDirection::RowReverse));
        assert_eq!(l.justify_content, Some(JustifyContent::SpaceBetween));
        assert_eq!(l.flex_wrap, Some(FlexWrap::NoWrap));
        assert_eq!(l.gap, Some(12.0));
    }
}
