//! Color values and the name/gradient resolution tables.
//!
//! A color in the configuration is either a literal CSS paint string, a
//! symbolic name looked up in the preset tables, or a gradient descriptor.
//! Resolution is pure and total: every input maps to *some* paint string.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The default gradient axis when a descriptor omits one.
const DEFAULT_GRADIENT_DIRECTION: &str = "135deg";

/// A color as written in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// A literal paint string, a named preset, or any CSS-native value.
    Literal(String),
    /// An explicit gradient: `{"type": "gradient", "direction": ..., "colors": [...]}`.
    Gradient {
        direction: Option<String>,
        colors: Vec<String>,
    },
    /// An explicit preset reference: `{"type": "named", "value": ...}`.
    Named { value: String },
}

impl Serialize for ColorValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ColorValue::Literal(s) => serializer.serialize_str(s),
            ColorValue::Gradient { direction, colors } => {
                let len = 2 + usize::from(direction.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("type", "gradient")?;
                if let Some(direction) = direction {
                    map.serialize_entry("direction", direction)?;
                }
                map.serialize_entry("colors", colors)?;
                map.end()
            }
            ColorValue::Named { value } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "named")?;
                map.serialize_entry("value", value)?;
                map.end()
            }
        }
    }
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        ColorValue::Literal(s.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::Literal(s)
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(tag = "type", rename_all = "lowercase")]
        enum Tagged {
            Gradient {
                #[serde(default)]
                direction: Option<String>,
                colors: Vec<String>,
            },
            Named {
                value: String,
            },
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorValueDef {
            Str(String),
            Tagged(Tagged),
        }

        match ColorValueDef::deserialize(deserializer)? {
            ColorValueDef::Str(s) => Ok(ColorValue::Literal(s)),
            ColorValueDef::Tagged(Tagged::Gradient { direction, colors }) => {
                Ok(ColorValue::Gradient { direction, colors })
            }
            ColorValueDef::Tagged(Tagged::Named { value }) => Ok(ColorValue::Named { value }),
        }
    }
}

/// Maps a color preset name to its paint literal.
fn named_color(name: &str) -> Option<&'static str> {
    let paint = match name {
        // Blues
        "blue" => "#e3f2fd",
        "blueDark" => "#0d47a1",
        "blueLight" => "#bbdefb",
        // Purples
        "purple" => "#f3e5f5",
        "purpleDark" => "#4a148c",
        "purpleLight" => "#e1bee7",
        // Pinks
        "pink" => "#fce4ec",
        "pinkDark" => "#880e4f",
        "pinkLight" => "#f8bbd0",
        // Greens
        "green" => "#e8f5e9",
        "greenDark" => "#1b5e20",
        "greenLight" => "#c8e6c9",
        // Oranges
        "orange" => "#fff3e0",
        "orangeDark" => "#e65100",
        "orangeLight" => "#ffe0b2",
        // Teals
        "teal" => "#e0f2f1",
        "tealDark" => "#004d40",
        "tealLight" => "#b2dfdb",
        // Yellows
        "yellow" => "#fff9c4",
        "yellowDark" => "#f57f17",
        "yellowLight" => "#fff59d",
        // Reds
        "red" => "#ffebee",
        "redDark" => "#b71c1c",
        "redLight" => "#ffcdd2",
        // Grays
        "gray" => "#f5f5f5",
        "grayDark" => "#424242",
        "grayLight" => "#e0e0e0",
        // Neutrals
        "white" => "#ffffff",
        "black" => "#000000",
        "cream" => "#fff8e1",
        "beige" => "#fef5e7",
        // Special
        "lavender" => "#ede7f6",
        "cyan" => "#e0f7fa",
        "indigo" => "#e8eaf6",
        "lime" => "#f1f8e9",
        "coral" => "#ffe0b2",
        "rose" => "#fce4ec",
        "sky" => "#e1f5fe",
        "violet" => "#f3e5f5",
        "peach" => "#ffccbc",
        _ => return None,
    };
    Some(paint)
}

/// Maps a gradient preset name to its full gradient expression.
fn named_gradient(name: &str) -> Option<&'static str> {
    let paint = match name {
        "purple" => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        "pink" => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        "ocean" => "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        "green" => "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
        "sunset" => "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        "blue" => "linear-gradient(135deg, #30cfd0 0%, #330867 100%)",
        "warm" => "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
        "cool" => "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
        "dark" => "linear-gradient(135deg, #2c3e50 0%, #34495e 100%)",
        "light" => "linear-gradient(135deg, #ffffff 0%, #f5f5f5 100%)",
        _ => return None,
    };
    Some(paint)
}

/// Builds a `linear-gradient(...)` expression from ordered stops.
///
/// Stops are joined in the given order with no reordering or deduplication.
pub fn gradient(stops: &[String], direction: Option<&str>) -> String {
    format!(
        "linear-gradient({}, {})",
        direction.unwrap_or(DEFAULT_GRADIENT_DIRECTION),
        stops.join(", ")
    )
}

/// Resolves a symbolic name through the preset tables.
///
/// Some names (e.g. "blue") exist in both tables; `prefer_gradient`
/// decides which table is consulted first. The background path sets it.
fn resolve_name(name: &str, prefer_gradient: bool) -> Option<&'static str> {
    if prefer_gradient {
        named_gradient(name).or_else(|| named_color(name))
    } else {
        named_color(name).or_else(|| named_gradient(name))
    }
}

/// Resolves a configuration color to a final paint string.
///
/// Absent values resolve to `"transparent"`; unknown names pass through
/// verbatim so hex/rgb/CSS-native values need no special casing.
pub fn resolve_color(value: Option<&ColorValue>, prefer_gradient: bool) -> String {
    let Some(value) = value else {
        return "transparent".to_string();
    };

    match value {
        ColorValue::Literal(s) => resolve_name(s, prefer_gradient)
            .map(str::to_string)
            .unwrap_or_else(|| s.clone()),
        ColorValue::Gradient { direction, colors } => {
            if colors.is_empty() {
                log::warn!("gradient descriptor has no color stops; painting transparent");
                return "transparent".to_string();
            }
            gradient(colors, direction.as_deref())
        }
        ColorValue::Named { value } => resolve_name(value, prefer_gradient)
            .map(str::to_string)
            .unwrap_or_else(|| value.clone()),
    }
}
