//! A CSS-like scalar that is either a bare number or a string with units.
//!
//! Configuration authors write `"fontSize": 18` and `"fontSize": "1.2rem"`
//! interchangeably; both round-trip unchanged through resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_deserializes_both_shapes() {
        let n: Scalar = serde_json::from_str("400").unwrap();
        assert_eq!(n, Scalar::Number(400.0));

        let s: Scalar = serde_json::from_str("\"1.2rem\"").unwrap();
        assert_eq!(s, Scalar::Text("1.2rem".to_string()));
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Number(1.6).to_string(), "1.6");
        assert_eq!(Scalar::from("normal").to_string(), "normal");
    }
}
