//! Stock size presets and the default typography.

use crate::size::{BookSize, SizeMode};
use foliant_style::{TextAlign, TextTransform, Typography};
use foliant_types::Scalar;

pub fn mobile() -> BookSize {
    BookSize {
        width: 300.0,
        height: 400.0,
        min_width: Some(200.0),
        max_width: Some(400.0),
        min_height: Some(300.0),
        max_height: Some(500.0),
        size: Some(SizeMode::Stretch),
    }
}

pub fn tablet() -> BookSize {
    BookSize {
        width: 500.0,
        height: 700.0,
        min_width: Some(400.0),
        max_width: Some(600.0),
        min_height: Some(500.0),
        max_height: Some(800.0),
        size: Some(SizeMode::Stretch),
    }
}

pub fn desktop() -> BookSize {
    BookSize {
        width: 600.0,
        height: 800.0,
        min_width: Some(500.0),
        max_width: Some(800.0),
        min_height: Some(600.0),
        max_height: Some(1000.0),
        size: Some(SizeMode::Stretch),
    }
}

pub fn fixed() -> BookSize {
    BookSize::fixed(400.0, 550.0)
}

/// The typography every book starts from when no global record is given.
pub fn default_typography() -> Typography {
    Typography {
        font_size: Some(Scalar::from("1rem")),
        font_family: Some("system-ui, Avenir, Helvetica, Arial, sans-serif".to_string()),
        font_weight: Some(Scalar::Number(400.0)),
        line_height: Some(Scalar::Number(1.6)),
        letter_spacing: Some(Scalar::from("normal")),
        text_align: Some(TextAlign::Left),
        text_transform: Some(TextTransform::None),
    }
}
