//! Error type for layout-document import.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutDocError {
    #[error("layout document parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("layout document must be a JSON object keyed by page index, got {0}")]
    Shape(String),
}
