//! Error type for configuration loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}
