//! The unified error type for whole-book operations.

use foliant_config::ConfigError;
use foliant_editor::LayoutDocError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("layout document error: {0}")]
    Layout(#[from] LayoutDocError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
