//! Error types for cosmoscape

use thiserror::Error;

/// Main error type for the shell
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("contact error: {0}")]
    Contact(#[from] crate::contact::ContactError),
}
