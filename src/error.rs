use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the detection pipeline and its I/O helpers.
///
/// Detection over a valid, non-empty frame is total: the only error the core
/// pipeline itself produces is [`DetectError::InvalidInput`] for a
/// zero-sized buffer. The remaining variants originate in the filesystem
/// helpers used by the demo tools.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("invalid input image: {0}")]
    InvalidInput(String),
    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
