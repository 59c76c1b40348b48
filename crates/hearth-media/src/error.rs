//! Error types for hearth-media.

use thiserror::Error;

/// Result type for hearth-media operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hearth-media operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The configured CDN root is empty.
    #[error("CDN root is empty")]
    EmptyCdnRoot,

    /// Variant name outside the known set.
    #[error("Unknown image variant: {0}")]
    UnknownVariant(String),

    /// String does not have the `<collection>/<slug>/img-<token>` shape.
    #[error("Invalid image base path '{path}': {reason}")]
    InvalidBasePath { path: String, reason: &'static str },

    /// A name slugified to nothing.
    #[error("Cannot derive a slug from '{0}'")]
    EmptySlug(String),
}

impl Error {
    pub(crate) fn invalid_base_path(path: &str, reason: &'static str) -> Self {
        Self::InvalidBasePath {
            path: path.to_string(),
            reason,
        }
    }
}
