use thiserror::Error;

/// Errors raised while constructing an [`ImageTag`](crate::image::ImageTag)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageTagError {
    /// The requested editor version does not match the accepted grammar
    #[error("Invalid version \"{0}\".")]
    InvalidVersion(String),

    /// The requested build target has no image
    #[error("Platform \"{0}\" is currently not supported.")]
    UnsupportedPlatform(String),
}
