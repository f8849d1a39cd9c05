/// Defaults applied to image properties that the caller leaves unset
pub mod defaults {
    /// Organization that publishes the editor images
    pub const REPOSITORY: &str = "unityci";

    /// Image name within the repository
    pub const NAME: &str = "editor";

    /// Editor version used when none is requested
    pub const VERSION: &str = "2019.2.11f1";
}

/// Container image tag constants
pub mod tag {
    /// Revision of the image build, appended to every computed reference
    pub const REVISION: &str = "0";
}

