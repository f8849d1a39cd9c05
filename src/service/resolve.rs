//! Resolve service
//!
//! Merges command line input with the user config and resolves the image.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    config::Config,
    image::{ImageProperties, ImageTag},
    platform::{ImageSuffix, Platform},
};

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub platform: Option<String>,
    pub version: Option<String>,
    pub repository: Option<String>,
    pub name: Option<String>,
    pub custom_image: Option<String>,
}

/// Result of a resolve operation
#[derive(Debug, Clone)]
pub struct ResolveResult {
    pub image: ImageTag,
}

/// Service for resolving the image of a build
pub struct ResolveService;

impl ResolveService {
    /// Resolve the image for `request`, falling back to `config` for any
    /// value the request leaves unset
    pub fn resolve(request: ResolveRequest, config: &Config) -> Result<ResolveResult> {
        let properties = Self::properties(request, config)?;
        debug!("Resolving image for {:?}", properties);

        let image = ImageTag::new(properties).context("Invalid build parameters")?;
        if !image.platform().is_supported() {
            info!(
                "Platform {} has no image of its own, using {}",
                image.platform(),
                image.builder_platform()
            );
        }

        info!("Resolved image: {}", image);
        Ok(ResolveResult { image })
    }

    /// Every platform with the image variant it resolves to
    pub fn platforms() -> Vec<(Platform, ImageSuffix)> {
        Platform::ALL
            .into_iter()
            .map(|platform| (platform, platform.image_suffix()))
            .collect()
    }

    fn properties(request: ResolveRequest, config: &Config) -> Result<ImageProperties> {
        let platform = request
            .platform
            .or_else(|| config.default_platform.map(|p| p.to_string()))
            .context("A platform must be given with --platform or in the config")?;

        Ok(ImageProperties {
            repository: request.repository.or_else(|| config.repository.clone()),
            name: request.name.or_else(|| config.name.clone()),
            version: request.version.or_else(|| config.version.clone()),
            platform,
            custom_image: request.custom_image,
        })
    }
}
