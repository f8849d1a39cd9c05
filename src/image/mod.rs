use crate::constants::{defaults, tag};
use crate::error::ImageTagError;
use crate::platform::{ImageSuffix, Platform};
use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

#[cfg(test)]
mod tests;

// Only the first branch is anchored at the start, so any version ending in
// "3" is accepted as well.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^20[0-9]{2}\.[0-9]\.[0-9A-Za-z_]{3,4}|3$").expect("valid version pattern")
});

/// Returns whether `version` is an editor version images are published for
pub fn is_valid_version(version: &str) -> bool {
    VERSION_PATTERN.is_match(version)
}

/// Parameters of a build that select its image.
///
/// Unset fields fall back to the published defaults when the
/// [`ImageTag`] is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Build target identifier, e.g. `StandaloneLinux64`
    pub platform: String,
    /// Full image reference that replaces the computed one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
}

impl ImageProperties {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            ..Default::default()
        }
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_custom_image(mut self, custom_image: impl Into<String>) -> Self {
        self.custom_image = Some(custom_image.into());
        self
    }
}

/// The editor image a build runs in, e.g. `unityci/editor:2019.2.11f1-base-0`.
///
/// Validated on construction and immutable afterwards; `tag`, `image` and
/// the rendered reference are derived on every read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageTag {
    repository: String,
    name: String,
    version: String,
    platform: Platform,
    builder_platform: ImageSuffix,
    custom_image: Option<String>,
}

impl ImageTag {
    /// Create a new `ImageTag`, applying defaults before validating the
    /// version and then the platform.
    pub fn new(properties: ImageProperties) -> Result<Self, ImageTagError> {
        let ImageProperties {
            repository,
            name,
            version,
            platform,
            custom_image,
        } = properties;

        let repository = repository.unwrap_or_else(|| defaults::REPOSITORY.to_string());
        let name = name.unwrap_or_else(|| defaults::NAME.to_string());
        let version = version.unwrap_or_else(|| defaults::VERSION.to_string());

        if !is_valid_version(&version) {
            return Err(ImageTagError::InvalidVersion(version));
        }

        let platform: Platform = platform.parse()?;

        Ok(Self {
            repository,
            name,
            version,
            platform,
            builder_platform: platform.image_suffix(),
            custom_image,
        })
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Image variant resolved from the platform, e.g. `base`
    pub fn builder_platform(&self) -> ImageSuffix {
        self.builder_platform
    }

    pub fn custom_image(&self) -> Option<&str> {
        self.custom_image.as_deref()
    }

    /// `<version>-<suffix>`, or just the version for the generic image
    pub fn tag(&self) -> String {
        format!("{}-{}", self.version, self.builder_platform)
            .trim_end_matches('-')
            .to_string()
    }

    /// `<repository>/<name>`, or just the name when the repository is empty
    pub fn image(&self) -> String {
        format!("{}/{}", self.repository, self.name)
            .trim_start_matches('/')
            .to_string()
    }
}

impl fmt::Display for ImageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.custom_image() {
            Some(custom_image) if !custom_image.is_empty() => f.write_str(custom_image),
            _ => write!(f, "{}:{}-{}", self.image(), self.tag(), tag::REVISION),
        }
    }
}

impl Serialize for ImageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ImageTag", 9)?;
        state.serialize_field("repository", &self.repository)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("platform", &self.platform)?;
        state.serialize_field("builderPlatform", &self.builder_platform)?;
        state.serialize_field("customImage", &self.custom_image)?;
        state.serialize_field("image", &self.image())?;
        state.serialize_field("tag", &self.tag())?;
        state.serialize_field("reference", &self.to_string())?;
        state.end()
    }
}
