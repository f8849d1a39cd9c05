//! Build target identifiers and the image variant each one runs on.
//!
//! Identifiers follow the editor's `BuildTarget` names
//! (<https://docs.unity3d.com/ScriptReference/BuildTarget.html>).

use crate::error::ImageTagError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// A build target the pipeline can request an image for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Platform {
    StandaloneOsx,
    StandaloneWindows,
    #[default]
    StandaloneWindows64,
    StandaloneLinux64,
    Ios,
    Android,
    WebGl,
    WsaPlayer,
    Ps4,
    XboxOne,
    TvOs,
    Switch,
    Lumin,
    Bjm,
    Stadia,
    Facebook,
    NoTarget,
    /// Only used by test pipelines
    Test,
}

impl Platform {
    pub const ALL: [Platform; 18] = [
        Platform::StandaloneOsx,
        Platform::StandaloneWindows,
        Platform::StandaloneWindows64,
        Platform::StandaloneLinux64,
        Platform::Ios,
        Platform::Android,
        Platform::WebGl,
        Platform::WsaPlayer,
        Platform::Ps4,
        Platform::XboxOne,
        Platform::TvOs,
        Platform::Switch,
        Platform::Lumin,
        Platform::Bjm,
        Platform::Stadia,
        Platform::Facebook,
        Platform::NoTarget,
        Platform::Test,
    ];

    /// The identifier as the editor spells it, e.g. `StandaloneLinux64`
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::StandaloneOsx => "StandaloneOSX",
            Platform::StandaloneWindows => "StandaloneWindows",
            Platform::StandaloneWindows64 => "StandaloneWindows64",
            Platform::StandaloneLinux64 => "StandaloneLinux64",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::WebGl => "WebGL",
            Platform::WsaPlayer => "WSAPlayer",
            Platform::Ps4 => "PS4",
            Platform::XboxOne => "XboxOne",
            Platform::TvOs => "tvOS",
            Platform::Switch => "Switch",
            Platform::Lumin => "Lumin",
            Platform::Bjm => "BJM",
            Platform::Stadia => "Stadia",
            Platform::Facebook => "Facebook",
            Platform::NoTarget => "NoTarget",
            Platform::Test => "Test",
        }
    }

    /// The image variant that builds this target.
    ///
    /// Consoles and the other targets without a dedicated image share the
    /// windows image until one exists for them.
    pub fn image_suffix(&self) -> ImageSuffix {
        match self {
            Platform::StandaloneOsx => ImageSuffix::Mac,
            Platform::StandaloneWindows
            | Platform::StandaloneWindows64
            | Platform::WsaPlayer
            | Platform::Ps4
            | Platform::XboxOne
            | Platform::TvOs
            | Platform::Switch
            | Platform::Lumin
            | Platform::Bjm
            | Platform::Stadia => ImageSuffix::Windows,
            Platform::StandaloneLinux64 => ImageSuffix::Linux,
            Platform::Ios => ImageSuffix::Ios,
            Platform::Android => ImageSuffix::Android,
            Platform::WebGl => ImageSuffix::WebGl,
            Platform::Facebook => ImageSuffix::Facebook,
            Platform::NoTarget | Platform::Test => ImageSuffix::Generic,
        }
    }

    /// Whether the target is officially supported rather than tolerated on a
    /// placeholder image
    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Lumin | Platform::Bjm | Platform::Stadia)
    }

    pub fn is_windows(&self) -> bool {
        matches!(
            self,
            Platform::StandaloneWindows | Platform::StandaloneWindows64
        )
    }

    pub fn is_android(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ImageTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| ImageTagError::UnsupportedPlatform(s.to_string()))
    }
}

impl TryFrom<String> for Platform {
    type Error = ImageTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Platform> for &'static str {
    fn from(platform: Platform) -> Self {
        platform.as_str()
    }
}

/// Image variant token appended to the editor version in a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ImageSuffix {
    Generic,
    WebGl,
    Mac,
    Windows,
    Linux,
    Android,
    Ios,
    Facebook,
}

impl ImageSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSuffix::Generic => "",
            ImageSuffix::WebGl => "webgl",
            ImageSuffix::Mac => "mac-mono",
            ImageSuffix::Windows => "windows-mono",
            ImageSuffix::Linux => "base",
            ImageSuffix::Android => "android",
            ImageSuffix::Ios => "ios",
            ImageSuffix::Facebook => "facebook",
        }
    }
}

impl fmt::Display for ImageSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ImageSuffix> for &'static str {
    fn from(suffix: ImageSuffix) -> Self {
        suffix.as_str()
    }
}
