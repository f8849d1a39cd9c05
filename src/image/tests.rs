#[cfg(test)]
mod tests {
    use super::super::*;

    fn linux() -> ImageProperties {
        ImageProperties::new("StandaloneLinux64")
    }

    #[test]
    fn test_defaults() {
        let image = ImageTag::new(linux()).unwrap();
        assert_eq!(image.repository(), "unityci");
        assert_eq!(image.name(), "editor");
        assert_eq!(image.version(), "2019.2.11f1");
        assert_eq!(image.platform(), Platform::StandaloneLinux64);
        assert_eq!(image.builder_platform(), ImageSuffix::Linux);
        assert!(image.custom_image().is_none());
    }

    #[test]
    fn test_render_linux() {
        let image = ImageTag::new(linux()).unwrap();
        assert_eq!(image.to_string(), "unityci/editor:2019.2.11f1-base-0");
    }

    #[test]
    fn test_render_generic_has_no_dangling_hyphen() {
        let image = ImageTag::new(ImageProperties::new("NoTarget")).unwrap();
        assert_eq!(image.tag(), "2019.2.11f1");
        assert_eq!(image.to_string(), "unityci/editor:2019.2.11f1-0");
    }

    #[test]
    fn test_custom_image_overrides_everything() {
        let image = ImageTag::new(linux().with_custom_image("my/custom:tag")).unwrap();
        assert_eq!(image.to_string(), "my/custom:tag");
        // Computed parts stay available
        assert_eq!(image.tag(), "2019.2.11f1-base");
    }

    #[test]
    fn test_empty_custom_image_is_ignored() {
        let image = ImageTag::new(linux().with_custom_image("")).unwrap();
        assert_eq!(image.custom_image(), Some(""));
        assert_eq!(image.to_string(), "unityci/editor:2019.2.11f1-base-0");
    }

    #[test]
    fn test_custom_image_does_not_skip_validation() {
        let result = ImageTag::new(
            ImageProperties::new("Dreamcast").with_custom_image("my/custom:tag"),
        );
        assert_eq!(
            result.unwrap_err(),
            ImageTagError::UnsupportedPlatform("Dreamcast".to_string())
        );
    }

    #[test]
    fn test_empty_repository_is_stripped() {
        let image = ImageTag::new(
            ImageProperties::new("Test")
                .with_repository("")
                .with_name("editor"),
        )
        .unwrap();
        assert_eq!(image.image(), "editor");
        assert_eq!(image.to_string(), "editor:2019.2.11f1-0");
    }

    #[test]
    fn test_webgl_tag() {
        let image = ImageTag::new(ImageProperties::new("WebGL").with_version("2021.1.2f1")).unwrap();
        assert_eq!(image.tag(), "2021.1.2f1-webgl");
    }

    #[test]
    fn test_custom_repository_and_name() {
        let image = ImageTag::new(
            ImageProperties::new("Android")
                .with_repository("ghcr.io/acme")
                .with_name("builder")
                .with_version("2020.3.1f1"),
        )
        .unwrap();
        assert_eq!(image.image(), "ghcr.io/acme/builder");
        assert_eq!(
            image.to_string(),
            "ghcr.io/acme/builder:2020.3.1f1-android-0"
        );
    }

    #[test]
    fn test_every_platform_resolves_its_suffix() {
        for platform in Platform::ALL {
            let image = ImageTag::new(ImageProperties::new(platform.as_str())).unwrap();
            assert_eq!(image.platform(), platform);
            assert_eq!(image.builder_platform(), platform.image_suffix());
        }
    }

    #[test]
    fn test_unknown_platforms_fail() {
        for platform in ["", "Linux", "standalonelinux64", "PS5", "Dreamcast"] {
            let err = ImageTag::new(ImageProperties::new(platform)).unwrap_err();
            assert_eq!(err, ImageTagError::UnsupportedPlatform(platform.to_string()));
        }
    }

    #[test]
    fn test_version_checked_before_platform() {
        let err = ImageTag::new(ImageProperties::new("Dreamcast").with_version("latest"))
            .unwrap_err();
        assert_eq!(err, ImageTagError::InvalidVersion("latest".to_string()));
        assert_eq!(err.to_string(), "Invalid version \"latest\".");
    }

    #[test]
    fn test_valid_versions() {
        for version in [
            "2019.2.11f1",
            "2021.1.2f1",
            "2020.3.0a1",
            "2018.4.abc",
            "2022.1.x_y",
            "3",
        ] {
            assert!(is_valid_version(version), "{version} should be valid");
            assert!(ImageTag::new(linux().with_version(version)).is_ok());
        }
    }

    #[test]
    fn test_invalid_versions() {
        for version in [
            "",
            "latest",
            "2019.2.1",
            "2019.12.1f1",
            "1999.2.11f1",
            "2019-2-11f1",
            "v2019.2.11f1",
        ] {
            assert!(!is_valid_version(version), "{version} should be invalid");
            assert_eq!(
                ImageTag::new(linux().with_version(version)).unwrap_err(),
                ImageTagError::InvalidVersion(version.to_string())
            );
        }
    }

    #[test]
    fn test_version_grammar_is_loose() {
        // Only the start of the first branch is anchored
        assert!(is_valid_version("2019.2.11f1-anything"));
        assert!(is_valid_version("2019.2.11f1234"));
        // The second branch accepts anything ending in "3"
        assert!(is_valid_version("xx3"));
        assert!(is_valid_version("2019.12.1f3"));
        // but not a "3" elsewhere in the string
        assert!(!is_valid_version("xx3xx"));
    }

    #[test]
    fn test_version_classes_are_ascii() {
        assert!(!is_valid_version("2019.2.１１f1"));
        assert!(!is_valid_version("20١٩.2.11f1"));
    }

    #[test]
    fn test_rendering_is_stable() {
        let image = ImageTag::new(linux()).unwrap();
        assert_eq!(image.to_string(), image.to_string());
        assert_eq!(image.tag(), image.tag());
        assert_eq!(image.image(), image.image());
    }

    #[test]
    fn test_serialize() {
        let image = ImageTag::new(ImageProperties::new("iOS")).unwrap();
        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["platform"], "iOS");
        assert_eq!(value["builderPlatform"], "ios");
        assert_eq!(value["image"], "unityci/editor");
        assert_eq!(value["tag"], "2019.2.11f1-ios");
        assert_eq!(value["reference"], "unityci/editor:2019.2.11f1-ios-0");
        assert!(value["customImage"].is_null());
    }

    #[test]
    fn test_properties_from_toml() {
        let properties: ImageProperties = toml::from_str(
            r#"
platform = "StandaloneOSX"
version = "2020.1.5f1"
customImage = "registry.local/editor:mac"
"#,
        )
        .unwrap();
        assert_eq!(properties.repository, None);
        assert_eq!(properties.version.as_deref(), Some("2020.1.5f1"));

        let image = ImageTag::new(properties).unwrap();
        assert_eq!(image.tag(), "2020.1.5f1-mac-mono");
        assert_eq!(image.to_string(), "registry.local/editor:mac");
    }
}
