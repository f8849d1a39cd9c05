pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod image;
pub mod platform;
pub mod service;

pub use anyhow::Result;
pub use error::ImageTagError;
pub use image::{ImageProperties, ImageTag};
pub use platform::{ImageSuffix, Platform};
