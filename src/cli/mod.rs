use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "imagetag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the editor image for a build
    Resolve {
        /// Build target (e.g., StandaloneLinux64, WebGL, iOS)
        #[arg(long, env = "IMAGETAG_PLATFORM")]
        platform: Option<String>,

        /// Editor version (e.g., 2019.2.11f1)
        #[arg(long = "editor-version", env = "IMAGETAG_VERSION")]
        version: Option<String>,

        /// Repository the image is published under (e.g., unityci)
        #[arg(long, env = "IMAGETAG_REPOSITORY")]
        repository: Option<String>,

        /// Image name within the repository (e.g., editor)
        #[arg(long, env = "IMAGETAG_NAME")]
        name: Option<String>,

        /// Full image reference to use instead of the resolved one
        #[arg(long, env = "IMAGETAG_CUSTOM_IMAGE")]
        custom_image: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List build targets and the image variant each resolves to
    Platforms,

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The image reference only
    Text,
    /// The resolved image as JSON
    Json,
}
