use anyhow::{Context, Result};
use clap::Parser;
use imagetag::{
    cli::{Cli, Commands, OutputFormat},
    config::Config,
    service::{ResolveRequest, ResolveService},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            platform,
            version,
            repository,
            name,
            custom_image,
            output,
        } => {
            let config = Config::load()?;
            let request = ResolveRequest {
                platform,
                version,
                repository,
                name,
                custom_image,
            };

            let result = ResolveService::resolve(request, &config)?;

            // Print only the reference to stdout
            match output {
                OutputFormat::Text => println!("{}", result.image),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&result.image)
                        .context("Failed to serialize image")?;
                    println!("{}", json);
                }
            }
        }
        Commands::Platforms => {
            for (platform, suffix) in ResolveService::platforms() {
                println!("{}\t{}", platform, suffix);
            }
        }
        Commands::Version => {
            println!("imagetag {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
