//! Chainsmith configuration CLI.
//!
//! Resolves toolchain configuration from the process environment (with
//! `.env` support) or a config file, and prints redacted views of it.
//! Everything this binary prints is safe to paste into a bug report:
//! signing keys never leave the library.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use chainsmith_config::{ConfigResolver, ConfigValidator, ResolutionMode, ToolchainConfig};

#[derive(Parser)]
#[command(name = "chainsmith")]
#[command(about = "Chainsmith contract toolchain configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve configuration and print a redacted report
    Show {
        /// Load from a config file instead of the environment
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Keep going when a network fails to resolve
        #[arg(long)]
        partial: bool,
    },
    /// Validate configuration; exits non-zero on failure
    Check {
        /// Load from a config file instead of the environment
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the profile handed to deployment tooling for one network
    Network {
        /// Network name (avalanche, sepolia, fuji)
        name: String,
    },
}

async fn load(config: Option<PathBuf>, mode: ResolutionMode) -> anyhow::Result<ToolchainConfig> {
    tracing::debug!(?mode, file = config.is_some(), "resolving toolchain configuration");
    let resolver = ConfigResolver::with_mode(mode);
    match config {
        Some(path) => resolver
            .load_from_file(&path)
            .await
            .with_context(|| format!("failed to load {}", path.display())),
        None => resolver
            .resolve_from_process_env()
            .context("failed to resolve configuration from the environment"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { config, partial } => {
            let mode = if partial {
                ResolutionMode::Partial
            } else {
                ResolutionMode::FailFast
            };
            let config = load(config, mode).await?;
            print!("{}", ConfigValidator::generate_report(&config));
        }
        Commands::Check { config } => {
            let config = load(config, ResolutionMode::FailFast).await?;
            ConfigValidator::validate_comprehensive(&config)
                .context("configuration failed validation")?;
            println!("configuration OK");
        }
        Commands::Network { name } => {
            let config = load(None, ResolutionMode::Partial).await?;
            let profile = config.network(&name)?;
            // Serialization skips the signing key; this output carries
            // no credential material.
            println!("{}", serde_json::to_string_pretty(profile)?);
        }
    }

    Ok(())
}
