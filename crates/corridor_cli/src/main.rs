//! Corridor CLI - demo application for context resolution.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use corridor_core::{Config, Profile, CONFIG_FILE};
use std::path::PathBuf;

mod app;
mod commands;

#[derive(Parser)]
#[command(name = "corridor")]
#[command(about = "Resolve dependencies from swappable contexts", long_about = None)]
#[command(version)]
struct Cli {
    /// Use the mock realization (overrides --profile and config)
    #[arg(long, global = true)]
    mock: bool,

    /// Context realization to bind root dependents to
    #[arg(long, global = true)]
    profile: Option<Profile>,

    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the time seen by a nested dependent
    Now,
    /// Check that a nested dependent shares its parent's context
    Nested,
    /// Rebind the process-wide context of a singleton dependent
    Static {
        /// Rebind by resolving the singleton through a parent instead of directly
        #[arg(long)]
        via_parent: bool,
    },
    /// Run the endpoint pipeline through the API client
    Api,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    // Respects RUST_LOG, falling back to the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let profile = if cli.mock {
        Profile::Mock
    } else {
        cli.profile.unwrap_or(config.profile)
    };
    tracing::debug!(%profile, "selected profile");

    match cli.command {
        Commands::Now => commands::now::run(profile, &cli.format),
        Commands::Nested => commands::nested::run(profile, &cli.format),
        Commands::Static { via_parent } => commands::singleton::run(profile, via_parent, &cli.format),
        Commands::Api => commands::api::run(profile, &cli.format),
    }
}
