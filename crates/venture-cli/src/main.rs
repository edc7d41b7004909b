use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use venture_core::config::VentureConfig;
use venture_core::extraction::Role;

mod commands;

#[derive(Parser)]
#[command(name = "venture")]
#[command(about = "Venture Desk CLI - contextual assistant for founders, investors and experts", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at info level instead of warn (RUST_LOG overrides both)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest profile fields from free text and print them as JSON
    Extract {
        #[arg(long, default_value_t = Role::Founder)]
        role: Role,
        /// Text to scan
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show which persona a screen (and optional tab) gets
    Route {
        #[arg(long)]
        screen: String,
        #[arg(long)]
        tab: Option<String>,
    },
    /// List the persona catalog
    Personas,
    /// Start an interactive assistant session
    Chat {
        #[arg(long, default_value_t = Role::Founder)]
        role: Role,
        /// Screen to open the session on
        #[arg(long)]
        screen: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<VentureConfig> {
    let path = match path {
        Some(path) => path,
        None => VentureConfig::default_path()?,
    };
    tracing::debug!("Using config path {}", path.display());
    VentureConfig::load(&path).with_context(|| format!("Failed to load {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Extract { role, text } => commands::extract::run(&config, role, &text.join(" "))?,
        Commands::Route { screen, tab } => commands::route::run(&config, &screen, tab.as_deref())?,
        Commands::Personas => commands::route::list(&config)?,
        Commands::Chat { role, screen } => commands::chat::run(&config, role, screen).await?,
    }

    Ok(())
}
