use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod config;
mod error;
mod fetcher;
mod models;
mod paginator;
mod pipeline;
mod resolver;
mod rules;
mod storage;
mod traits;
mod utils;

#[cfg(test)]
mod test_support;

use config::Config;
use pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Download every painting of an artist from WikiArt")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "curator.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Look up the catalogue identity of an artist
    Resolve {
        /// Artist name, or a part of it specific enough to be unique
        artist: String,
    },
    /// Download the paintings of one artist
    Fetch {
        /// Artist name, or a part of it specific enough to be unique
        artist: String,
        /// Parent directory (defaults to storage.base_path)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Download a random sample of at most this many paintings
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Download the paintings of every active artist in the configuration
    Build,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Init => {
            init_config(&cli.config)?;
        }
        Commands::Resolve { artist } => {
            let config = load_config(&cli.config)?;
            let pipeline = Pipeline::new(&config.catalog)?;
            let identity = pipeline.resolve(&artist).await?;
            println!("{:<30} {}", "Display name", identity.display_name);
            println!("{:<30} {}", "Slug", identity.slug);
        }
        Commands::Fetch { artist, out, limit } => {
            let config = load_config(&cli.config)?;
            let parent_dir = out.unwrap_or_else(|| PathBuf::from(&config.storage.base_path));
            let pipeline = Pipeline::new(&config.catalog)?;
            let report = pipeline.run(&artist, &parent_dir, limit).await?;
            println!("✅ {}: {}", artist, report);
        }
        Commands::Build => {
            let config = load_config(&cli.config)?;
            run_build(&config).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("curator={}", level))
        .with_target(false)
        .init();

    Ok(())
}

fn init_config(path: &str) -> Result<()> {
    if Path::new(path).exists() {
        warn!("Configuration file {} already exists, leaving it untouched", path);
        return Ok(());
    }

    Config::default().save(path)?;
    info!("Wrote default configuration to {}", path);
    Ok(())
}

fn load_config(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        Ok(Config::load(path)?)
    } else {
        info!("No configuration file at {}, using defaults", path);
        Ok(Config::default())
    }
}

async fn run_build(config: &Config) -> Result<()> {
    let parent_dir = PathBuf::from(&config.storage.base_path);
    let mut failed = Vec::new();

    println!("{:<30} {:<12} {:<12}", "Artist", "Downloaded", "Present");
    println!("{}", "-".repeat(54));

    for artist in config.active_artists() {
        // Fresh client per artist so each run owns its connection pool
        let pipeline = Pipeline::new(&config.catalog)?;

        match pipeline.run(&artist.name, &parent_dir, artist.limit).await {
            Ok(report) => {
                println!("{:<30} {:<12} {:<12}", artist.name, report.downloaded, report.skipped);
            }
            Err(e) => {
                warn!("❌ Failed to download {}: {}", artist.name, e);
                println!("{:<30} {:<12} {:<12}", artist.name, "ERROR", e.to_string());
                failed.push(artist.name.clone());
            }
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("{} artist(s) failed: {}", failed.len(), failed.join(", "));
    }

    info!("🎉 Dataset build completed!");
    Ok(())
}
