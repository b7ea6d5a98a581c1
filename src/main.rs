//! Mission List - static mission page generator
//!
//! Loads ship mission parameters, derives time-to-advance figures and
//! renders `src/index.html`. Intended to run as a build step: any failure
//! exits non-zero before or instead of writing output.
//!
//! # Usage
//!
//! ```bash
//! # Render with bundled (or ./mission_list.toml) parameters
//! cargo run --release
//!
//! # Explicit config and output
//! ./mission-list --config params.toml --output public/index.html
//! ```
//!
//! # Environment Variables
//!
//! - `MISSION_LIST_CONFIG`: Path to the config TOML
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use mission_list::config::MissionListConfig;
use mission_list::{derive_ships, render};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "mission-list")]
#[command(about = "Generate the static mission list page")]
#[command(version)]
struct CliArgs {
    /// Path to the mission list config (TOML).
    /// Overrides MISSION_LIST_CONFIG and ./mission_list.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the output page path (default: config output.path, "src/index.html")
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also write the derived ship records as JSON
    #[arg(long, value_name = "PATH")]
    emit_json: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let (config, source) =
        MissionListConfig::load(args.config.as_deref()).context("Failed to load config")?;

    if args.print_config {
        print!("{}", config.to_toml().context("Failed to serialize config")?);
        return Ok(());
    }

    // Derive before touching the filesystem so bad data leaves no output behind
    let ships = derive_ships(&config.ships).context("Failed to derive ship records")?;
    info!(ships = ships.len(), %source, "Derived ship records");

    let html = render::render_index(&ships, &config.assets).context("Failed to render template")?;

    let output = args.output.as_ref().unwrap_or(&config.output.path);
    render::write_page(output, &html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if let Some(json_path) = &args.emit_json {
        render::write_json(json_path, &ships)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
    }

    Ok(())
}
