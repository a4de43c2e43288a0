//! telemetry-lab - Synthetic CPU gaming-telemetry dashboard backend
//!
//! Serves the JSON API the browser dashboard charts from, and exposes the
//! same engine operations as one-shot CLI commands for quick inspection.
//! All telemetry is synthesized deterministically; there is no
//! measurement backend.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use telemetry_lab::catalog::BUILTIN;
use telemetry_lab::config::Config;
use telemetry_lab::metrics::MetricsEngine;
use telemetry_lab::server;

/// telemetry-lab - Synthetic CPU gaming-telemetry engine
#[derive(Parser)]
#[command(name = "telemetry-lab")]
#[command(author = "ForgeMyPC")]
#[command(version)]
#[command(about = "Deterministic synthetic CPU gaming-telemetry engine with a dashboard API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard API server
    Serve {
        /// Port to run the server on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the metrics snapshot for one (game, SKU, build) key
    Snapshot {
        /// Game id from the catalog
        #[arg(long)]
        game_id: u32,

        /// SKU id (e.g. "arl-s")
        #[arg(long)]
        sku: String,

        /// Build label (e.g. "2025.48")
        #[arg(long)]
        build: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the performance index for a (SKU, build) pair
    Index {
        /// SKU id
        #[arg(long)]
        sku: String,

        /// Build label
        #[arg(long)]
        build: String,
    },

    /// Print the build-over-build trend for one (game, SKU) pair
    Trend {
        /// Game id from the catalog
        #[arg(long)]
        game_id: u32,

        /// SKU id
        #[arg(long)]
        sku: String,

        /// Build label the trend ends at
        #[arg(long)]
        build: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the reference catalogs (programs, SKUs, games, builds)
    Catalog,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::init()?;
    let engine = MetricsEngine::default();

    match cli.command {
        None | Some(Commands::Serve { port: None }) => {
            server::start_server(&config.server.bind, config.server.port).await?;
        }
        Some(Commands::Serve { port: Some(port) }) => {
            server::start_server(&config.server.bind, port).await?;
        }
        Some(Commands::Snapshot {
            game_id,
            sku,
            build,
            format,
        }) => {
            let snapshot = engine.game_metrics(game_id, &sku, &build);
            match format {
                OutputFormat::Text => print!("{snapshot}"),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            }
        }
        Some(Commands::Index { sku, build }) => {
            let index = engine.performance_index(&sku, &build);
            println!("{sku} @ {build}: {index:.1} avg FPS across {} games", BUILTIN.games.len());
        }
        Some(Commands::Trend {
            game_id,
            sku,
            build,
            format,
        }) => {
            let trend = engine.build_trend(game_id, &sku, &build);
            match format {
                OutputFormat::Text => {
                    for point in &trend.points {
                        println!("{:>10}  {:>7.1} FPS", point.build, point.avg_fps);
                    }
                    println!(
                        "delta: {:+.1} FPS ({:+.2}%)",
                        trend.delta, trend.delta_percent
                    );
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trend)?),
            }
        }
        Some(Commands::Catalog) => {
            for program in BUILTIN.programs {
                println!("{} ({})", program.name, program.id);
                for sku in program.skus {
                    println!(
                        "  {:<8} {:<20} {:>8}  {}",
                        sku.id, sku.name, sku.topology, sku.tdp
                    );
                }
            }
            println!();
            for game in BUILTIN.games {
                println!("{:>3}  {:<34} {}", game.id, game.name, game.genre);
            }
            println!();
            println!("builds (newest first): {}", BUILTIN.builds.join(", "));
        }
    }

    Ok(())
}
