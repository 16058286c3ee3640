//! Pigbank CLI
//!
//! Command-line interface for the Pigbank app shell:
//! - List the route table
//! - Resolve a location to a view
//! - Replay navigation against a headless page
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pigbank::app::{bootstrap, HeadlessHost};
use pigbank::config::{generate_default_config, Config, LoggingConfig};
use pigbank::router::{app_routes, History, Router};

#[derive(Parser)]
#[command(name = "pigbank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Route table and bootstrap of the Pigbank expense tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all routes in declaration order
    Routes,

    /// Resolve a document location to its view
    Resolve {
        /// Location, e.g. /login or /base/login?next=/home
        location: String,
    },

    /// Mount the app on a headless page and replay navigation
    Navigate {
        /// Locations to visit, in order
        locations: Vec<String>,
        /// Initial document location (default: the base path)
        #[arg(long)]
        start: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    let json = match cli.format.as_str() {
        "table" => false,
        "json" => true,
        other => bail!("Unknown output format: {other}"),
    };

    match cli.command {
        Commands::Routes => {
            let table = app_routes()?;
            if json {
                let routes: Vec<_> = table.iter().collect();
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                println!("{:<22} {:<14} {}", "PATH", "NAME", "VIEW");
                for route in table.iter() {
                    println!(
                        "{:<22} {:<14} {}",
                        route.path,
                        route.name.as_deref().unwrap_or("-"),
                        route.view
                    );
                }
            }
        }

        Commands::Resolve { location } => {
            let router = Router::new(app_routes()?, History::new(&config.router.base));
            let matched = router.resolve(&location)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&matched)?);
            } else {
                println!("{} -> {} ({})", location, matched.view, matched.path);
            }
        }

        Commands::Navigate { locations, start } => {
            let history = History::new(&config.router.base);
            let start = start.unwrap_or_else(|| history.href("/"));
            let mount_id = config.app.mount.trim_start_matches('#');

            let host = HeadlessHost::new(start.as_str(), &[mount_id]);
            let mut app = bootstrap(&config, host).context("Application failed to start")?;

            if !json {
                print_step(&start, app.current().map(|m| m.view.as_str()));
            }
            for location in &locations {
                let view = app.navigate(location).ok().map(|m| m.view);
                if !json {
                    print_step(location, view.map(|v| v.as_str()));
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(app.host().events())?);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}

fn print_step(location: &str, view: Option<&str>) {
    println!("{:<28} {}", location, view.unwrap_or("(no match)"));
}

/// Install the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("pigbank={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
