use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use soundgate_router::config::{load_config, AppConfig};
use soundgate_router::{History, HistoryMode, RouteEntry, Router};

#[derive(Parser)]
#[command(name = "soundgate-routes")]
#[command(about = "Inspect the sound-gate route table", long_about = None)]
struct Cli {
    /// TOML config file; built-in route table when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table and history mode
    Table,
    /// Show which view a path renders
    Resolve { path: String },
    /// Show the address-bar URL for a path
    Href { path: String },
}

#[derive(Serialize)]
struct TableOutput<'a> {
    history: HistoryMode,
    base: &'a str,
    routes: Vec<&'a RouteEntry>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    let router = Router::from_config(&config.router);

    let output = match cli.command {
        Commands::Table => serde_json::to_string_pretty(&TableOutput {
            history: router.mode(),
            base: router.history().base(),
            routes: router.table().entries().collect(),
        })?,
        Commands::Resolve { path } => {
            let resolution = router.resolve(&path);
            if !resolution.is_match() {
                eprintln!("No route matches {}", resolution.location);
            }
            serde_json::to_string_pretty(&resolution)?
        }
        Commands::Href { path } => router.resolve(&path).href,
    };

    println!("{}", output);
    Ok(())
}
