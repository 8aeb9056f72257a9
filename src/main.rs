use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use watchlist::core::catalog::{MovieCatalog, StaticCatalog};
use watchlist::core::config::{self, CliOverrides, WatchlistConfig};
use watchlist::core::state::App;

#[derive(Parser)]
#[command(name = "watchlist", about = "Browse your movie watchlist in the terminal")]
struct Args {
    /// Route to open at startup, e.g. `detailScreen/tt0816692`
    #[arg(short, long)]
    route: Option<String>,

    /// JSON movie catalog to use instead of the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Open and close detail panels instantly
    #[arg(long)]
    no_animations: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("warning: {e}, using defaults");
            (WatchlistConfig::default(), Some(e))
        }
    };

    let overrides = CliOverrides {
        route: args.route,
        catalog: args.catalog,
        log_level: args.log_level,
        no_animations: args.no_animations,
    };

    // Initialize file logger - writes to watchlist.log in current directory
    let level = LevelFilter::from_str(&config::log_level(&file_config, &overrides))
        .unwrap_or(LevelFilter::Debug);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("watchlist.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {e}");
    }

    let resolved = config::resolve(&file_config, &overrides);

    let catalog: Arc<dyn MovieCatalog> = match &resolved.catalog_file {
        Some(path) => match StaticCatalog::load(path) {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                log::error!("Failed to load catalog {}: {e}", path.display());
                return Err(e.into());
            }
        },
        None => Arc::new(StaticCatalog::builtin()),
    };

    let app = App::from_config(catalog, &resolved);
    log::info!("Watchlist starting at {}", app.current_route());
    watchlist::tui::run(app, &resolved)?;
    Ok(())
}
