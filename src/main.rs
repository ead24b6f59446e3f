// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

mod cli;

use clap::Parser;
use cli::Command;
use color_eyre::eyre::Result;
use expiry_tracker::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use expiry_tracker::store::open_file_store;
use expiry_tracker::user_config::{self, UserConfig};
use expiry_tracker::utils::{resolve_data_dir, LOGS_FOLDER};
use expiry_tracker::view::ItemListView;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Expiry Tracker - keep an eye on what in the fridge expires next
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the item data (default: ~/.expiry-tracker)
    #[arg(long, env = "EXPIRY_TRACKER_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Enable JSON log format
    #[arg(long, env = "EXPIRY_TRACKER_LOG_JSON", default_value = "false", global = true)]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "EXPIRY_TRACKER_LOG_ROTATION", default_value = "daily", global = true)]
    log_rotation: String,

    /// Custom log directory (default: <data dir>/logs)
    #[arg(long, env = "EXPIRY_TRACKER_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args
        .log_dir
        .clone()
        .or_else(|| args.data_dir.as_ref().map(|d| d.join(LOGS_FOLDER)))
        .unwrap_or_else(|| LogConfig::default().log_dir);
    let log_file = log_dir.join(LOG_FILENAME);

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config (~/.expiry-tracker/config.toml); file is optional.
    let user_cfg = user_config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let data_dir = resolve_data_dir(
        args.data_dir
            .as_deref()
            .or(user_cfg.storage.data_dir.as_deref()),
    )?;
    debug!(data_dir = %data_dir.display(), key = %user_cfg.storage.key, "Opening item store");

    let store = Arc::new(open_file_store(data_dir, &user_cfg.storage.key));
    let mut view = ItemListView::open(store).await;

    args.command.run(&mut view, &user_cfg).await
}
