//! Main entry point for the Front Desk console
//!
//! Loads configuration, seeds the room inventory and hands it to an
//! interactive console on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use front_desk::config::{AppConfig, ConfigOverrides};
use front_desk::console::{Console, ConsoleSettings, SessionEnd};
use front_desk::inventory::RoomInventory;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

/// Front Desk - hotel room inventory and booking console
#[derive(Parser)]
#[command(
    name = "front-desk",
    version,
    about = "An interactive console for hotel room inventory and bookings",
    long_about = "Front Desk keeps an in-memory list of hotel rooms and lets an operator \
                 view available rooms, book a room by number or by type, cancel bookings \
                 and list every room. Nothing is persisted between runs."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Hotel name override
    #[arg(long, value_name = "NAME", help = "Override the hotel name in the banner")]
    hotel_name: Option<String>,

    /// Currency symbol override
    #[arg(long, value_name = "SYMBOL", help = "Override the currency symbol for prices")]
    currency: Option<String>,

    /// Dry run mode (print the seeded inventory and exit)
    #[arg(
        long,
        help = "Validate configuration, print the seeded inventory as JSON and exit"
    )]
    dry_run: bool,
}

/// Initialize structured logging on stderr with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    config.apply_overrides(ConfigOverrides {
        log_level: args.log_level.clone(),
        debug: args.debug,
        hotel_name: args.hotel_name.clone(),
        currency: args.currency.clone(),
    })?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Some(config_path) = &args.config {
        info!("Loaded configuration from: {}", config_path.display());
    }
    info!(
        service = config.service.name.as_str(),
        hotel = config.hotel.name.as_str(),
        "Starting front desk"
    );

    let mut inventory = match config
        .room_provider()
        .and_then(|provider| RoomInventory::from_provider(provider.as_ref()))
    {
        Ok(inventory) => inventory,
        Err(e) => {
            error!("Failed to seed room inventory: {}", e);
            eprintln!("Failed to seed room inventory: {}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        info!("Dry run completed - exiting without starting the console");
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let settings = ConsoleSettings::from(&config.hotel);
    let end = Console::new(&mut inventory, stdin.lock(), stdout.lock(), settings).run()?;

    if end == SessionEnd::InputClosed {
        info!("Session ended without an explicit exit");
    }
    info!("Final inventory: {}", inventory.summary());
    Ok(())
}
