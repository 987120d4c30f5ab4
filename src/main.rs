use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use voyage::core::config::{self, CliOverrides, Screen, Theme, VoyageConfig};

#[derive(Parser)]
#[command(name = "voyage", about = "Browse and book Gambian destinations")]
struct Args {
    /// Screen to open on
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// Colour scheme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to voyage.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("voyage.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        eprintln!("voyage: {e}; using defaults");
        VoyageConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            screen: args.screen,
            theme: args.theme,
        },
    );

    log::info!(
        "Voyage starting on {:?} screen with {} destinations",
        resolved.screen,
        resolved.catalog.len()
    );

    voyage::tui::run(resolved)
}
