//! Binary entrypoint for the photo carousel console.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use photo_carousel::Carousel;
use photo_carousel::config::Configuration;
use photo_carousel::console::Console;
use photo_carousel::scan::scan_pages;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "photo-carousel", about = "Browse a photo library as an endless carousel")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the first page shown
    #[arg(long, value_name = "INDEX")]
    start_index: Option<usize>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("photo_carousel={level}").parse()?);
    // stdout belongs to the console
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;

    let pages = scan_pages(&cfg.photo_library_path, &cfg.scan_options())
        .with_context(|| format!("scanning {}", cfg.photo_library_path.display()))?;
    info!(count = pages.len(), "scanned pages");

    let mut carousel = Carousel::new(pages)?;
    carousel.load_page_at(cli.start_index.unwrap_or(cfg.start_index));
    info!(mode = ?carousel.mode(), "carousel ready");

    let mut console = Console::new(carousel, cfg.hide_navigation_buttons);
    console.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
