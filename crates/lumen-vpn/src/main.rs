//! Lumen VPN: Desktop Client Shell
//!
//! Entry point for the client. Initializes the global allocator, sets up
//! logging, loads the alert configuration, and runs the presentation layer.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod app;
mod bridge;

// Use mimalloc as the global allocator for reduced memory fragmentation
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .compact()
        .init();

    info!("Lumen VPN starting...");
    info!("Using mimalloc allocator");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    app::run(config_path)?;

    info!("Lumen VPN shutting down");
    Ok(())
}
