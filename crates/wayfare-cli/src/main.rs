//! Wayfare CLI Application
//!
//! Command-line interface for the wayfare trip planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfare_core::LocalServerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let server = LocalServerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize the trip planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Wayfare started");

    let cli = Cli::new(server, renderer);
    match command {
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        Some(Link { command }) => cli.handle_link_command(command).await,
        Some(Guest { command }) => cli.handle_guest_command(command).await,
        None => cli.trip_show().await,
    }
}
