// src/main.rs
mod api;
mod cli;
mod commands;
mod config;
mod confirm;
mod constants;
mod controllers;
mod csv_template;
mod display;
mod error;
mod logging;
mod models;
mod season;

use clap::Parser;
use cli::Args;
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration operations run without touching the API
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if cli::is_config_operation(&args) {
        commands::handle_config_update(&args).await?;
        return Ok(());
    }

    let Some(command) = args.command else {
        return Err(AppError::missing_input(
            "no command given; run with --help to see available commands",
        ));
    };

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let ok = commands::handle_command(command, &config).await?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
