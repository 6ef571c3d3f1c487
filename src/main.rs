// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use logging::setup_logging;
use nhl_week_schedule::config::Config;
use nhl_week_schedule::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config file, then NHL_* env vars, then flags
    let mut config = Config::load().await?;
    config.apply_overrides(&args.config_overrides());

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        commands::handle_list_config_command(&config);
        return Ok(());
    }

    if args.save_config {
        return commands::handle_save_config_command(&config).await;
    }

    let query = args.schedule_query()?;
    commands::handle_report_command(config, &query).await
}
