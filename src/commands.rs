use nhl_week_schedule::config::Config;
use nhl_week_schedule::error::AppError;
use nhl_week_schedule::{ScheduleQuery, run_query};
use std::io::stdout;
use tracing::info;

/// Handles the --list-config command.
///
/// Shows the configuration this run would use, after env and flag overrides.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Handles the --save-config command.
///
/// Validates the effective configuration and writes it to the config file
/// so later runs need no flags.
pub async fn handle_save_config_command(config: &Config) -> Result<(), AppError> {
    config.validate()?;
    config.save().await?;
    println!("Config saved to {}", Config::get_config_path());
    Ok(())
}

/// Runs the default command: fetch, aggregate and print the weekly report.
pub async fn handle_report_command(
    mut config: Config,
    query: &ScheduleQuery,
) -> Result<(), AppError> {
    config.ensure_api_key().await?;
    config.validate()?;

    info!(
        "Fetching season {} schedule, raw output to {}",
        config.season, config.raw_output_path
    );

    let mut out = stdout();
    let index = run_query(&config, query, &mut out).await?;

    if index.is_empty() {
        if query.filter.is_empty() {
            info!("No games to report for season {}", config.season);
        } else {
            info!("No games match the filter for season {}", config.season);
        }
    }
    Ok(())
}
