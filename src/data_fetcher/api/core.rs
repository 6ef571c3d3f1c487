use crate::config::Config;
use crate::data_fetcher::models::GameRecord;
use crate::data_fetcher::raw_output::write_raw_json;
use crate::error::AppError;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch_json;
use super::urls::{build_schedule_url, redact_api_key};

/// Result of a schedule fetch: the payload exactly as parsed, and the game
/// records decoded from that same value.
#[derive(Debug, Clone)]
pub struct FetchedSchedule {
    pub raw: Value,
    pub games: Vec<GameRecord>,
}

/// Fetches the configured season's schedule, dumps the raw payload to
/// `config.raw_output_path`, and decodes the game records.
///
/// The raw file is written before decoding so a payload with an unexpected
/// shape is still on disk for inspection when the run fails. The same holds
/// for a JSON error body sent with a non-2xx status: it replaces the previous
/// dump, then the status error is returned.
#[instrument(skip(client, config), fields(season = config.season))]
pub async fn fetch_season_schedule(
    client: &Client,
    config: &Config,
) -> Result<FetchedSchedule, AppError> {
    let api_key = config.require_api_key()?;
    let url = build_schedule_url(&config.api_domain, config.season, api_key);

    let response = fetch_json(client, &url).await?;
    write_raw_json(&config.raw_output_path, &response.body).await?;
    if let Some(status_error) = response.status_error {
        warn!(
            "Wrote error response to {} before failing",
            config.raw_output_path
        );
        return Err(status_error);
    }

    let raw = response.body;

    let games = decode_game_records(&raw, &redact_api_key(&url))?;
    if games.is_empty() {
        warn!("Schedule for season {} contains no games", config.season);
    } else {
        info!(
            "Fetched {} games for season {}",
            games.len(),
            config.season
        );
    }

    Ok(FetchedSchedule { raw, games })
}

/// Decodes the schedule payload into game records.
///
/// The payload must be a JSON array; every element must carry `Day`,
/// `HomeTeam` and `AwayTeam` strings.
pub fn decode_game_records(raw: &Value, url: &str) -> Result<Vec<GameRecord>, AppError> {
    if !raw.is_array() {
        return Err(AppError::api_unexpected_structure(
            "expected a JSON array of games",
            url,
        ));
    }

    Vec::<GameRecord>::deserialize(raw)
        .map_err(|e| AppError::api_unexpected_structure(e.to_string(), url))
}
