//! The fetch → aggregate → report run

use std::io::Write;
use tracing::{info, instrument};

use crate::aggregator::{GameFilter, ScheduleIndex, build_filtered_index};
use crate::config::Config;
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::data_fetcher::fetch_season_schedule;
use crate::error::AppError;
use crate::reporter::{ReportOptions, write_report_with};

/// What part of the schedule to report, and how.
///
/// The default reports every game in the plain layout. The raw JSON dump is
/// never filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub filter: GameFilter,
    pub report: ReportOptions,
}

impl ScheduleQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        self.filter.validate()
    }
}

/// Runs one full cycle and writes the plain report to `out`.
///
/// Stages run strictly in sequence and the first failure ends the run. The
/// raw JSON file is written during the fetch stage, so it exists even when
/// aggregation later fails.
pub async fn run_pipeline<W: Write>(
    config: &Config,
    out: &mut W,
) -> Result<ScheduleIndex, AppError> {
    run_query(config, &ScheduleQuery::default(), out).await
}

/// Runs one full cycle, filtering and laying out the report per `query`.
#[instrument(skip_all, fields(season = config.season))]
pub async fn run_query<W: Write>(
    config: &Config,
    query: &ScheduleQuery,
    out: &mut W,
) -> Result<ScheduleIndex, AppError> {
    query.validate()?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let schedule = fetch_season_schedule(&client, config).await?;
    let index = build_filtered_index(&schedule.games, &query.filter)?;
    write_report_with(out, &index, &query.report)?;

    info!(
        "Reported {} weeks for season {}",
        index.week_count(),
        config.season
    );
    Ok(index)
}
