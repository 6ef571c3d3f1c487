//! Groups schedule records by week and team

pub mod filter;
pub mod index;
pub mod week;

pub use filter::GameFilter;
pub use index::{Matchup, ScheduleIndex, Venue, WeekSchedule};
pub use week::{game_date, parse_game_day, week_of_game, week_start};

use crate::data_fetcher::models::GameRecord;
use crate::error::AppError;
use tracing::{debug, info, instrument};

/// Builds the week → team → opponents index from game records.
///
/// Records are processed in input order, which fixes both the team order
/// inside a week and the order of each opponent list. Any record whose day
/// does not parse fails the whole build; nothing is skipped.
pub fn build_schedule_index(games: &[GameRecord]) -> Result<ScheduleIndex, AppError> {
    build_filtered_index(games, &GameFilter::default())
}

/// Like [`build_schedule_index`], keeping only games that pass `filter`.
///
/// Every record's day is parsed before the filter looks at it, so a bad
/// record fails the build even when the filter would have dropped it.
#[instrument(skip_all, fields(games = games.len()))]
pub fn build_filtered_index(
    games: &[GameRecord],
    filter: &GameFilter,
) -> Result<ScheduleIndex, AppError> {
    let mut index = ScheduleIndex::new();
    let mut kept = 0;

    for game in games {
        let date = game_date(game)?;
        if !filter.matches(game, date) {
            continue;
        }
        debug!("{} on {}", game.describe(), date);
        index.insert_game(date, &game.home_team, &game.away_team)?;
        kept += 1;
    }

    if !filter.is_empty() {
        info!("Filter kept {kept} of {} games", games.len());
    }
    info!("Grouped {kept} games into {} weeks", index.week_count());
    Ok(index)
}
