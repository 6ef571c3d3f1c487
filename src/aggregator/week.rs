//! Game day parsing and week bucketing

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::constants::GAME_DAY_FORMAT;
use crate::data_fetcher::models::GameRecord;
use crate::error::AppError;

/// Parses a `Day` value such as `2025-10-07T19:00:00`.
///
/// Only the exact `%Y-%m-%dT%H:%M:%S` layout is accepted. Offsets,
/// fractional seconds and date-only strings are rejected.
pub fn parse_game_day(value: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(value, GAME_DAY_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!(
            "'{value}' does not match {GAME_DAY_FORMAT}: {e}"
        ))
    })
}

/// Monday of the week containing `date`.
///
/// Fails only for dates in the first week chrono can represent, where the
/// Monday itself is out of range.
pub fn week_start(date: NaiveDate) -> Result<NaiveDate, AppError> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).ok_or_else(|| {
        AppError::datetime_parse_error(format!("no Monday on or before {date}"))
    })
}

/// Calendar day of a game record. Errors name the game.
pub fn game_date(game: &GameRecord) -> Result<NaiveDate, AppError> {
    let day = parse_game_day(&game.day).map_err(|e| match e {
        AppError::DateTimeParse(msg) => {
            AppError::datetime_parse_error(format!("{}: {msg}", game.describe()))
        }
        other => other,
    })?;
    Ok(day.date())
}

/// Week bucket of a game record.
pub fn week_of_game(game: &GameRecord) -> Result<NaiveDate, AppError> {
    week_start(game_date(game)?)
}
