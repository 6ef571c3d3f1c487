//! Narrowing the schedule to one team, a date range, or unplayed games

use chrono::{Days, NaiveDate};

use super::week::week_start;
use crate::data_fetcher::models::GameRecord;
use crate::error::AppError;

/// Which games make it into the index.
///
/// The default keeps everything. Date bounds are inclusive and compare the
/// game's calendar day. Team names match either side, ignoring ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub team: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Keep only games whose `IsClosed` is not set.
    pub upcoming_only: bool,
}

impl GameFilter {
    /// Limits the filter to the Monday-to-Sunday week containing `date`.
    pub fn within_week_of(mut self, date: NaiveDate) -> Result<Self, AppError> {
        let monday = week_start(date)?;
        let sunday = monday.checked_add_days(Days::new(6)).ok_or_else(|| {
            AppError::datetime_parse_error(format!("week of {date} runs past the last date"))
        })?;
        self.from = Some(monday);
        self.to = Some(sunday);
        Ok(self)
    }

    /// True when the filter keeps every game.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(AppError::config_error(format!(
                "Date range starts after it ends: {from} > {to}"
            )));
        }
        if self.team.as_deref().is_some_and(|team| team.trim().is_empty()) {
            return Err(AppError::config_error("Team filter cannot be empty"));
        }
        Ok(())
    }

    /// Whether `game`, played on `date`, passes the filter.
    pub fn matches(&self, game: &GameRecord, date: NaiveDate) -> bool {
        if self.from.is_some_and(|from| date < from) || self.to.is_some_and(|to| date > to) {
            return false;
        }
        if self.upcoming_only && !game.is_upcoming() {
            return false;
        }
        self.team.as_deref().is_none_or(|team| game.involves(team))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn game() -> GameRecord {
        GameRecord::new("2025-10-09T19:00:00", "BOS", "TOR")
    }

    #[test]
    fn test_default_keeps_everything() {
        let filter = GameFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&game(), date(2025, 10, 9)));
    }

    #[test]
    fn test_team_matches_either_side() {
        let filter = |team: &str| GameFilter {
            team: Some(team.to_string()),
            ..GameFilter::default()
        };
        assert!(filter("BOS").matches(&game(), date(2025, 10, 9)));
        assert!(filter("tor").matches(&game(), date(2025, 10, 9)));
        assert!(!filter("NYR").matches(&game(), date(2025, 10, 9)));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter = GameFilter {
            from: Some(date(2025, 10, 9)),
            to: Some(date(2025, 10, 12)),
            ..GameFilter::default()
        };
        assert!(!filter.matches(&game(), date(2025, 10, 8)));
        assert!(filter.matches(&game(), date(2025, 10, 9)));
        assert!(filter.matches(&game(), date(2025, 10, 12)));
        assert!(!filter.matches(&game(), date(2025, 10, 13)));
    }

    #[test]
    fn test_upcoming_only_drops_closed_games() {
        let filter = GameFilter {
            upcoming_only: true,
            ..GameFilter::default()
        };
        let mut closed = game();
        closed.is_closed = Some(true);

        assert!(filter.matches(&game(), date(2025, 10, 9)));
        assert!(!filter.matches(&closed, date(2025, 10, 9)));
    }

    #[test]
    fn test_within_week_of_spans_monday_to_sunday() {
        let filter = GameFilter::default()
            .within_week_of(date(2025, 10, 9))
            .unwrap();
        assert_eq!(filter.from, Some(date(2025, 10, 6)));
        assert_eq!(filter.to, Some(date(2025, 10, 12)));
    }

    #[test]
    fn test_validate() {
        assert!(GameFilter::default().validate().is_ok());

        let reversed = GameFilter {
            from: Some(date(2025, 10, 12)),
            to: Some(date(2025, 10, 6)),
            ..GameFilter::default()
        };
        assert!(matches!(reversed.validate(), Err(AppError::Config(_))));

        let blank_team = GameFilter {
            team: Some("  ".to_string()),
            ..GameFilter::default()
        };
        assert!(blank_team.validate().is_err());
    }
}
