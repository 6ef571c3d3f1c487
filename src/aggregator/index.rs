use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use super::week::week_start;
use crate::error::AppError;

/// Which side of a game a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

/// One opponent entry for a team: who, when, and on which side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub opponent: String,
    pub date: NaiveDate,
    pub venue: Venue,
}

impl Matchup {
    pub fn new(opponent: impl Into<String>, date: NaiveDate, venue: Venue) -> Self {
        Self {
            opponent: opponent.into(),
            date,
            venue,
        }
    }
}

/// Opponents of every team that plays in one week.
///
/// Teams iterate in the order they first appeared in the week. Each team's
/// opponent list keeps arrival order and duplicates. Team identifiers are
/// compared exactly, so `BOS` and `bos` are different teams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    teams: Vec<(String, Vec<Matchup>)>,
    positions: HashMap<String, usize>,
}

impl WeekSchedule {
    /// Appends `matchup` to `team`'s list, registering `team` if new.
    pub fn add_matchup(&mut self, team: &str, matchup: Matchup) {
        let position = match self.positions.get(team) {
            Some(&position) => position,
            None => {
                self.teams.push((team.to_string(), Vec::new()));
                let position = self.teams.len() - 1;
                self.positions.insert(team.to_string(), position);
                position
            }
        };
        self.teams[position].1.push(matchup);
    }

    pub fn matchups(&self, team: &str) -> Option<&[Matchup]> {
        self.positions
            .get(team)
            .map(|&position| self.teams[position].1.as_slice())
    }

    /// Opponent identifiers of `team`, in arrival order.
    pub fn opponents(&self, team: &str) -> Option<Vec<&str>> {
        self.matchups(team).map(|matchups| {
            matchups
                .iter()
                .map(|matchup| matchup.opponent.as_str())
                .collect()
        })
    }

    /// Teams with their matchups, in first-appearance order.
    pub fn teams(&self) -> impl Iterator<Item = (&str, &[Matchup])> {
        self.teams
            .iter()
            .map(|(team, matchups)| (team.as_str(), matchups.as_slice()))
    }

    /// Teams ordered by games played, most first. Ties keep first-appearance
    /// order.
    pub fn teams_by_game_count(&self) -> Vec<(&str, &[Matchup])> {
        let mut teams: Vec<_> = self.teams().collect();
        teams.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of (team, opponent) entries in the week.
    pub fn entry_count(&self) -> usize {
        self.teams.iter().map(|(_, matchups)| matchups.len()).sum()
    }
}

/// Week start → team → opponents, with weeks in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleIndex {
    weeks: BTreeMap<NaiveDate, WeekSchedule>,
}

impl ScheduleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one game played on `date`: each side gains the other as an
    /// opponent in the week containing `date`.
    pub fn insert_game(
        &mut self,
        date: NaiveDate,
        home_team: &str,
        away_team: &str,
    ) -> Result<(), AppError> {
        let week = self.weeks.entry(week_start(date)?).or_default();
        week.add_matchup(home_team, Matchup::new(away_team, date, Venue::Home));
        week.add_matchup(away_team, Matchup::new(home_team, date, Venue::Away));
        Ok(())
    }

    /// Weeks in ascending chronological order.
    pub fn weeks(&self) -> impl Iterator<Item = (NaiveDate, &WeekSchedule)> {
        self.weeks.iter().map(|(start, week)| (*start, week))
    }

    pub fn week(&self, week_start: NaiveDate) -> Option<&WeekSchedule> {
        self.weeks.get(&week_start)
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Total (team, opponent) entries across all weeks. Always twice the
    /// number of games inserted.
    pub fn total_entries(&self) -> usize {
        self.weeks.values().map(WeekSchedule::entry_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
