use serde::{Deserialize, Serialize};

/// One scheduled game as returned by the `SchedulesBasic` endpoint.
///
/// Only the fields the weekly summary needs are required. The identifiers
/// that help when diagnosing a bad record are kept when present, everything
/// else in the payload is ignored here (it still ends up in the raw dump).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    #[serde(rename = "GameID", default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i64>,
    #[serde(rename = "Season", default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Local game day, e.g. `2025-10-07T00:00:00`
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "HomeTeam")]
    pub home_team: String,
    #[serde(rename = "AwayTeam")]
    pub away_team: String,
    /// Set once the game is final. Missing means not closed.
    #[serde(rename = "IsClosed", default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
}

impl GameRecord {
    pub fn new(
        day: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            game_id: None,
            season: None,
            status: None,
            day: day.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            is_closed: None,
        }
    }

    /// Whether the game is still to be played.
    pub fn is_upcoming(&self) -> bool {
        !self.is_closed.unwrap_or(false)
    }

    /// Whether `team` plays in this game, ignoring ASCII case.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team.eq_ignore_ascii_case(team) || self.away_team.eq_ignore_ascii_case(team)
    }

    /// Short label for log and error messages.
    pub fn describe(&self) -> String {
        match self.game_id {
            Some(id) => format!("game {id} ({} vs {})", self.home_team, self.away_team),
            None => format!("{} vs {}", self.home_team, self.away_team),
        }
    }
}
