use crate::data_fetcher::models::GameRecord;
use serde_json::{Value, json};

/// Test utilities for creating mock schedule data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a game record with only the required fields
    pub fn game(day: &str, home_team: &str, away_team: &str) -> GameRecord {
        GameRecord::new(day, home_team, away_team)
    }

    /// Creates a game record carrying the optional identifiers as well
    pub fn scheduled_game(game_id: i64, day: &str, home_team: &str, away_team: &str) -> GameRecord {
        GameRecord {
            game_id: Some(game_id),
            season: Some(2025),
            status: Some("Scheduled".to_string()),
            is_closed: Some(false),
            ..GameRecord::new(day, home_team, away_team)
        }
    }

    /// Opening stretch of a season: two full weeks plus a lone game in a
    /// third week, listed out of chronological week order on purpose.
    pub fn season_sample() -> Vec<GameRecord> {
        vec![
            Self::scheduled_game(1, "2025-10-07T00:00:00", "FLA", "CHI"),
            Self::scheduled_game(2, "2025-10-07T00:00:00", "NYR", "PIT"),
            Self::scheduled_game(3, "2025-10-20T00:00:00", "BOS", "SJS"),
            Self::scheduled_game(4, "2025-10-08T00:00:00", "MTL", "TOR"),
            Self::scheduled_game(5, "2025-10-09T00:00:00", "CHI", "BOS"),
            Self::scheduled_game(6, "2025-10-13T00:00:00", "PIT", "NYR"),
            Self::scheduled_game(7, "2025-10-19T00:00:00", "FLA", "TOR"),
            Self::scheduled_game(8, "2025-10-11T00:00:00", "FLA", "CHI"),
        ]
    }

    /// The records above as a `SchedulesBasic` style JSON payload,
    /// including fields the crate does not model.
    pub fn season_sample_payload() -> Value {
        let games: Vec<Value> = Self::season_sample()
            .into_iter()
            .map(|game| {
                json!({
                    "GameID": game.game_id,
                    "Season": game.season,
                    "SeasonType": 1,
                    "Status": game.status,
                    "Day": game.day,
                    "DateTime": game.day,
                    "AwayTeam": game.away_team,
                    "HomeTeam": game.home_team,
                    "IsClosed": game.is_closed
                })
            })
            .collect();
        Value::Array(games)
    }
}
