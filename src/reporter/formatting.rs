use chrono::NaiveDate;

use crate::aggregator::{Matchup, Venue};
use crate::constants::WEEK_DATE_FORMAT;

/// `Week starting on 2025-10-06:`
pub fn format_week_header(week_start: NaiveDate) -> String {
    format!("Week starting on {}:", week_start.format(WEEK_DATE_FORMAT))
}

/// `  BOS plays 2 games against: NYR, TOR`
///
/// The count is the number of scheduled games, duplicates included.
pub fn format_team_line(team: &str, matchups: &[Matchup]) -> String {
    let opponents: Vec<&str> = matchups.iter().map(|m| m.opponent.as_str()).collect();
    format!(
        "  {team} plays {} games against: {}",
        matchups.len(),
        opponents.join(", ")
    )
}

/// `    home: NYR (2025-10-07), TOR (2025-10-09)`
///
/// Lists the games on one side only; `none` when there are none.
pub fn format_venue_line(venue: Venue, matchups: &[Matchup]) -> String {
    let label = match venue {
        Venue::Home => "home",
        Venue::Away => "away",
    };
    let games: Vec<String> = matchups
        .iter()
        .filter(|m| m.venue == venue)
        .map(|m| format!("{} ({})", m.opponent, m.date.format(WEEK_DATE_FORMAT)))
        .collect();

    if games.is_empty() {
        format!("    {label}: none")
    } else {
        format!("    {label}: {}", games.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn test_format_week_header() {
        assert_eq!(format_week_header(date(6)), "Week starting on 2025-10-06:");
    }

    #[test]
    fn test_format_team_line() {
        let matchups = vec![
            Matchup::new("NYR", date(7), Venue::Home),
            Matchup::new("TOR", date(9), Venue::Away),
        ];
        assert_eq!(
            format_team_line("BOS", &matchups),
            "  BOS plays 2 games against: NYR, TOR"
        );
    }

    #[test]
    fn test_format_team_line_single_and_repeated() {
        assert_eq!(
            format_team_line("NYR", &[Matchup::new("BOS", date(7), Venue::Away)]),
            "  NYR plays 1 games against: BOS"
        );
        let repeated = vec![
            Matchup::new("CHI", date(7), Venue::Home),
            Matchup::new("CHI", date(11), Venue::Home),
        ];
        assert_eq!(
            format_team_line("FLA", &repeated),
            "  FLA plays 2 games against: CHI, CHI"
        );
    }

    #[test]
    fn test_format_venue_line() {
        let matchups = vec![
            Matchup::new("NYR", date(7), Venue::Home),
            Matchup::new("TOR", date(9), Venue::Away),
            Matchup::new("MTL", date(11), Venue::Home),
        ];
        assert_eq!(
            format_venue_line(Venue::Home, &matchups),
            "    home: NYR (2025-10-07), MTL (2025-10-11)"
        );
        assert_eq!(
            format_venue_line(Venue::Away, &matchups),
            "    away: TOR (2025-10-09)"
        );
        assert_eq!(
            format_venue_line(Venue::Away, &matchups[..1]),
            "    away: none"
        );
    }
}
