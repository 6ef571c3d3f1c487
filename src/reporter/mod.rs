//! Plain-text weekly report

pub mod formatting;

pub use formatting::{format_team_line, format_venue_line, format_week_header};

use crate::aggregator::{ScheduleIndex, Venue};
use std::io::{self, Write};

/// Optional changes to the report layout. The default prints every team in
/// first-appearance order with one line each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print only this team's lines, ignoring ASCII case. Weeks where the
    /// team does not play are left out.
    pub team: Option<String>,
    /// Follow each team line with its home and away games and their dates.
    pub venue_split: bool,
    /// Order teams within a week by games played, most first.
    pub sort_by_games: bool,
}

/// Writes the report for every week, oldest first.
///
/// Each week is a header line, one line per team in the order the team
/// first appeared that week, and a blank line.
pub fn write_report<W: Write>(out: &mut W, index: &ScheduleIndex) -> io::Result<()> {
    write_report_with(out, index, &ReportOptions::default())
}

/// Writes the report laid out according to `options`.
pub fn write_report_with<W: Write>(
    out: &mut W,
    index: &ScheduleIndex,
    options: &ReportOptions,
) -> io::Result<()> {
    for (week_start, week) in index.weeks() {
        let mut teams = if options.sort_by_games {
            week.teams_by_game_count()
        } else {
            week.teams().collect()
        };
        if let Some(focus) = options.team.as_deref() {
            teams.retain(|(team, _)| team.eq_ignore_ascii_case(focus));
        }
        if teams.is_empty() {
            continue;
        }

        writeln!(out, "{}", format_week_header(week_start))?;
        for (team, matchups) in teams {
            writeln!(out, "{}", format_team_line(team, matchups))?;
            if options.venue_split {
                writeln!(out, "{}", format_venue_line(Venue::Home, matchups))?;
                writeln!(out, "{}", format_venue_line(Venue::Away, matchups))?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Renders the report into a string.
pub fn render_report(index: &ScheduleIndex) -> String {
    render_report_with(index, &ReportOptions::default())
}

/// Renders the report laid out according to `options` into a string.
pub fn render_report_with(index: &ScheduleIndex, options: &ReportOptions) -> String {
    let mut buffer = Vec::new();
    write_report_with(&mut buffer, index, options).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}
