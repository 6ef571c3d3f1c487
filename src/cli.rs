use chrono::NaiveDate;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use nhl_week_schedule::constants::WEEK_DATE_FORMAT;
use nhl_week_schedule::error::AppError;
use nhl_week_schedule::{ConfigOverrides, GameFilter, ReportOptions, ScheduleQuery};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, WEEK_DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// NHL weekly schedule summary
///
/// Fetches one season's schedule from SportsDataIO, saves the raw response
/// as JSON, and prints every team's opponents week by week.
///
/// Settings come from the config file, then NHL_* environment variables,
/// then the flags below, each layer overriding the previous one.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season to fetch, e.g. 2025 for the 2025-26 season.
    #[arg(short, long, value_name = "YEAR", help_heading = "Schedule")]
    pub season: Option<i32>,

    /// SportsDataIO API key for this run.
    #[arg(short = 'k', long = "api-key", help_heading = "Schedule")]
    pub api_key: Option<String>,

    /// Where to write the raw API response. Existing content is overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help_heading = "Schedule"
    )]
    pub raw_output: Option<String>,

    /// Base URL of the API, for proxies or test servers.
    #[arg(long = "api-domain", value_name = "URL", help_heading = "Schedule")]
    pub api_domain: Option<String>,

    /// HTTP timeout in seconds for the schedule request.
    #[arg(long = "timeout", value_name = "SECONDS", help_heading = "Schedule")]
    pub http_timeout: Option<u64>,

    /// Only report games involving this team, e.g. BOS.
    #[arg(short = 't', long = "team", help_heading = "Report")]
    pub team: Option<String>,

    /// Only report games on or after this date (YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE", value_parser = parse_date, help_heading = "Report")]
    pub from: Option<NaiveDate>,

    /// Only report games on or before this date (YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE", value_parser = parse_date, help_heading = "Report")]
    pub to: Option<NaiveDate>,

    /// Only report the Monday-to-Sunday week containing this date.
    #[arg(
        short = 'w',
        long = "week",
        value_name = "DATE",
        value_parser = parse_date,
        conflicts_with_all = ["from", "to"],
        help_heading = "Report"
    )]
    pub week: Option<NaiveDate>,

    /// Only report games that are not closed yet.
    #[arg(long = "upcoming", help_heading = "Report")]
    pub upcoming: bool,

    /// List each team's home and away games with their dates.
    #[arg(long = "split-venue", help_heading = "Report")]
    pub split_venue: bool,

    /// Order teams within a week by games played, most first.
    #[arg(long = "sort-by-games", help_heading = "Report")]
    pub sort_by_games: bool,

    /// List the effective configuration and exit.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Save the effective configuration, including the flags given on this
    /// command line, to the config file and exit.
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs go to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Per-run overrides for the loaded configuration.
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            season: self.season,
            api_domain: self.api_domain.clone(),
            raw_output_path: self.raw_output.clone(),
            log_file_path: self.log_file.clone(),
            http_timeout_seconds: self.http_timeout,
        }
    }

    /// Filter and layout for the report.
    pub fn schedule_query(&self) -> Result<ScheduleQuery, AppError> {
        let mut filter = GameFilter {
            team: self.team.clone(),
            from: self.from,
            to: self.to,
            upcoming_only: self.upcoming,
        };
        if let Some(date) = self.week {
            filter = filter.within_week_of(date)?;
        }

        let query = ScheduleQuery {
            filter,
            report: ReportOptions {
                team: self.team.clone(),
                venue_split: self.split_venue,
                sort_by_games: self.sort_by_games,
            },
        };
        query.validate()?;
        Ok(query)
    }
}
