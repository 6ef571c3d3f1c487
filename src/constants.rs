//! Application-wide constants and configuration defaults
//!
//! Centralizes the values that used to be scattered literals so the
//! config layer, the fetcher and the tests agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Default base URL of the SportsDataIO API
pub const DEFAULT_API_DOMAIN: &str = "https://api.sportsdata.io";

/// Season fetched when nothing else is configured
pub const DEFAULT_SEASON: i32 = 2025;

/// Where the raw API payload is written, relative to the working directory
pub const DEFAULT_RAW_OUTPUT_PATH: &str = "raw.json";

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "nhl_week_schedule";

/// Log file name used when no custom log path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "nhl_week_schedule.log";

/// Date-time layout of the `Day` field in schedule records
pub const GAME_DAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date layout used for week headers
pub const WEEK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Indentation used when writing the raw JSON dump
pub const RAW_JSON_INDENT: &[u8] = b"    ";

/// Accepted season range. The NHL's first season was 1917-18.
pub mod season {
    pub const MIN: i32 = 1917;
    pub const MAX: i32 = 2100;
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_KEY: &str = "NHL_API_KEY";
    pub const SEASON: &str = "NHL_SEASON";
    pub const API_DOMAIN: &str = "NHL_API_DOMAIN";
    pub const RAW_OUTPUT: &str = "NHL_RAW_OUTPUT";
    pub const LOG_FILE: &str = "NHL_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "NHL_HTTP_TIMEOUT";
}
