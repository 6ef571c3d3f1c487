//! NHL weekly schedule summary library
//!
//! Fetches a season schedule from the SportsDataIO API, groups the games by
//! the Monday of their week and by team, and renders a plain-text summary of
//! who plays whom each week.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_week_schedule::{Config, run_pipeline};
//! use nhl_week_schedule::error::AppError;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let mut config = Config::load().await?;
//!     config.ensure_api_key().await?;
//!     config.validate()?;
//!
//!     let mut stdout = std::io::stdout();
//!     let index = run_pipeline(&config, &mut stdout).await?;
//!     eprintln!("{} weeks", index.week_count());
//!     Ok(())
//! }
//! ```
//!
//! The stages can also be used on their own:
//!
//! ```rust
//! use nhl_week_schedule::aggregator::build_schedule_index;
//! use nhl_week_schedule::data_fetcher::GameRecord;
//! use nhl_week_schedule::reporter::render_report;
//!
//! let games = vec![
//!     GameRecord::new("2025-10-07T19:00:00", "BOS", "NYR"),
//!     GameRecord::new("2025-10-09T19:00:00", "BOS", "TOR"),
//! ];
//! let index = build_schedule_index(&games).unwrap();
//! assert!(render_report(&index).contains("BOS plays 2 games against: NYR, TOR"));
//! ```
//!
//! Narrowing the report to one team, with home and away games split out:
//!
//! ```rust
//! use nhl_week_schedule::aggregator::{GameFilter, build_filtered_index};
//! use nhl_week_schedule::data_fetcher::GameRecord;
//! use nhl_week_schedule::reporter::{ReportOptions, render_report_with};
//!
//! let games = vec![
//!     GameRecord::new("2025-10-07T19:00:00", "BOS", "NYR"),
//!     GameRecord::new("2025-10-09T19:00:00", "MTL", "TOR"),
//! ];
//! let filter = GameFilter { team: Some("BOS".into()), ..GameFilter::default() };
//! let index = build_filtered_index(&games, &filter).unwrap();
//! let options = ReportOptions {
//!     team: Some("BOS".into()),
//!     venue_split: true,
//!     ..ReportOptions::default()
//! };
//! let report = render_report_with(&index, &options);
//! assert!(report.contains("    home: NYR (2025-10-07)"));
//! assert!(!report.contains("MTL"));
//! ```

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod pipeline;
pub mod reporter;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use aggregator::{GameFilter, ScheduleIndex, WeekSchedule, build_schedule_index};
pub use config::{Config, ConfigOverrides};
pub use data_fetcher::{GameRecord, fetch_season_schedule};
pub use error::AppError;
pub use pipeline::{ScheduleQuery, run_pipeline, run_query};
pub use reporter::ReportOptions;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
