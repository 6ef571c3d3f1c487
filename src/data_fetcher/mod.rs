pub mod api;
pub mod models;
pub mod raw_output;

pub use api::{FetchedSchedule, fetch_season_schedule};
pub use models::GameRecord;
