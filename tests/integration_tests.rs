use nhl_week_schedule::{
    AppError, Config, GameFilter, ReportOptions, ScheduleQuery,
    aggregator::{build_schedule_index, week_start},
    data_fetcher::raw_output::read_raw_json,
    run_pipeline, run_query,
    testing_utils::TestDataBuilder,
};
use chrono::{Datelike, NaiveDate, Weekday};
use serde_json::json;
use tempfile::{TempDir, tempdir};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const SCHEDULE_PATH: &str = "/v3/nhl/scores/json/SchedulesBasic/2025";

fn test_config(server: &MockServer, temp_dir: &TempDir) -> Config {
    Config {
        api_key: Some("integration-key".to_string()),
        season: 2025,
        api_domain: server.uri(),
        raw_output_path: temp_dir
            .path()
            .join("raw.json")
            .to_string_lossy()
            .to_string(),
        ..Config::default()
    }
}

async fn mount_schedule(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(SCHEDULE_PATH))
        .and(query_param("key", "integration-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Full run against a mock API: report text, raw dump and index agree
#[tokio::test]
async fn test_pipeline_end_to_end() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);
    let payload = TestDataBuilder::season_sample_payload();
    mount_schedule(&server, payload.clone()).await;

    let mut out = Vec::new();
    let index = run_pipeline(&config, &mut out).await.unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(
        report,
        "Week starting on 2025-10-06:\n\
         \x20 FLA plays 2 games against: CHI, CHI\n\
         \x20 CHI plays 3 games against: FLA, BOS, FLA\n\
         \x20 NYR plays 1 games against: PIT\n\
         \x20 PIT plays 1 games against: NYR\n\
         \x20 MTL plays 1 games against: TOR\n\
         \x20 TOR plays 1 games against: MTL\n\
         \x20 BOS plays 1 games against: CHI\n\
         \n\
         Week starting on 2025-10-13:\n\
         \x20 PIT plays 1 games against: NYR\n\
         \x20 NYR plays 1 games against: PIT\n\
         \x20 FLA plays 1 games against: TOR\n\
         \x20 TOR plays 1 games against: FLA\n\
         \n\
         Week starting on 2025-10-20:\n\
         \x20 BOS plays 1 games against: SJS\n\
         \x20 SJS plays 1 games against: BOS\n\
         \n"
    );

    assert_eq!(index.total_entries(), 2 * payload.as_array().unwrap().len());
    assert_eq!(read_raw_json(&config.raw_output_path).await.unwrap(), payload);
}

/// The dump keeps fields the crate does not model
#[tokio::test]
async fn test_raw_dump_keeps_unmodeled_fields() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);
    mount_schedule(&server, TestDataBuilder::season_sample_payload()).await;

    run_pipeline(&config, &mut Vec::new()).await.unwrap();

    let text = tokio::fs::read_to_string(&config.raw_output_path)
        .await
        .unwrap();
    assert!(text.contains("\"SeasonType\": 1"));
    assert!(text.contains("\"IsClosed\": false"));
    assert!(text.contains("\n        \"GameID\": 1,"));
}

/// A bad date aborts after the dump is written and before any report output
#[tokio::test]
async fn test_bad_day_fails_run_but_keeps_dump() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);
    let payload = json!([
        {"Day": "2025-10-07T00:00:00", "HomeTeam": "BOS", "AwayTeam": "NYR"},
        {"GameID": 42, "Day": "2025/10/09", "HomeTeam": "BOS", "AwayTeam": "TOR"}
    ]);
    mount_schedule(&server, payload.clone()).await;

    let mut out = Vec::new();
    let err = run_pipeline(&config, &mut out).await.unwrap_err();

    assert!(matches!(err, AppError::DateTimeParse(_)));
    assert!(err.to_string().contains("game 42"));
    assert!(out.is_empty());
    assert_eq!(read_raw_json(&config.raw_output_path).await.unwrap(), payload);
}

/// A rejected key surfaces as an error without leaking the key
#[tokio::test]
async fn test_unauthorized_key() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);

    Mock::given(method("GET"))
        .and(path(SCHEDULE_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = run_pipeline(&config, &mut Vec::new()).await.unwrap_err();

    assert!(matches!(err, AppError::ApiUnauthorized { .. }));
    assert!(!err.to_string().contains("integration-key"));
}

/// A JSON error body replaces the previous dump before the run fails
#[tokio::test]
async fn test_rejected_key_refreshes_dump() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);
    tokio::fs::write(&config.raw_output_path, r#"[{"stale": true}]"#)
        .await
        .unwrap();
    let error_body = json!({"HttpStatusCode": 401, "Code": 401, "Description": "Access denied"});

    Mock::given(method("GET"))
        .and(path(SCHEDULE_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(&error_body))
        .expect(1)
        .mount(&server)
        .await;

    let mut out = Vec::new();
    let err = run_pipeline(&config, &mut out).await.unwrap_err();

    assert!(matches!(err, AppError::ApiUnauthorized { .. }));
    assert!(out.is_empty());
    assert_eq!(
        read_raw_json(&config.raw_output_path).await.unwrap(),
        error_body
    );
}

/// Filters narrow the report while the dump keeps the whole season
#[tokio::test]
async fn test_filtered_run_for_one_team() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);
    let payload = TestDataBuilder::season_sample_payload();
    mount_schedule(&server, payload.clone()).await;

    let query = ScheduleQuery {
        filter: GameFilter {
            team: Some("TOR".to_string()),
            to: NaiveDate::from_ymd_opt(2025, 10, 19),
            ..GameFilter::default()
        },
        report: ReportOptions {
            team: Some("TOR".to_string()),
            venue_split: true,
            ..ReportOptions::default()
        },
    };

    let mut out = Vec::new();
    run_query(&config, &query, &mut out).await.unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(
        report,
        "Week starting on 2025-10-06:\n\
         \x20 TOR plays 1 games against: MTL\n\
         \x20   home: none\n\
         \x20   away: MTL (2025-10-08)\n\
         \n\
         Week starting on 2025-10-13:\n\
         \x20 TOR plays 1 games against: FLA\n\
         \x20   home: none\n\
         \x20   away: FLA (2025-10-19)\n\
         \n"
    );
    assert_eq!(read_raw_json(&config.raw_output_path).await.unwrap(), payload);
}

/// An impossible date range is rejected before any request is made
#[tokio::test]
async fn test_reversed_range_makes_no_request() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let query = ScheduleQuery {
        filter: GameFilter {
            from: NaiveDate::from_ymd_opt(2025, 11, 1),
            to: NaiveDate::from_ymd_opt(2025, 10, 1),
            ..GameFilter::default()
        },
        ..ScheduleQuery::default()
    };

    let err = run_query(&config, &query, &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(!std::path::Path::new(&config.raw_output_path).exists());
}

/// Each run replaces the previous dump instead of appending to it
#[tokio::test]
async fn test_second_run_overwrites_dump() {
    let server = MockServer::start().await;
    let temp_dir = tempdir().unwrap();
    let config = test_config(&server, &temp_dir);
    tokio::fs::write(&config.raw_output_path, "stale content from an earlier run")
        .await
        .unwrap();
    mount_schedule(&server, json!([])).await;

    let index = run_pipeline(&config, &mut Vec::new()).await.unwrap();

    assert!(index.is_empty());
    let text = tokio::fs::read_to_string(&config.raw_output_path)
        .await
        .unwrap();
    assert_eq!(text, "[]");
}

/// Games in one calendar week share the Monday on or before them
#[test]
fn test_same_week_games_share_monday_bucket() {
    let games = vec![
        TestDataBuilder::game("2025-12-29T19:00:00", "BOS", "NYR"),
        TestDataBuilder::game("2026-01-01T13:00:00", "DET", "TOR"),
        TestDataBuilder::game("2026-01-04T19:30:00", "BOS", "DET"),
    ];

    let index = build_schedule_index(&games).unwrap();

    let monday = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
    assert_eq!(index.week_count(), 1);
    assert_eq!(monday.weekday(), Weekday::Mon);
    assert_eq!(
        week_start(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()).unwrap(),
        monday
    );
    let week = index.week(monday).unwrap();
    assert_eq!(week.opponents("BOS").unwrap(), ["NYR", "DET"]);
    assert_eq!(week.opponents("DET").unwrap(), ["TOR", "BOS"]);
}
