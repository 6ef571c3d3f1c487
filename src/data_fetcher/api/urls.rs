//! URL building utilities for API endpoints

/// Builds the season schedule URL.
///
/// # Arguments
/// * `api_domain` - The base API domain. A bare domain gets `https://`,
///   an explicit `http://` is kept.
/// * `season` - The season year
/// * `api_key` - Subscription key, sent as the `key` query parameter
///
/// # Example
/// ```
/// use nhl_week_schedule::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("https://api.sportsdata.io", 2025, "abc");
/// assert_eq!(
///     url,
///     "https://api.sportsdata.io/v3/nhl/scores/json/SchedulesBasic/2025?key=abc"
/// );
/// ```
pub fn build_schedule_url(api_domain: &str, season: i32, api_key: &str) -> String {
    let api_domain = api_domain.trim_end_matches('/');
    let scheme = if api_domain.contains("://") { "" } else { "https://" };
    format!("{scheme}{api_domain}/v3/nhl/scores/json/SchedulesBasic/{season}?key={api_key}")
}

/// Replaces the value of the `key` query parameter so URLs can be logged.
///
/// # Example
/// ```
/// use nhl_week_schedule::data_fetcher::api::redact_api_key;
///
/// let url = redact_api_key("https://api.sportsdata.io/v3/nhl/x?key=abc&format=json");
/// assert_eq!(url, "https://api.sportsdata.io/v3/nhl/x?key=REDACTED&format=json");
/// ```
pub fn redact_api_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("key", _)) => "key=REDACTED".to_string(),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}?{query}")
}
