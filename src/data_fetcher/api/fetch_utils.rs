//! Single-shot HTTP fetching with status mapping and JSON decoding

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use super::urls::redact_api_key;
use crate::error::AppError;

/// A JSON response body, plus the status error when the server answered
/// with a non-2xx code but still sent JSON (SportsDataIO error objects).
#[derive(Debug)]
pub(super) struct JsonResponse {
    pub body: Value,
    pub status_error: Option<AppError>,
}

/// Performs one GET request and parses the body as JSON.
///
/// There is no retry and no caching: whatever the first response is decides
/// the outcome. The URL is redacted before it reaches logs or errors since it
/// carries the API key.
///
/// A non-2xx response whose body is JSON is returned with `status_error` set
/// so the caller can still persist the body before failing.
///
/// # Errors
/// * `NetworkTimeout` / `NetworkConnection` / `ApiFetch` - transport failures
/// * status-specific variants for a non-2xx response without a JSON body
/// * `ApiNoData` - empty body
/// * `ApiMalformedJson` - body is not JSON
#[instrument(skip_all)]
pub(super) async fn fetch_json(client: &Client, url: &str) -> Result<JsonResponse, AppError> {
    let display_url = redact_api_key(url);
    info!("Fetching data from URL: {display_url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            let e = e.without_url();
            error!("Request failed for URL {}: {}", display_url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(display_url)
            } else if e.is_connect() {
                AppError::network_connection(display_url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    let status_error = if status.is_success() {
        None
    } else {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, display_url);
        Some(AppError::from_http_status(status_code, reason, &display_url))
    };

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read response text from URL {}: {}", display_url, e);
            return Err(status_error.unwrap_or(AppError::ApiFetch(e)));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    if let Some(status_error) = status_error {
        return match serde_json::from_str::<Value>(&response_text) {
            Ok(body) => Ok(JsonResponse {
                body,
                status_error: Some(status_error),
            }),
            Err(_) => Err(status_error),
        };
    }

    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", display_url));
    }

    let body = serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, display_url);
        error!(
            "Response text (first 200 chars): {}",
            response_text.chars().take(200).collect::<String>()
        );
        AppError::api_malformed_json(e.to_string(), &display_url)
    })?;

    Ok(JsonResponse {
        body,
        status_error: None,
    })
}
