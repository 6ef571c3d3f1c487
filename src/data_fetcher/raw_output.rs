//! Raw JSON dump of the API payload

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tokio::fs;
use tracing::{debug, info};

use crate::constants::RAW_JSON_INDENT;
use crate::error::AppError;

/// Serializes a JSON value with four-space indentation.
pub fn to_pretty_json(value: &Value) -> Result<Vec<u8>, AppError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(RAW_JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes the payload to `path`, replacing whatever was there.
///
/// This is a plain single write, not write-then-rename: a crash in the
/// middle can leave a truncated file behind.
pub async fn write_raw_json(path: &str, value: &Value) -> Result<(), AppError> {
    let bytes = to_pretty_json(value)?;
    debug!("Writing {} bytes of raw schedule JSON", bytes.len());
    fs::write(path, &bytes)
        .await
        .map_err(|e| AppError::raw_output(path, e))?;
    info!("Raw schedule written to {path}");
    Ok(())
}

/// Reads a dump written by [`write_raw_json`] back into a JSON value.
pub async fn read_raw_json(path: &str) -> Result<Value, AppError> {
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}
