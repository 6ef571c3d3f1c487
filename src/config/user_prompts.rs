//! User prompts for first-run configuration

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Asks for a SportsDataIO API key on stdin and returns it trimmed.
/// An empty string means the user gave no key (or stdin was closed).
pub async fn prompt_for_api_key() -> Result<String, AppError> {
    eprintln!("Please enter your SportsDataIO API key: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
