use super::Config;
use crate::constants::season;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key must be present and non-blank
/// - Season must fall within the supported range
/// - API domain must be a valid URL or domain name
/// - Raw output path cannot be empty
/// - HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    config.require_api_key()?;
    validate_season(config.season)?;
    validate_api_domain(&config.api_domain)?;

    if config.raw_output_path.trim().is_empty() {
        return Err(AppError::config_error("Raw output path cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        validate_log_file_path(log_path)?;
    }

    Ok(())
}

pub fn validate_season(value: i32) -> Result<(), AppError> {
    if !(season::MIN..=season::MAX).contains(&value) {
        return Err(AppError::config_error(format!(
            "Season {value} is outside the supported range {}-{}",
            season::MIN,
            season::MAX
        )));
    }
    Ok(())
}

pub fn validate_api_domain(api_domain: &str) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    // Without a scheme it should at least look like a domain
    if !api_domain.starts_with("http://")
        && !api_domain.starts_with("https://")
        && !api_domain.contains('.')
        && !api_domain.starts_with("localhost")
    {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    Ok(())
}

fn validate_log_file_path(log_path: &str) -> Result<(), AppError> {
    if log_path.is_empty() {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    if let Some(parent) = Path::new(log_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config_error(format!(
                "Cannot create log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}
