use crate::constants::MAX_HTTP_TIMEOUT_MS;
use crate::error::CliError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - HTTP timeout must be between 1 ms and 5 minutes
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    http_timeout_ms: u64,
    log_file_path: &Option<String>,
) -> Result<(), CliError> {
    if http_timeout_ms == 0 {
        return Err(CliError::config_error("HTTP timeout must be greater than zero"));
    }
    if http_timeout_ms > MAX_HTTP_TIMEOUT_MS {
        return Err(CliError::config_error(format!(
            "HTTP timeout {http_timeout_ms}ms exceeds the maximum of {MAX_HTTP_TIMEOUT_MS}ms"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.trim().is_empty() {
            return Err(CliError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_timeout_bounds() {
        assert!(validate_config(1, &None).is_ok());
        assert!(validate_config(10_000, &None).is_ok());
        assert!(validate_config(MAX_HTTP_TIMEOUT_MS, &None).is_ok());

        let zero = validate_config(0, &None).unwrap_err();
        assert!(matches!(zero, CliError::Config(_)));
        let too_long = validate_config(MAX_HTTP_TIMEOUT_MS + 1, &None).unwrap_err();
        assert!(too_long.to_string().contains("maximum"));
    }

    #[test]
    fn test_log_path_rules() {
        assert!(validate_config(10_000, &Some("   ".to_string())).is_err());
        assert!(validate_config(10_000, &Some("nhl.log".to_string())).is_ok());

        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("nhl.log");
        validate_config(10_000, &Some(nested.to_string_lossy().to_string())).unwrap();
        assert!(temp_dir.path().join("a").join("b").exists());
    }
}
