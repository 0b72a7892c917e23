use crate::cli::Args;
use chrono::{NaiveDate, Utc};
use nhl_api::Config;
use nhl_api::constants::DEFAULT_LOG_FILE_NAME;
use nhl_api::error::CliError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits a log file path into the directory and file name the rolling
/// appender expects. `None` selects the default location.
pub fn resolve_log_target(custom_path: Option<&str>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), DEFAULT_LOG_FILE_NAME.to_string()),
    }
}

/// File the daily appender writes to on `date`: `<prefix>.YYYY-MM-DD`.
pub fn dated_log_file(log_dir: &str, log_file_name: &str, date: NaiveDate) -> String {
    format!("{log_dir}/{log_file_name}.{}", date.format("%Y-%m-%d"))
}

fn env_filter(debug: bool) -> Result<EnvFilter, CliError> {
    let directive = if debug { "nhl_api=debug" } else { "nhl_api=info" };
    let directive = directive
        .parse()
        .map_err(|e| CliError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging for the binary.
///
/// - Logs always go to a daily rolling file
/// - With `--debug` they are mirrored to stderr so stdout stays clean JSON
/// - The `--log-file` flag wins over the configured path
///
/// Returns the path of today's log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config: &Config,
) -> Result<(String, WorkerGuard), CliError> {
    let custom_log_path = args.log_file.as_deref().or(config.log_file_path.as_deref());
    let (log_dir, log_file_name) = resolve_log_target(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            CliError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter(args.debug)?);

    if args.debug {
        tracing_subscriber::registry()
            .with(file_layer)
            .with(
                fmt::Layer::new()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_filter(env_filter(true)?),
            )
            .try_init()
            .map_err(|e| CliError::log_setup_error(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .map_err(|e| CliError::log_setup_error(e.to_string()))?;
    }

    let log_file_path = dated_log_file(&log_dir, &log_file_name, Utc::now().date_naive());
    Ok((log_file_path, guard))
}
