use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

pub const LOG_FILTER_ENV: &str = "PAGENAV_LOG";

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// without a configured file nothing is installed and `false` is returned.
pub fn init_logging(config: &LogConfig) -> AppResult<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let directives = resolve_filter_directives(&config.filter, std::env::var(LOG_FILTER_ENV).ok());
    let filter = build_filter(&directives)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| AppError::logging(err.to_string()))?;
    Ok(true)
}

/// A non-empty `PAGENAV_LOG` wins over the configured filter.
pub(crate) fn resolve_filter_directives(configured: &str, env_value: Option<String>) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => configured.to_string(),
    }
}

pub(crate) fn build_filter(directives: &str) -> AppResult<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|err| AppError::logging(format!("invalid log filter {directives:?}: {err}")))
}
