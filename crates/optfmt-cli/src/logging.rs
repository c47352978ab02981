//! Subscriber setup for the `optfmt` binary.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

const TRACE_ENV_VAR: &str = "OPTFMT_TRACE";
const FORMAT_ENV_VAR: &str = "OPTFMT_LOG_FORMAT";
const FILE_ENV_VAR: &str = "OPTFMT_LOG_FILE";

fn open_log_file(path: &str) -> Result<File, CliError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| CliError::Logging {
            reason: format!("failed to open log file {path}: {err}"),
        })
}

fn map_init_err<E: std::fmt::Display>(err: E) -> CliError {
    CliError::Logging {
        reason: err.to_string(),
    }
}

/// Build the level filter from `level`, then `OPTFMT_TRACE`, then `off`.
pub(crate) fn level_filter(level: Option<String>) -> Result<EnvFilter, CliError> {
    let level_value = level
        .or_else(|| env::var(TRACE_ENV_VAR).ok())
        .unwrap_or_else(|| "off".to_string());

    if level_value.eq_ignore_ascii_case("off") {
        Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()))
    } else {
        EnvFilter::try_new(&level_value).map_err(|err| CliError::Logging {
            reason: format!("invalid log filter '{level_value}': {err}"),
        })
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the rendered document.
///
/// `OPTFMT_LOG_FORMAT` selects `pretty` (default) or `json`;
/// `OPTFMT_LOG_FILE` adds a second, uncolored sink. Returns `false` when a
/// subscriber is already installed.
pub fn init_logging(level: Option<String>) -> Result<bool, CliError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let filter = level_filter(level)?;
    let format = env::var(FORMAT_ENV_VAR).unwrap_or_else(|_| "pretty".to_string());
    let log_file = env::var(FILE_ENV_VAR).ok();
    let use_json = format.eq_ignore_ascii_case("json");

    if !use_json && !format.eq_ignore_ascii_case("pretty") {
        return Err(CliError::Logging {
            reason: format!("invalid {FORMAT_ENV_VAR} '{format}' (expected 'json' or 'pretty')"),
        });
    }

    if use_json {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .json();
        let base = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer);
        if let Some(path) = log_file {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(open_log_file(&path)?)
                .with_ansi(false)
                .json();
            base.with(file_layer).try_init().map_err(map_init_err)?;
        } else {
            base.try_init().map_err(map_init_err)?;
        }
    } else {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .pretty();
        let base = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer);
        if let Some(path) = log_file {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(open_log_file(&path)?)
                .with_ansi(false)
                .pretty();
            base.with(file_layer).try_init().map_err(map_init_err)?;
        } else {
            base.try_init().map_err(map_init_err)?;
        }
    }

    tracing::debug!(
        component = "cli",
        operation = "init_logging",
        status = "success",
        format = format.as_str(),
        "Initialized logging"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_is_parsed() {
        assert!(level_filter(Some("optfmt_core=debug".to_string())).is_ok());
        assert!(level_filter(Some("OFF".to_string())).is_ok());
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err = level_filter(Some("optfmt_core=loud".to_string())).unwrap_err();
        assert_eq!(err.code(), "LOGGING_INIT");
    }
}
