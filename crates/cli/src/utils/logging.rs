use std::time::Duration;

use anyhow::anyhow;
use bitacora_domain::{BitacoraError, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Events go to stderr so the
/// menu owns stdout.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow!("invalid log filter '{}': {e}", config.level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed =
        if config.json { builder.json().try_init() } else { builder.with_target(false).try_init() };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable identifier such as `"activity::record"`. Callers
/// must not pass user input through it.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    error: Option<&BitacoraError>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => {
            let error = error_label(err);
            warn!(command, duration_ms, error, "command_execution_failure");
        }
    }
}

/// Convert a `BitacoraError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &BitacoraError) -> &'static str {
    match error {
        BitacoraError::MissingField(_) => "missing_field",
        BitacoraError::InvalidDate(_) => "invalid_date",
        BitacoraError::InvalidRange(_) => "invalid_range",
        BitacoraError::Report(_) => "report",
        BitacoraError::DuplicateEmail(_) => "duplicate_email",
        BitacoraError::UserNotFound(_) => "user_not_found",
        BitacoraError::IncorrectPassword => "incorrect_password",
        BitacoraError::InvalidValue(_) => "invalid_value",
        BitacoraError::Database(_) => "database",
        BitacoraError::Config(_) => "config",
        BitacoraError::Security(_) => "security",
        BitacoraError::Internal(_) => "internal",
    }
}
