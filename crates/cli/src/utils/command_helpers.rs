//! Command execution helpers
//!
//! Every console command runs through [`execute_command`] so its outcome and
//! duration are logged the same way.

use std::time::Instant;

use bitacora_domain::Result;

use crate::utils::logging::log_command_execution;

/// Run `command_fn`, then log its duration and outcome under `command_name`.
///
/// ```rust,ignore
/// let activity = execute_command("activity::record", || {
///     ctx.activities.record(fields)
/// })?;
/// ```
pub fn execute_command<T, F>(command_name: &str, command_fn: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let start = Instant::now();
    let result = command_fn();

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}
