use bitacora_core::Session;
use bitacora_domain::{Activity, ActivityFields, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Record an activity, attributing it to the logged-in user if any
pub fn record_activity(
    ctx: &AppContext,
    session: &Session,
    mut fields: ActivityFields,
) -> Result<Activity> {
    fields.recorded_by = session.current().map(|user| user.id);
    execute_command("activity::record", || ctx.activities.record(fields))
}

/// Activities between two dates, inclusive
pub fn query_activities(ctx: &AppContext, start: &str, end: &str) -> Result<Vec<Activity>> {
    execute_command("activity::query", || ctx.activities.query(start, end))
}
