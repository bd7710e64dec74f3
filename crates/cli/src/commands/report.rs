use bitacora_core::ReportSummary;
use bitacora_domain::constants::DEFAULT_REPORT_NAME;
use bitacora_domain::Result;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Generate a report into the configured output directory.
///
/// A blank `destination_name` selects [`DEFAULT_REPORT_NAME`].
pub fn generate_report(
    ctx: &AppContext,
    start: &str,
    end: &str,
    destination_name: &str,
) -> Result<ReportSummary> {
    let destination_name = match destination_name.trim() {
        "" => DEFAULT_REPORT_NAME,
        name => name,
    };
    execute_command("report::generate", || ctx.reports.generate(start, end, destination_name))
}
