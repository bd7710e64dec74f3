//! Report service - validates a request and hands rendered lines to a sink

use std::sync::Arc;

use bitacora_common::validation::StringValidator;
use bitacora_domain::constants::REPORT_NAME_PATTERN;
use bitacora_domain::{BitacoraError, DateRange, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::info;

use super::format::render_report;
use super::ports::ReportSink;
use crate::activity::ports::ActivityRepository;

static REPORT_NAME: Lazy<StringValidator> = Lazy::new(|| {
    StringValidator::new()
        .trim(false)
        .pattern(REPORT_NAME_PATTERN)
        .expect("REPORT_NAME_PATTERN is a valid regex")
});

/// Outcome of a generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Where the sink placed the report
    pub destination: String,
    /// Number of activity lines written
    pub activity_count: usize,
}

/// Generates flat text reports of activities
pub struct ReportService {
    repository: Arc<dyn ActivityRepository>,
    sink: Arc<dyn ReportSink>,
}

impl ReportService {
    /// Create a new report service
    pub fn new(repository: Arc<dyn ActivityRepository>, sink: Arc<dyn ReportSink>) -> Self {
        Self { repository, sink }
    }

    /// Write the activities between `start` and `end` to `destination_name`.
    ///
    /// Dates are validated first, then the destination name. Nothing is
    /// written when either check fails.
    pub fn generate(
        &self,
        start: &str,
        end: &str,
        destination_name: &str,
    ) -> Result<ReportSummary> {
        let range = DateRange::parse(start, end)?;
        validate_destination(destination_name)?;

        let activities = self.repository.find_by_date_range(&range)?;
        let lines = render_report(&range, &activities);
        let destination = self.sink.write(destination_name, &lines)?;

        info!(
            destination = %destination,
            activity_count = activities.len(),
            "Report generated"
        );
        Ok(ReportSummary { destination, activity_count: activities.len() })
    }
}

/// Check a report file name: word characters, spaces and hyphens followed by
/// a three-letter extension.
pub fn validate_destination(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BitacoraError::Report("report file name cannot be empty".into()));
    }

    REPORT_NAME
        .check(name)
        .map_err(|_| BitacoraError::Report(format!("invalid report file name '{name}'")))
}
