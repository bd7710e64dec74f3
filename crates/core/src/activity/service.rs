//! Activity service - validation and query-range logic

use std::sync::Arc;

use bitacora_common::validation::Validator;
use bitacora_domain::{
    parse_date, Activity, ActivityFields, BitacoraError, DateRange, NewActivity, Result,
};
use tracing::{debug, info};

use super::ports::ActivityRepository;

/// Records activities and answers date-range queries
pub struct ActivityService {
    repository: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    /// Create a new activity service
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    /// Validate raw input and persist it as a new activity.
    ///
    /// Required fields are checked before the date format, so an entry with
    /// an empty supervisor and a malformed date reports `MissingField`.
    pub fn record(&self, fields: ActivityFields) -> Result<Activity> {
        let new_activity = validate_fields(&fields)?;
        let activity = self.repository.insert(new_activity)?;

        info!(activity_id = activity.id, date = %activity.date, "Activity recorded");
        Ok(activity)
    }

    /// Activities dated between `start` and `end`, both inclusive
    pub fn query(&self, start: &str, end: &str) -> Result<Vec<Activity>> {
        let range = DateRange::parse(start, end)?;
        self.query_range(&range)
    }

    /// Activities inside an already validated range
    pub fn query_range(&self, range: &DateRange) -> Result<Vec<Activity>> {
        let activities = self.repository.find_by_date_range(range)?;

        debug!(
            start = %range.start(),
            end = %range.end(),
            count = activities.len(),
            "Activities queried"
        );
        Ok(activities)
    }
}

/// Turn raw input into a persistable activity.
///
/// Text values are trimmed. Missing optional fields become empty strings.
pub fn validate_fields(fields: &ActivityFields) -> Result<NewActivity> {
    let mut validator = Validator::new();
    validator.validate_not_empty("date", &fields.date);
    validator.validate_not_empty("supervisor", &fields.supervisor);
    validator.validate_not_empty("description", &fields.description);
    validator.validate_not_empty("responsible", &fields.responsible);
    validator.finalize().map_err(|err| BitacoraError::MissingField(err.to_string()))?;

    let date = parse_date("date", &fields.date)?;

    Ok(NewActivity {
        date,
        supervisor: fields.supervisor.trim().to_string(),
        description: fields.description.trim().to_string(),
        attachments: trimmed_or_empty(fields.attachments.as_deref()),
        responsible: fields.responsible.trim().to_string(),
        weather: trimmed_or_empty(fields.weather.as_deref()),
        recorded_by: fields.recorded_by,
    })
}

fn trimmed_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
