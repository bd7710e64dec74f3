//! Report line rendering

use bitacora_domain::constants::{EMPTY_FIELD_MARKER, EMPTY_REPORT_MESSAGE, REPORT_HEADER};
use bitacora_domain::{Activity, DateRange};

/// One line per activity:
/// `#<id> | <date> | supervisor: <s> | responsible: <r> | <description> |
/// attachments: <a> | weather: <w>`
pub fn format_activity_line(activity: &Activity) -> String {
    format!(
        "#{} | {} | supervisor: {} | responsible: {} | {} | attachments: {} | weather: {}",
        activity.id,
        activity.date,
        activity.supervisor,
        activity.responsible,
        activity.description,
        or_marker(&activity.attachments),
        or_marker(&activity.weather),
    )
}

/// Header naming the range, then one line per activity or the placeholder
/// line
pub fn render_report(range: &DateRange, activities: &[Activity]) -> Vec<String> {
    let mut lines = Vec::with_capacity(activities.len() + 1);
    lines.push(format!("{REPORT_HEADER} from {} to {}", range.start(), range.end()));

    if activities.is_empty() {
        lines.push(EMPTY_REPORT_MESSAGE.to_string());
    } else {
        lines.extend(activities.iter().map(format_activity_line));
    }
    lines
}

fn or_marker(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD_MARKER
    } else {
        value
    }
}
