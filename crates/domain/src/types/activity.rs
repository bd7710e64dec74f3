//! Activity (bitácora entry) types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw activity input as collected by a front-end.
///
/// Nothing here is validated yet; empty strings stand for missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFields {
    pub date: String,
    pub supervisor: String,
    pub description: String,
    #[serde(default)]
    pub attachments: Option<String>,
    pub responsible: String,
    #[serde(default)]
    pub weather: Option<String>,
    /// User that recorded the entry, when a session is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_by: Option<i64>,
}

/// Validated activity ready to be persisted.
///
/// All text fields are trimmed; optional fields default to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub date: NaiveDate,
    pub supervisor: String,
    pub description: String,
    pub attachments: String,
    pub responsible: String,
    pub weather: String,
    pub recorded_by: Option<i64>,
}

/// Activity row as stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub date: NaiveDate,
    pub supervisor: String,
    pub description: String,
    pub attachments: String,
    pub responsible: String,
    pub weather: String,
    /// Classification fields present in storage but never set by the
    /// recording path
    pub status: Option<String>,
    pub kind: Option<String>,
    pub recorded_by: Option<i64>,
}

impl Activity {
    /// Build the stored representation of a freshly inserted activity.
    pub fn from_new(id: i64, new: NewActivity) -> Self {
        Self {
            id,
            date: new.date,
            supervisor: new.supervisor,
            description: new.description,
            attachments: new.attachments,
            responsible: new.responsible,
            weather: new.weather,
            status: None,
            kind: None,
            recorded_by: new.recorded_by,
        }
    }
}
