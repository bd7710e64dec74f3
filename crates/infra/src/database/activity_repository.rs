//! Activity repository backed by SQLite

use std::sync::Arc;

use bitacora_core::ActivityRepository;
use bitacora_domain::constants::DATE_FORMAT;
use bitacora_domain::{Activity, DateRange, NewActivity, Result as DomainResult};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::Row;
use tracing::debug;

use super::manager::DbManager;
use crate::errors::InfraError;

const SELECT_COLUMNS: &str = "id, date, supervisor, description, attachments, responsible, \
                              weather, status, kind, recorded_by";

/// SQLite implementation of `ActivityRepository`
pub struct SqliteActivityRepository {
    db: Arc<DbManager>,
}

impl SqliteActivityRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

impl ActivityRepository for SqliteActivityRepository {
    fn insert(&self, activity: NewActivity) -> DomainResult<Activity> {
        let conn = self.db.get_connection()?;
        let date = activity.date.format(DATE_FORMAT).to_string();

        conn.execute(
            "INSERT INTO activities
                (date, supervisor, description, attachments, responsible, weather, recorded_by)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            &[
                &date,
                &activity.supervisor,
                &activity.description,
                &activity.attachments,
                &activity.responsible,
                &activity.weather,
                &activity.recorded_by,
            ],
        )
        .map_err(InfraError::from)?;

        let id = conn.last_insert_rowid();
        debug!(activity_id = id, "activity row inserted");
        Ok(Activity::from_new(id, activity))
    }

    fn find_by_date_range(&self, range: &DateRange) -> DomainResult<Vec<Activity>> {
        let conn = self.db.get_connection()?;
        let start = range.start().format(DATE_FORMAT).to_string();
        let end = range.end().format(DATE_FORMAT).to_string();

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM activities
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC, id ASC"
        );
        let mut stmt = conn.prepare(&sql).map_err(InfraError::from)?;
        let activities =
            stmt.query_map(&[&start, &end], map_activity_row).map_err(InfraError::from)?;

        Ok(activities)
    }
}

fn map_activity_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
    let raw_date: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(Activity {
        id: row.get("id")?,
        date,
        supervisor: row.get("supervisor")?,
        description: row.get("description")?,
        attachments: row.get("attachments")?,
        responsible: row.get("responsible")?,
        weather: row.get("weather")?,
        status: row.get("status")?,
        kind: row.get("kind")?,
        recorded_by: row.get("recorded_by")?,
    })
}
