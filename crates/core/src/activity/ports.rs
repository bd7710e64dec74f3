//! Port interfaces for activity persistence

use bitacora_domain::{Activity, DateRange, NewActivity, Result};

/// Activity persistence and retrieval
pub trait ActivityRepository: Send + Sync {
    /// Insert a validated activity and return the stored row
    fn insert(&self, activity: NewActivity) -> Result<Activity>;

    /// All activities whose date falls inside `range` (inclusive), ordered by
    /// date then id
    fn find_by_date_range(&self, range: &DateRange) -> Result<Vec<Activity>>;
}
