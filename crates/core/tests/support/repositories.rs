//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the core ports, enabling deterministic tests
//! without database or filesystem dependencies.

use std::collections::HashMap;
use std::sync::Mutex;

use bitacora_core::{
    ActivityRepository, CredentialHasher, ReportSink, SessionStore, UserRepository,
};
use bitacora_domain::{
    Activity, BitacoraError, DateRange, NewActivity, NewUser, Result as DomainResult,
    SessionUser, StoredUser, User,
};
use chrono::Utc;

/// In-memory `ActivityRepository` assigning sequential ids.
#[derive(Default)]
pub struct InMemoryActivityRepository {
    rows: Mutex<Vec<Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn insert(&self, activity: NewActivity) -> DomainResult<Activity> {
        let mut rows = self.rows.lock().unwrap();
        let stored = Activity::from_new(rows.len() as i64 + 1, activity);
        rows.push(stored.clone());
        Ok(stored)
    }

    fn find_by_date_range(&self, range: &DateRange) -> DomainResult<Vec<Activity>> {
        let mut found: Vec<Activity> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|activity| range.contains(activity.date))
            .cloned()
            .collect();
        found.sort_by_key(|activity| (activity.date, activity.id));
        Ok(found)
    }
}

/// In-memory `UserRepository` enforcing email uniqueness like the real table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<StoredUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self, email: &str) -> Option<StoredUser> {
        self.users.lock().unwrap().iter().find(|u| u.user.email == email).cloned()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_email(&self, email: &str) -> DomainResult<Option<StoredUser>> {
        Ok(self.stored(email))
    }

    fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.user.email == user.email) {
            return Err(BitacoraError::DuplicateEmail(user.email));
        }

        let created = User {
            id: users.len() as i64 + 1,
            name: user.name,
            email: user.email,
            created_at: Utc::now(),
        };
        users.push(StoredUser { user: created.clone(), password_hash: user.password_hash });
        Ok(created)
    }

    fn update_password_hash(&self, user_id: i64, password_hash: &str) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.user.id == user_id)
            .ok_or_else(|| BitacoraError::UserNotFound(user_id.to_string()))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}

/// Reversible stand-in for a real hasher; keeps service tests fast.
#[derive(Default)]
pub struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("plain${password}"))
    }

    fn verify(&self, password: &str, password_hash: &str) -> DomainResult<bool> {
        Ok(password_hash.strip_prefix("plain$") == Some(password))
    }
}

/// Captures report output per destination.
#[derive(Default)]
pub struct RecordingReportSink {
    written: Mutex<HashMap<String, Vec<String>>>,
}

impl RecordingReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self, destination: &str) -> Option<Vec<String>> {
        self.written.lock().unwrap().get(destination).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.written.lock().unwrap().is_empty()
    }
}

impl ReportSink for RecordingReportSink {
    fn write(&self, destination: &str, lines: &[String]) -> DomainResult<String> {
        self.written.lock().unwrap().insert(destination.to_string(), lines.to_vec());
        Ok(format!("memory://{destination}"))
    }
}

/// Sink whose every write fails, as a full disk would.
#[derive(Default)]
pub struct FailingReportSink;

impl ReportSink for FailingReportSink {
    fn write(&self, destination: &str, _lines: &[String]) -> DomainResult<String> {
        Err(BitacoraError::Report(format!("could not write '{destination}': disk full")))
    }
}

/// In-memory `SessionStore`.
#[derive(Default)]
pub struct InMemorySessionStore {
    user: Mutex<Option<SessionUser>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: SessionUser) -> Self {
        Self { user: Mutex::new(Some(user)) }
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, user: &SessionUser) -> DomainResult<()> {
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn load(&self) -> Option<SessionUser> {
        self.user.lock().unwrap().clone()
    }

    fn clear(&self) -> DomainResult<()> {
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}
