//! User repository backed by SQLite

use std::sync::Arc;

use bitacora_common::storage::StorageError;
use bitacora_core::UserRepository;
use bitacora_domain::{BitacoraError, NewUser, Result as DomainResult, StoredUser, User};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;
use tracing::debug;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

impl UserRepository for SqliteUserRepository {
    fn find_by_email(&self, email: &str) -> DomainResult<Option<StoredUser>> {
        let conn = self.db.get_connection()?;

        let result = conn.query_row(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?1",
            &[&email],
            map_stored_user_row,
        );

        match result {
            Ok(user) => Ok(Some(user)),
            Err(StorageError::Rusqlite(rusqlite::Error::QueryReturnedNoRows)) => Ok(None),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    fn insert(&self, user: NewUser) -> DomainResult<User> {
        let conn = self.db.get_connection()?;
        let created_at = Utc::now();
        let created_at_secs = created_at.timestamp();

        let inserted = conn.execute(
            "INSERT INTO users (name, email, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
            &[&user.name, &user.email, &user.password_hash, &created_at_secs],
        );

        match inserted {
            Ok(_) => {}
            Err(StorageError::UniqueViolation(_)) => {
                return Err(BitacoraError::DuplicateEmail(user.email));
            }
            Err(err) => return Err(InfraError::from(err).into()),
        }

        let id = conn.last_insert_rowid();
        debug!(user_id = id, "user row inserted");

        // Second precision, matching what a later read returns
        let created_at = DateTime::from_timestamp(created_at_secs, 0).unwrap_or(created_at);
        Ok(User { id, name: user.name, email: user.email, created_at })
    }

    fn update_password_hash(&self, user_id: i64, password_hash: &str) -> DomainResult<()> {
        let conn = self.db.get_connection()?;

        let updated = conn
            .execute(
                "UPDATE users SET password_hash = ?1 WHERE id = ?2",
                &[&password_hash, &user_id],
            )
            .map_err(InfraError::from)?;

        if updated == 0 {
            return Err(BitacoraError::UserNotFound(format!("user id {user_id}")));
        }
        Ok(())
    }
}

fn map_stored_user_row(row: &Row<'_>) -> rusqlite::Result<StoredUser> {
    let created_at_secs: i64 = row.get("created_at")?;
    let created_at = DateTime::from_timestamp(created_at_secs, 0).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Integer,
            format!("timestamp {created_at_secs} out of range").into(),
        )
    })?;

    Ok(StoredUser {
        user: User {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            created_at,
        },
        password_hash: row.get("password_hash")?,
    })
}
