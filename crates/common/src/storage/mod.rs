//! Storage primitives for SQLite databases
//!
//! This module provides pooled SQLite access shared by the infrastructure
//! repositories.

pub mod error;
pub mod sqlite;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use sqlite::{apply_connection_pragmas, SqliteConnection, SqlitePool, SqlitePoolConfig};
