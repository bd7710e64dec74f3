//! SQLite connection pool
//!
//! Provides r2d2-based connection pooling for SQLite databases.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info, instrument, warn};

use super::config::SqlitePoolConfig;
use super::connection::SqliteConnection;
use super::pragmas::apply_connection_pragmas;
use crate::storage::error::{StorageError, StorageResult};

/// SQLite connection pool
///
/// Every connection handed out has the configured pragmas applied. Schema
/// management belongs to the application layer.
#[derive(Debug)]
pub struct SqlitePool {
    pool: Pool<SqliteConnectionManager>,
    config: SqlitePoolConfig,
}

impl SqlitePool {
    /// Create a new connection pool for the database file at `path`
    ///
    /// Missing parent directories are created. The first connection is
    /// acquired eagerly so an unusable path fails here rather than on first
    /// query.
    #[instrument(fields(db_path = ?path, pool_size = config.max_size))]
    pub fn new(path: &Path, config: SqlitePoolConfig) -> StorageResult<Self> {
        if config.max_size == 0 {
            return Err(StorageError::InvalidConfig("pool size must be at least 1".to_string()));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!("Creating SQLite connection pool");

        let pool_config = config.clone();
        let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
            apply_connection_pragmas(conn, &pool_config)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
        });

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| {
                warn!("Failed to create connection pool: {}", e);
                StorageError::Connection(format!("Failed to create pool: {}", e))
            })?;

        info!("SQLite pool created with {} connections", config.max_size);

        Ok(Self { pool, config })
    }

    /// Get a connection from the pool
    #[instrument(skip(self), fields(pool_size = self.config.max_size))]
    pub fn get_connection(&self) -> StorageResult<SqliteConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                debug!("Connection acquired in {}ms", start.elapsed().as_millis());
                Ok(SqliteConnection::new(conn))
            }
            Err(e) => {
                warn!("Failed to acquire connection: {}", e);
                let state = self.pool.state();
                if state.idle_connections == 0 && state.connections >= self.config.max_size {
                    Err(StorageError::PoolExhausted)
                } else {
                    Err(StorageError::Connection(e.to_string()))
                }
            }
        }
    }

    /// Run a trivial query to confirm the database answers
    pub fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        let one: i64 = conn.query_row("SELECT 1", &[], |row| row.get(0))?;
        if one == 1 {
            Ok(())
        } else {
            Err(StorageError::Query(format!("health check returned {one}")))
        }
    }

    /// Pool configuration
    pub fn config(&self) -> &SqlitePoolConfig {
        &self.config
    }
}
