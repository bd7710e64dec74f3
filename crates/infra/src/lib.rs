//! # Bitacora Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite database manager and repositories
//! - Text report file sink
//! - JSON session side file
//! - Argon2 credential hasher
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `bitacora-core`
//! - Contains all "impure" code (filesystem and database I/O)

pub mod config;
pub mod database;
pub mod errors;
pub mod report;
pub mod security;
pub mod session;

// Re-export commonly used items
pub use database::{DbManager, SqliteActivityRepository, SqliteUserRepository};
pub use errors::InfraError;
pub use report::FileReportSink;
pub use security::Argon2CredentialHasher;
pub use session::JsonFileSessionStore;
