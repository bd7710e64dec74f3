//! Database implementations

pub mod activity_repository;
pub mod manager;
pub mod user_repository;

pub use activity_repository::SqliteActivityRepository;
pub use manager::DbManager;
pub use user_repository::SqliteUserRepository;
