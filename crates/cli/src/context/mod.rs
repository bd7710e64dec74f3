//! Application context - dependency injection container

use std::sync::Arc;

use bitacora_core::{
    ActivityRepository, ActivityService, CredentialService, ReportService, Session,
    SessionStore, UserRepository,
};
use bitacora_domain::{Config, Result};
use bitacora_infra::{
    Argon2CredentialHasher, DbManager, FileReportSink, JsonFileSessionStore,
    SqliteActivityRepository, SqliteUserRepository,
};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub activities: Arc<ActivityService>,
    pub reports: Arc<ReportService>,
    pub credentials: Arc<CredentialService>,
    pub users: Arc<dyn UserRepository>,
    pub session_store: Arc<dyn SessionStore>,
}

impl AppContext {
    /// Open the database, run migrations and wire the services.
    pub fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::open(&config.database)?);

        let activity_repo: Arc<dyn ActivityRepository> =
            Arc::new(SqliteActivityRepository::new(db.clone()));
        let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(db.clone()));
        let sink = Arc::new(FileReportSink::new(&config.report.output_dir));
        let session_store: Arc<dyn SessionStore> =
            Arc::new(JsonFileSessionStore::new(&config.session.path));

        let activities = Arc::new(ActivityService::new(activity_repo.clone()));
        let reports = Arc::new(ReportService::new(activity_repo, sink));
        let hasher = Arc::new(Argon2CredentialHasher::new());
        let credentials = Arc::new(CredentialService::new(users.clone(), hasher));

        info!(
            db_path = %db.path().display(),
            session_path = %config.session.path,
            reports_dir = %config.report.output_dir,
            "Application context initialized"
        );

        Ok(Self { config, db, activities, reports, credentials, users, session_store })
    }

    /// Session resumed from the side file left by a previous run, provided
    /// its user still exists in this database
    pub fn restore_session(&self) -> Session {
        Session::restore(self.session_store.clone(), self.users.as_ref())
    }
}
