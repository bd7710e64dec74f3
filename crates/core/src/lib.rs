//! # Bitacora Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - Services for activities, reports, credentials and sessions
//!
//! ## Architecture Principles
//! - Only depends on `bitacora-common` and `bitacora-domain`
//! - No database, filesystem, or platform code
//! - All external dependencies via traits
//! - Ports are synchronous; each service call performs at most one
//!   persistence operation after validation

pub mod activity;
pub mod credentials;
pub mod report;
pub mod session;

pub use activity::ports::ActivityRepository;
pub use activity::ActivityService;
pub use credentials::ports::{CredentialHasher, UserRepository};
pub use credentials::CredentialService;
pub use report::ports::ReportSink;
pub use report::{ReportService, ReportSummary};
pub use session::ports::SessionStore;
pub use session::Session;
