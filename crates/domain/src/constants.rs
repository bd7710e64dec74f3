//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Validation
/// Accepted date layout, `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Exact length of a date in [`DATE_FORMAT`]
pub const DATE_INPUT_LENGTH: usize = 10;
/// Minimum password length at account creation, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Reports
/// First words of the report header line
pub const REPORT_HEADER: &str = "Activity report";
/// Written instead of activity lines when the range is empty
pub const EMPTY_REPORT_MESSAGE: &str = "No activities recorded in this date range.";
/// Used by the console when no report name is typed
pub const DEFAULT_REPORT_NAME: &str = "report.txt";
/// Report destinations: word characters, plain spaces and hyphens, then a
/// three-letter extension
pub const REPORT_NAME_PATTERN: &str = r"^[\w -]+\.[A-Za-z]{3}$";
/// Rendered in report lines for empty optional fields
pub const EMPTY_FIELD_MARKER: &str = "-";

// Defaults for configuration
/// SQLite file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "bitacora.db";
/// Connections kept by the pool
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
/// Session side file
pub const DEFAULT_SESSION_PATH: &str = "session.json";
/// Directory report files are written into
pub const DEFAULT_REPORTS_DIR: &str = "reports";
/// Tracing filter used when neither config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
