//! Console commands
//!
//! Each command calls one service and is logged through
//! [`execute_command`](crate::utils::command_helpers::execute_command).
//! Session requirements are checked by the menu before a command runs.

pub mod account;
pub mod activity;
pub mod report;

pub use account::{change_password, create_account, log_in, log_out};
pub use activity::{query_activities, record_activity};
pub use report::generate_report;
