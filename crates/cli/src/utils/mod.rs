//! Helpers shared by the console commands

pub mod command_helpers;
pub mod logging;
