//! # Bitacora CLI
//!
//! Console front-end for the activity log.
//!
//! This crate contains:
//! - Console commands (menu → core services)
//! - Application context (dependency injection)
//! - Tracing initialisation and command logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the SQLite adapters into the core services
//! - The binary `bitacora` parses arguments and runs [`menu::Menu`] over
//!   stdin/stdout

pub mod commands;
pub mod context;
pub mod menu;
pub mod utils;

pub use context::AppContext;
pub use menu::{Menu, MenuOption};
