//! Shared test helpers for `bitacora-core` integration tests.
//!
//! In-memory implementations of every core port so service tests can focus
//! on behaviour instead of storage.

#![allow(dead_code)]

pub mod repositories;

use bitacora_domain::ActivityFields;
#[allow(unused_imports)]
pub use repositories::{
    FailingReportSink, InMemoryActivityRepository, InMemorySessionStore, InMemoryUserRepository,
    PlainHasher, RecordingReportSink,
};

/// Valid activity input for the given date
pub fn activity_fields(date: &str) -> ActivityFields {
    ActivityFields {
        date: date.to_string(),
        supervisor: "Juan Pérez".to_string(),
        description: "Concrete pour, level 2 slab".to_string(),
        attachments: None,
        responsible: "Ana Gómez".to_string(),
        weather: Some("Sunny".to_string()),
        recorded_by: None,
    }
}
