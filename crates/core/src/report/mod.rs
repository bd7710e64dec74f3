//! Flat text reports over a date range

pub mod format;
pub mod ports;
pub mod service;

pub use format::{format_activity_line, render_report};
pub use ports::ReportSink;
pub use service::{ReportService, ReportSummary};
