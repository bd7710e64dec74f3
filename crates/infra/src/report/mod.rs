//! Report output adapters

mod file_sink;

pub use file_sink::FileReportSink;
