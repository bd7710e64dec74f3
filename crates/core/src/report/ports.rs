//! Port interface for report output

use bitacora_domain::Result;

/// Named destination accepting report lines
pub trait ReportSink: Send + Sync {
    /// Write `lines` to `destination`, replacing any previous content.
    ///
    /// Returns a human readable location of what was written (for a file
    /// sink, its full path). Failures must be reported as
    /// `BitacoraError::Report`.
    fn write(&self, destination: &str, lines: &[String]) -> Result<String>;
}
