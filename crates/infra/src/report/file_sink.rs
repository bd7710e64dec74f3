//! Writes reports as UTF-8 text files inside an output directory

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bitacora_core::ReportSink;
use bitacora_domain::{BitacoraError, Result};
use tracing::{info, warn};

/// `ReportSink` that writes one file per destination name.
///
/// Destination names are joined onto `output_dir`, which is created on first
/// write. Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    output_dir: PathBuf,
}

impl FileReportSink {
    /// Sink writing into `output_dir`, created on first write
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(fs::File::create(path)?);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

impl ReportSink for FileReportSink {
    fn write(&self, destination: &str, lines: &[String]) -> Result<String> {
        let path = self.output_dir.join(destination);

        fs::create_dir_all(&self.output_dir)
            .and_then(|()| Self::write_lines(&path, lines))
            .map_err(|e| {
                warn!(path = %path.display(), error = %e, "report write failed");
                BitacoraError::Report(format!("could not write {}: {e}", path.display()))
            })?;

        info!(path = %path.display(), lines = lines.len(), "report written");
        Ok(path.display().to_string())
    }
}
