use crate::harness::HarnessError;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Append only log of elapsed times.
/// Each run appends `"{seconds},"`, each batch ends with a newline.
pub struct TimesLog {
    path: PathBuf,
    output: BufWriter<File>,
}

impl TimesLog {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HarnessError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| HarnessError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "appending times");
        Ok(TimesLog {
            path,
            output: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushed right away so a killed sweep keeps its earlier times.
    pub fn record(&mut self, elapsed: Duration) -> Result<(), HarnessError> {
        write!(self.output, "{},", elapsed.as_secs_f64())
            .and_then(|_| self.output.flush())
            .map_err(|e| HarnessError::io(&self.path, e))
    }

    pub fn end_batch(&mut self) -> Result<(), HarnessError> {
        writeln!(self.output)
            .and_then(|_| self.output.flush())
            .map_err(|e| HarnessError::io(&self.path, e))
    }
}
