//! Request debug log.
//!
//! When enabled, a timestamped line describing each write request is
//! appended to `<dir>/apiclient.log`, or printed to stderr when no usable
//! directory was configured. Failures to write are logged and ignored.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// File name used inside the debug directory.
pub const LOG_FILE_NAME: &str = "apiclient.log";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sink {
    Stderr,
    File(PathBuf),
}

/// Destination for request debug lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLog {
    sink: Sink,
}

impl DebugLog {
    /// Create a debug log. `dir` is only used when it is an existing
    /// directory; otherwise lines go to stderr.
    pub fn new(dir: Option<&Path>) -> Self {
        let sink = match dir {
            Some(dir) if dir.is_dir() => Sink::File(dir.join(LOG_FILE_NAME)),
            Some(dir) => {
                tracing::warn!(dir = %dir.display(), "debug directory not found, logging to stderr");
                Sink::Stderr
            }
            None => Sink::Stderr,
        };
        Self { sink }
    }

    /// Path of the log file, if logging to a file.
    pub fn file(&self) -> Option<&Path> {
        match &self.sink {
            Sink::File(path) => Some(path),
            Sink::Stderr => None,
        }
    }

    /// Append one timestamped line.
    pub async fn record(&self, message: &str) {
        let line = format!("{}: {}\n", Local::now().format("%b %d %H:%M:%S"), message);

        let written = match &self.sink {
            Sink::Stderr => tokio::io::stderr().write_all(line.as_bytes()).await,
            Sink::File(path) => append(path, &line).await,
        };
        if let Err(e) = written {
            tracing::warn!(sink = ?self.sink, error = %e, "failed to write debug log");
        }
    }
}

async fn append(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}
