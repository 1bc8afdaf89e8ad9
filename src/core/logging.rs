//! Console and log file output.
//!
//! Logging is installed before anything else runs. The file sink starts out
//! detached and only receives lines once [`LogFile::attach`] has been called,
//! so runs that fail input validation leave no trace under the results directory.

use std::{
    fs::File,
    io,
    path::Path,
    sync::{Arc, OnceLock},
};

use chrono::Local;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{
        self,
        format::Writer,
        time::FormatTime,
        writer::{EitherWriter, MakeWriter},
    },
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::core::{Result, error::VisualizerErrorKind};

/// Shared handle to the log file sink.
#[derive(Debug, Clone, Default)]
pub struct LogFile {
    file: Arc<OnceLock<File>>,
}

impl LogFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the file at `path` and route all further log lines to it
    pub fn attach(&self, path: &Path) -> Result<()> {
        if self.is_attached() {
            return Err(VisualizerErrorKind::LogFileAlreadyAttached {
                path: path.to_path_buf(),
            }
            .into());
        }

        let file = File::create(path)?;
        self.file
            .set(file)
            .map_err(|_| VisualizerErrorKind::LogFileAlreadyAttached {
                path: path.to_path_buf(),
            })?;
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.file.get().is_some()
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = EitherWriter<&'a File, io::Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.file.get() {
            Some(file) => EitherWriter::A(file),
            None => EitherWriter::B(io::sink()),
        }
    }
}

/// Local wall clock timestamps, millisecond precision
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Install the global subscriber writing to stdout and to `log_file`
pub fn init(verbose: bool, log_file: &LogFile) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose))
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(LocalTimestamp)
                .with_writer(io::stdout),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_timer(LocalTimestamp)
                .with_writer(log_file.clone()),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detached_log_file_discards_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        let log_file = LogFile::new();
        assert!(!log_file.is_attached());

        log_file.make_writer().write_all(b"before attach\n").unwrap();
        log_file.attach(&path).unwrap();
        log_file.make_writer().write_all(b"after attach\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("before attach"));
        assert_eq!(content, "after attach\n");
    }

    #[test]
    fn test_attached_log_file_receives_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        let log_file = LogFile::new();

        log_file.attach(&path).unwrap();
        assert!(log_file.is_attached());

        let shared = log_file.clone();
        shared.make_writer().write_all(b"hello log\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hello log\n");
    }

    #[test]
    fn test_attach_twice_fails() {
        let dir = tempdir().unwrap();
        let log_file = LogFile::new();
        log_file.attach(&dir.path().join("first.log")).unwrap();

        let err = log_file.attach(&dir.path().join("second.log")).unwrap_err();
        assert!(matches!(
            err.kind(),
            VisualizerErrorKind::LogFileAlreadyAttached { .. }
        ));
        assert!(!dir.path().join("second.log").exists());
    }

    #[test]
    fn test_level_filter_follows_verbosity() {
        assert_eq!(level_filter(true), LevelFilter::DEBUG);
        assert_eq!(level_filter(false), LevelFilter::INFO);
    }
}
