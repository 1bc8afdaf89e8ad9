//! Error types for the visualizer.

use std::{fmt, path::PathBuf};
use thiserror::Error;

/// The wrapper for the error kind, with an optional hint.
#[derive(Debug)]
pub struct VisualizerError {
    kind: VisualizerErrorKind,
    hint: Option<String>,
}

/// All types of errors that can occur while building the report.
#[derive(Error, Debug)]
pub enum VisualizerErrorKind {
    #[error("Input file does not exist: {path}")]
    InputFileNotFound { path: PathBuf },

    #[error("The file '{path}' is empty")]
    EmptyCsv { path: PathBuf },

    #[error("Error parsing the CSV file '{path}': {source}")]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read the CSV file '{path}': {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("Invalid value '{value}' in column '{column}' at row {row} of {path}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
        path: PathBuf,
    },

    #[error("Chart generation error: {0}")]
    ChartGenerationError(#[from] charming::EchartsError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    LoggingInitError(#[from] tracing_subscriber::util::TryInitError),

    #[error("A log file is already attached, refusing to attach {path}")]
    LogFileAlreadyAttached { path: PathBuf },
}

impl VisualizerError {
    /// Attaches a hint to the error
    pub fn with_hint(mut self, hint: Option<impl Into<String>>) -> Self {
        if let Some(hint) = hint {
            self.hint = Some(hint.into());
        }
        self
    }

    pub fn kind(&self) -> &VisualizerErrorKind {
        &self.kind
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(hint_text) = &self.hint {
            write!(f, " ({hint_text})")?;
        }

        Ok(())
    }
}

impl std::error::Error for VisualizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Convert Error into VisualizerErrorKind
impl<E> From<E> for VisualizerError
where
    VisualizerErrorKind: From<E>,
{
    fn from(error: E) -> Self {
        VisualizerError {
            kind: VisualizerErrorKind::from(error),
            hint: None,
        }
    }
}

/// A convenient result type for the visualizer
pub type Result<T> = std::result::Result<T, VisualizerError>;
