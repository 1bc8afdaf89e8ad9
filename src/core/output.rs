//! Output locations for a visualizer run.

use std::path::{Path, PathBuf};

use crate::core::Result;

pub fn ensure_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Path of the log file for the run started at `timestamp`
pub fn log_file_path(logs_dir: &Path, timestamp: &str) -> PathBuf {
    logs_dir.join(format!("MiningSimVisulizer_{timestamp}.log"))
}

/// Path of a rendered chart file, named after the chart title and the run
pub fn chart_file_path(dir: &Path, title: &str, timestamp: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}_{timestamp}.{extension}", title.replace(' ', "_")))
}
