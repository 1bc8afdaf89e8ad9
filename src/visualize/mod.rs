//! Performance report for the mining simulation.
//!
//! Loads the truck and station statistics written by the simulator and renders
//! an unload count comparison and a time breakdown for each of them.

pub mod charts;
pub mod reshape;
pub mod table;

use std::time::Instant;

use crate::core::{
    GlobalConfig, LogFile, Result, VisualizeConfig,
    error::VisualizerErrorKind,
    output::{self, ensure_output_dir},
    platform, utils,
};
use charts::ChartOutput;
use table::Table;

pub const VEHICLE_ID_COLUMN: &str = "Vehicle ID";
pub const VEHICLE_ACTIVITY_COLUMNS: [&str; 3] = [
    "Percent Mining Time",
    "Percent Unloading Time",
    "Percent Travel Time",
];

pub const STATION_ID_COLUMN: &str = "Station ID";
pub const STATION_ACTIVITY_COLUMNS: [&str; 2] = ["Percent Idle Time", "Percent Unloading Time"];

/// Both input files have to exist before anything is written
pub fn validate_inputs(config: &VisualizeConfig) -> Result<()> {
    for path in [&config.trucks_csv, &config.stations_csv] {
        if !path.exists() {
            return Err(VisualizerErrorKind::InputFileNotFound { path: path.clone() }.into());
        }
    }
    Ok(())
}

/// Validate the inputs, set up the run directories and log file, then plot
/// the truck and the station statistics in turn.
pub fn run(global_config: GlobalConfig, config: VisualizeConfig, log_file: &LogFile) -> Result<()> {
    let started = Instant::now();
    validate_inputs(&config)?;

    let timestamp = utils::run_timestamp();
    let logs_dir = config.logs_dir();
    ensure_output_dir(&logs_dir)?;
    let log_path = output::log_file_path(&logs_dir, &timestamp);
    log_file.attach(&log_path)?;

    tracing::debug!("Logging to {}", log_path.display());
    tracing::debug!("Verbose: {}", global_config.verbose);
    tracing::debug!("Config: {:?}", config);
    if config.display {
        tracing::debug!("Charts are opened with '{}'", platform::opener_program());
    }

    tracing::info!("Generating mining simulation performance visualizations....");
    tracing::info!("Mining Truck Plots...");

    let plots_dir = config.plots_dir();
    ensure_output_dir(&plots_dir)?;
    let output = ChartOutput::new(plots_dir, timestamp, config.export_images, config.display)
        .with_pages_dir(config.pages_dir());

    let trucks = Table::from_csv(&config.trucks_csv)?;
    charts::plot_total_unloads_comparison(
        &trucks,
        VEHICLE_ID_COLUMN,
        "Total Number of Unloads by Vehicle ID",
        &output,
    )?;
    charts::plot_activity_comparison(
        &trucks,
        VEHICLE_ID_COLUMN,
        &VEHICLE_ACTIVITY_COLUMNS,
        "Percentage of Time Spent on Mining, Unloading, and Travel by Vehicle",
        &output,
    )?;

    tracing::info!("Unloading Station Plots...");

    let stations = Table::from_csv(&config.stations_csv)?;
    charts::plot_total_unloads_comparison(
        &stations,
        STATION_ID_COLUMN,
        "Total Number of Unloads by Station ID",
        &output,
    )?;
    charts::plot_activity_comparison(
        &stations,
        STATION_ID_COLUMN,
        &STATION_ACTIVITY_COLUMNS,
        "Percentage of Time Spent in Idle and Unloading States by Station",
        &output,
    )?;

    tracing::info!("Done! ({})", utils::format_elapsed(started.elapsed()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    const TRUCKS_CSV: &str = "\
Vehicle ID,Percent Mining Time,Percent Travel Time,Percent Unloading Time,Percent Idle Time,Total Mining Time (hrs),Total Unloads
0,62.50,27.08,3.47,6.94,45.00,12
1,59.72,29.17,4.17,6.94,43.00,14
";

    const STATIONS_CSV: &str = "\
Station ID,Percent Unloading Time,Percent Idle Time,Total Idle Time (hrs),Total Unloading Time (hrs),Total Unloads
0,35.50,64.50,46.44,25.56,21
";

    fn headless_config(dir: &Path, trucks: &str, stations: &str) -> VisualizeConfig {
        let trucks_csv = dir.join("trucks.csv");
        let stations_csv = dir.join("stations.csv");
        std::fs::write(&trucks_csv, trucks).unwrap();
        std::fs::write(&stations_csv, stations).unwrap();

        let mut config = VisualizeConfig::new(trucks_csv, stations_csv);
        config.results_dir = dir.join("results");
        config.display = false;
        config
    }

    fn log_files(config: &VisualizeConfig) -> Vec<std::path::PathBuf> {
        std::fs::read_dir(config.logs_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[test]
    fn test_validate_inputs_reports_missing_trucks_file_first() {
        let dir = tempdir().unwrap();
        let config = VisualizeConfig::new(dir.path().join("nope.csv"), dir.path().join("also_nope.csv"));

        let err = validate_inputs(&config).unwrap_err();

        match err.kind() {
            VisualizerErrorKind::InputFileNotFound { path } => {
                assert_eq!(path, &dir.path().join("nope.csv"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_with_missing_station_file_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut config = headless_config(dir.path(), TRUCKS_CSV, STATIONS_CSV);
        config.stations_csv = dir.path().join("missing.csv");
        let log_file = LogFile::new();

        let err = run(GlobalConfig::default(), config.clone(), &log_file).unwrap_err();

        assert!(matches!(err.kind(), VisualizerErrorKind::InputFileNotFound { .. }));
        assert!(!config.results_dir.exists());
        assert!(!log_file.is_attached());
    }

    #[test]
    fn test_run_creates_log_and_plot_dirs() {
        let dir = tempdir().unwrap();
        let config = headless_config(dir.path(), TRUCKS_CSV, STATIONS_CSV);
        let log_file = LogFile::new();

        run(GlobalConfig::default(), config.clone(), &log_file).unwrap();

        assert!(config.plots_dir().is_dir());
        assert!(log_file.is_attached());
        let logs = log_files(&config);
        assert_eq!(logs.len(), 1);
        let name = logs[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("MiningSimVisulizer_"));
        assert!(name.ends_with(".log"));
        // Export and display are off, so no chart files at all
        assert_eq!(std::fs::read_dir(config.plots_dir()).unwrap().count(), 0);
        assert!(!config.pages_dir().exists());
    }

    #[test]
    fn test_run_aborts_on_empty_trucks_file() {
        let dir = tempdir().unwrap();
        let config = headless_config(dir.path(), "", STATIONS_CSV);

        let err = run(GlobalConfig::default(), config, &LogFile::new()).unwrap_err();

        assert!(matches!(err.kind(), VisualizerErrorKind::EmptyCsv { .. }));
    }

    #[test]
    fn test_run_aborts_when_station_columns_are_missing() {
        let dir = tempdir().unwrap();
        let config = headless_config(dir.path(), TRUCKS_CSV, "Station ID,Total Unloads\n0,21\n");

        let err = run(GlobalConfig::default(), config, &LogFile::new()).unwrap_err();

        match err.kind() {
            VisualizerErrorKind::MissingColumn { column, .. } => {
                assert_eq!(column, "Percent Idle Time")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
