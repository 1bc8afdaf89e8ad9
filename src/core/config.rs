use std::path::PathBuf;

/// Directory all run artifacts are written under, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "results";

#[derive(Debug, Clone, Default)]
pub struct GlobalConfig {
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct VisualizeConfig {
    pub trucks_csv: PathBuf,
    pub stations_csv: PathBuf,
    pub results_dir: PathBuf,
    pub export_images: bool,
    pub display: bool,
}

impl VisualizeConfig {
    pub fn new(trucks_csv: PathBuf, stations_csv: PathBuf) -> Self {
        Self {
            trucks_csv,
            stations_csv,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            export_images: false,
            display: true,
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.results_dir.join("visualizer_script_logs")
    }

    pub fn plots_dir(&self) -> PathBuf {
        self.results_dir.join("plots")
    }

    /// HTML pages handed to the browser
    pub fn pages_dir(&self) -> PathBuf {
        self.results_dir.join("charts")
    }
}
