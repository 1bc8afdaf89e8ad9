pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod platform;
pub mod utils;

pub use config::{GlobalConfig, VisualizeConfig};
pub use error::{Result, VisualizerError, VisualizerErrorKind};
pub use logging::LogFile;
