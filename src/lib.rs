pub mod core;
pub mod visualize;

pub use crate::core::error::{Result, VisualizerError, VisualizerErrorKind};
pub use crate::core::{GlobalConfig, LogFile, VisualizeConfig};
