//! Utility functions for the visualizer.

use std::time::Duration;

use chrono::Local;

/// Timestamp identifying a run, used in log and chart file names
pub fn run_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Short human readable run time, with millisecond resolution below a minute
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    match millis {
        0..1_000 => format!("{millis}ms"),
        1_000..60_000 => format!("{:.2}s", elapsed.as_secs_f64()),
        _ => {
            let secs = elapsed.as_secs();
            format!("{}m{:02}s", secs / 60, secs % 60)
        }
    }
}
