//! Main binary entrypoint for the mining simulation visualizer.
//!
//! Parses CLI arguments, sets up logging, and renders the performance charts.

use clap::Parser;
use mining_sim_visualizer::{
    core::{GlobalConfig, LogFile, VisualizeConfig, logging},
    visualize,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mining-sim-visualizer")]
#[command(about = "Mining Simulation Performance Visualization")]
struct Cli {
    #[arg(help = "Path to the csv containing mining truck performances.")]
    mining_trucks_csv_filepath: PathBuf,

    #[arg(help = "Path to the csv containing unloading station performances.")]
    unloading_stations_csv_filepath: PathBuf,

    #[arg(long, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(
        long,
        help = "Also save every chart as an SVG image under results/plots."
    )]
    export_images: bool,

    #[arg(long, help = "Do not open the charts in a browser.")]
    no_display: bool,
}

fn main() {
    // Parse input
    let cli = Cli::parse();

    // The file sink stays detached until the run has a log file
    let log_file = LogFile::new();
    if let Err(e) = logging::init(cli.verbose, &log_file) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let global_config = GlobalConfig {
        verbose: cli.verbose,
    };

    let mut visualize_config = VisualizeConfig::new(
        cli.mining_trucks_csv_filepath,
        cli.unloading_stations_csv_filepath,
    );
    visualize_config.export_images = cli.export_images;
    visualize_config.display = !cli.no_display;

    // If any step results in an error, print and exit
    if let Err(e) = visualize::run(global_config, visualize_config, &log_file) {
        tracing::error!("{e}");

        std::process::exit(1);
    }
}
