use std::path::{Path, PathBuf};

use charming::{
    Chart, HtmlRenderer, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, Tooltip, Trigger},
    series::Bar,
    theme::Theme,
};

use crate::{
    core::{Result, output, platform},
    visualize::{reshape, table::Table},
};

pub const TOTAL_UNLOADS_COLUMN: &str = "Total Unloads";
const PERCENTAGE_AXIS_NAME: &str = "Percentage of Total Time (%)";

/// Where the rendered charts go: the browser, the plots directory, or both.
///
/// Pages opened in the browser are kept in `pages_dir`, which defaults to the
/// plots directory.
#[derive(Debug, Clone)]
pub struct ChartOutput {
    plots_dir: PathBuf,
    pages_dir: PathBuf,
    timestamp: String,
    export_images: bool,
    display: bool,
}

impl ChartOutput {
    pub fn new(plots_dir: PathBuf, timestamp: String, export_images: bool, display: bool) -> Self {
        Self {
            pages_dir: plots_dir.clone(),
            plots_dir,
            timestamp,
            export_images,
            display,
        }
    }

    pub fn with_pages_dir(mut self, pages_dir: PathBuf) -> Self {
        self.pages_dir = pages_dir;
        self
    }

    pub fn plots_dir(&self) -> &Path {
        &self.plots_dir
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Show and/or export a finished chart
    pub fn present(&self, chart: &Chart, title: &str) -> Result<()> {
        if self.display {
            let page = self.write_page(chart, title)?;

            // The viewer is best effort, headless machines have no browser
            if let Err(e) = platform::open_in_browser(&page) {
                tracing::warn!("Could not open {} in a browser: {e}", page.display());
            }
        }

        if self.export_images {
            let path = output::chart_file_path(&self.plots_dir, title, &self.timestamp, "svg");
            let mut renderer = ImageRenderer::new(1000, 600).theme(Theme::Walden);
            renderer.save(chart, &path)?;
            tracing::info!("Chart saved to {}", path.display());
        } else {
            tracing::debug!("Image export disabled, not saving '{title}'");
        }

        Ok(())
    }

    /// Write the chart as a standalone HTML page named after its title and the run
    pub fn write_page(&self, chart: &Chart, title: &str) -> Result<PathBuf> {
        let html = HtmlRenderer::new(title, 1000, 600).render(chart)?;

        output::ensure_output_dir(&self.pages_dir)?;
        let path = output::chart_file_path(&self.pages_dir, title, &self.timestamp, "html");
        std::fs::write(&path, html)?;
        tracing::debug!("Chart page written to {}", path.display());

        Ok(path)
    }
}

/// Single series bar chart of the unload count per entity
pub fn total_unloads_chart(table: &Table, id_column: &str, title: &str) -> Result<Chart> {
    let ids = table.text_column(id_column)?;
    let unloads = table.numeric_column(TOTAL_UNLOADS_COLUMN)?;

    let chart = base_chart(title, id_column, ids)
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(TOTAL_UNLOADS_COLUMN),
        )
        .series(Bar::new().name(TOTAL_UNLOADS_COLUMN).data(unloads));

    Ok(chart)
}

/// Grouped bar chart with one bar per activity next to each other for every entity.
///
/// Series, and so legend entries and colors, follow the order of `activity_columns`.
pub fn activity_chart(
    table: &Table,
    id_column: &str,
    activity_columns: &[&str],
    title: &str,
) -> Result<Chart> {
    let ids = table.text_column(id_column)?;
    let records = reshape::melt(table, id_column, activity_columns)?;

    let mut chart = base_chart(title, id_column, ids)
        .legend(Legend::new().top("bottom"))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(PERCENTAGE_AXIS_NAME),
        );

    for (offset, activity) in activity_columns.iter().enumerate() {
        let percentages: Vec<f64> = records
            .iter()
            .skip(offset)
            .step_by(activity_columns.len())
            .map(|record| record.percentage)
            .collect();
        chart = chart.series(Bar::new().name(*activity).data(percentages));
    }

    Ok(chart)
}

fn base_chart(title: &str, id_column: &str, ids: Vec<String>) -> Chart {
    Chart::new()
        .title(Title::new().text(title))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(id_column)
                .data(ids),
        )
}

pub fn plot_total_unloads_comparison(
    table: &Table,
    id_column: &str,
    title: &str,
    output: &ChartOutput,
) -> Result<()> {
    tracing::debug!("Plotting '{title}' from {}", table.path().display());
    let chart = total_unloads_chart(table, id_column, title)?;
    output.present(&chart, title)
}

pub fn plot_activity_comparison(
    table: &Table,
    id_column: &str,
    activity_columns: &[&str],
    title: &str,
    output: &ChartOutput,
) -> Result<()> {
    tracing::debug!(
        "Plotting '{title}' for activities {:?} from {}",
        activity_columns,
        table.path().display()
    );
    let chart = activity_chart(table, id_column, activity_columns, title)?;
    output.present(&chart, title)
}
