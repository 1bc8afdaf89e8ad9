//! Wide to long reshaping of the percentage breakdown columns.

use crate::{core::Result, visualize::table::Table};

/// One (entity, activity, value) triple of the long format.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: String,
    pub activity: String,
    pub percentage: f64,
}

/// Unpivot `activity_columns` into one record per source row and activity.
///
/// Records come out row by row, and within a row in the order of
/// `activity_columns`.
pub fn melt(table: &Table, id_column: &str, activity_columns: &[&str]) -> Result<Vec<ActivityRecord>> {
    let id_index = table.column_index(id_column)?;
    let activity_indices = activity_columns
        .iter()
        .map(|column| table.column_index(column))
        .collect::<Result<Vec<usize>>>()?;

    let mut records = Vec::with_capacity(table.len() * activity_columns.len());
    for (row, cells) in table.rows().iter().enumerate() {
        let id = cells.get(id_index).cloned().unwrap_or_default();
        for (activity, &index) in activity_columns.iter().zip(&activity_indices) {
            records.push(ActivityRecord {
                id: id.clone(),
                activity: activity.to_string(),
                percentage: table.parse_cell(cells, index, activity, row)?,
            });
        }
    }

    tracing::debug!(
        "Reshaped {} rows into {} activity records",
        table.len(),
        records.len()
    );

    Ok(records)
}
