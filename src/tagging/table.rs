use serde::Serialize;

use crate::models::Entry;

/// Column headers shared by the table view and the CSV export.
pub const COLUMNS: [&str; 7] = [
    "Timestamp",
    "Play Name",
    "Call Type",
    "Caller",
    "Outcome",
    "Points",
    "2nd Chance?",
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub is_empty: bool,
}

pub fn render_table(entries: &[Entry]) -> TableView {
    TableView {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: entries.iter().map(Entry::to_row).collect(),
        is_empty: entries.is_empty(),
    }
}
