use super::check::CheckOutcome;
use crate::models::{CellStatus, LessonDate};
use crate::utils::table::Table;
use serde::Serialize;

/// One line of a `show` listing.
#[derive(Debug, Clone, Serialize)]
pub struct CellLine<D: LessonDate + Serialize> {
    pub row: usize,
    #[serde(flatten)]
    pub status: CellStatus<D>,
    pub description: String,
}

pub struct ShowLogic;

impl ShowLogic {
    pub fn lines<D: LessonDate + Serialize>(
        outcome: &CheckOutcome<D>,
        date_format: &str,
    ) -> Vec<CellLine<D>> {
        outcome
            .entries
            .iter()
            .map(|(row, entry)| {
                let status = entry.status();
                CellLine {
                    row: *row,
                    status,
                    description: status.describe(date_format),
                }
            })
            .collect()
    }

    /// Text table: row number, marker, date, description.
    pub fn render<D: LessonDate + Serialize>(outcome: &CheckOutcome<D>, date_format: &str) -> String {
        let mut table = Table::with_headers(&["#", "", "date", "cell"]);
        for (row, entry) in &outcome.entries {
            let status = entry.status();
            table.add_row(vec![
                row.to_string(),
                status.symbol().to_string(),
                entry
                    .date()
                    .map(|d| d.format_with(date_format))
                    .unwrap_or_default(),
                status.describe(date_format),
            ]);
        }
        table.render()
    }

    pub fn render_json<D: LessonDate + Serialize>(
        outcome: &CheckOutcome<D>,
        date_format: &str,
    ) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::lines(outcome, date_format))
    }
}
