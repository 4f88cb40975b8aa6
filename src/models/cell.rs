use super::lesson_date::LessonDate;
use serde::Serialize;

/// What a consumer reads off a lesson cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CellStatus<D: LessonDate> {
    Empty,
    Attended {
        date: D,
    },
    Missed {
        date: D,
    },
    Rescheduled {
        original_date: D,
        attended: bool,
        new_date: D,
    },
}

impl<D: LessonDate> CellStatus<D> {
    pub fn label(&self) -> &'static str {
        match self {
            CellStatus::Empty => "empty",
            CellStatus::Attended { .. } => "attended",
            CellStatus::Missed { .. } => "missed",
            CellStatus::Rescheduled { .. } => "rescheduled",
        }
    }

    /// Short marker for terminal listings.
    pub fn symbol(&self) -> &'static str {
        match self {
            CellStatus::Empty => "·",
            CellStatus::Attended { .. } => "✓",
            CellStatus::Missed { .. } => "✗",
            CellStatus::Rescheduled { .. } => "→",
        }
    }

    pub fn describe(&self, date_format: &str) -> String {
        match self {
            CellStatus::Empty => "empty cell".to_string(),
            CellStatus::Attended { date } => {
                format!("attended on {}", date.format_with(date_format))
            }
            CellStatus::Missed { date } => {
                format!("not attended on {}", date.format_with(date_format))
            }
            CellStatus::Rescheduled {
                attended, new_date, ..
            } => format!(
                "rescheduled, {} on original date, new date {}",
                if *attended { "attended" } else { "not attended" },
                new_date.format_with(date_format)
            ),
        }
    }
}
