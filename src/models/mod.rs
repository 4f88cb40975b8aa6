//! Lesson-card cell model: the flat wire record, the tagged entry and the
//! consumer-side cell status.

pub mod cell;
pub mod entry;
pub mod lesson_date;
pub mod record;

pub use cell::CellStatus;
pub use entry::LessonCardEntry;
pub use lesson_date::{DateGranularity, LessonDate};
pub use record::{LessonCardRecord, ReplacementPolicy, WireRecord};
