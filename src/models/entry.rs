use super::cell::CellStatus;
use super::lesson_date::LessonDate;
use super::record::LessonCardRecord;
use crate::errors::ModelError;
use serde::{Deserialize, Serialize};

/// One cell of a lesson card.
///
/// Serializes to the flat record shape (`date`, `attended`, `replaced`,
/// `replacementDate`), so it can be read straight from producer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "LessonCardRecord<D>",
    into = "LessonCardRecord<D>",
    bound(serialize = "D: LessonDate", deserialize = "D: LessonDate")
)]
pub enum LessonCardEntry<D: LessonDate> {
    /// No lesson in this cell.
    Empty,
    Scheduled {
        date: D,
        attended: bool,
    },
    /// Moved from `original_date` to `new_date`; `attended` refers to the
    /// original date.
    Rescheduled {
        original_date: D,
        attended: bool,
        new_date: D,
    },
}

impl<D: LessonDate> LessonCardEntry<D> {
    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn scheduled(date: D, attended: bool) -> Self {
        Self::Scheduled { date, attended }
    }

    pub fn rescheduled(original_date: D, attended: bool, new_date: D) -> Self {
        Self::Rescheduled {
            original_date,
            attended,
            new_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Scheduled (original) date of the lesson, `None` for an empty cell.
    pub fn date(&self) -> Option<D> {
        match self {
            Self::Empty => None,
            Self::Scheduled { date, .. } => Some(*date),
            Self::Rescheduled { original_date, .. } => Some(*original_date),
        }
    }

    pub fn attended(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Scheduled { attended, .. } | Self::Rescheduled { attended, .. } => *attended,
        }
    }

    pub fn replaced(&self) -> bool {
        matches!(self, Self::Rescheduled { .. })
    }

    pub fn replacement_date(&self) -> Option<D> {
        match self {
            Self::Rescheduled { new_date, .. } => Some(*new_date),
            _ => None,
        }
    }

    pub fn status(&self) -> CellStatus<D> {
        match *self {
            Self::Empty => CellStatus::Empty,
            Self::Scheduled {
                date,
                attended: true,
            } => CellStatus::Attended { date },
            Self::Scheduled {
                date,
                attended: false,
            } => CellStatus::Missed { date },
            Self::Rescheduled {
                original_date,
                attended,
                new_date,
            } => CellStatus::Rescheduled {
                original_date,
                attended,
                new_date,
            },
        }
    }
}

impl<D: LessonDate> Default for LessonCardEntry<D> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<D: LessonDate> TryFrom<LessonCardRecord<D>> for LessonCardEntry<D> {
    type Error = ModelError;

    fn try_from(r: LessonCardRecord<D>) -> Result<Self, Self::Error> {
        if r.is_empty() {
            return Ok(Self::Empty);
        }
        if !r.replaced {
            return Ok(Self::scheduled(r.date, r.attended));
        }
        match r.replacement_date {
            Some(new_date) if !new_date.is_zero() => {
                Ok(Self::rescheduled(r.date, r.attended, new_date))
            }
            _ => Err(ModelError::MissingReplacementDate {
                date: r.date.to_wire(),
            }),
        }
    }
}

impl<D: LessonDate> From<LessonCardEntry<D>> for LessonCardRecord<D> {
    fn from(e: LessonCardEntry<D>) -> Self {
        match e {
            LessonCardEntry::Empty => LessonCardRecord::empty(),
            LessonCardEntry::Scheduled { date, attended } => {
                LessonCardRecord::new(date, attended, false, None)
            }
            LessonCardEntry::Rescheduled {
                original_date,
                attended,
                new_date,
            } => LessonCardRecord::new(original_date, attended, true, Some(new_date)),
        }
    }
}
