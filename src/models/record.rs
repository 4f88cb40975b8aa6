use super::cell::CellStatus;
use super::entry::LessonCardEntry;
use super::lesson_date::LessonDate;
use crate::errors::ModelError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One lesson-card cell in its flat wire shape, field for field as a data
/// source produces it.
///
/// - `date == D::ZERO` means the cell is empty.
/// - `replacement_date` is meaningful only when `replaced` is true; read it
///   through [`LessonCardRecord::replacement_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "WireRecord",
    into = "WireRecord",
    bound(serialize = "D: LessonDate", deserialize = "D: LessonDate")
)]
pub struct LessonCardRecord<D: LessonDate> {
    pub date: D,
    pub attended: bool,
    pub replaced: bool,
    pub replacement_date: Option<D>,
}

/// What to do with a row flagged `replaced` that has no replacement date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementPolicy {
    /// Reject the row.
    #[default]
    Strict,
    /// Keep the row as a plain scheduled lesson and log a warning.
    Lenient,
}

impl<D: LessonDate> LessonCardRecord<D> {
    pub fn new(date: D, attended: bool, replaced: bool, replacement_date: Option<D>) -> Self {
        Self {
            date,
            attended,
            replaced,
            replacement_date,
        }
    }

    /// The all-default row a producer writes into an empty cell.
    pub fn empty() -> Self {
        Self::new(D::ZERO, false, false, None)
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_zero()
    }

    /// Replacement date, hidden unless the lesson is actually replaced.
    pub fn replacement_date(&self) -> Option<D> {
        if self.replaced {
            self.replacement_date
        } else {
            None
        }
    }

    /// Convert into the tagged model, honoring `policy` for replaced rows
    /// lacking a usable replacement date.
    pub fn normalize(self, policy: ReplacementPolicy) -> Result<LessonCardEntry<D>, ModelError> {
        match (LessonCardEntry::try_from(self), policy) {
            (Err(ModelError::MissingReplacementDate { date }), ReplacementPolicy::Lenient) => {
                log::warn!("lesson on {date} marked replaced without a replacement date, kept as scheduled");
                Ok(LessonCardEntry::scheduled(self.date, self.attended))
            }
            (res, _) => res,
        }
    }

    /// The same row with the fields consumers must ignore cleared.
    pub fn canonical(self, policy: ReplacementPolicy) -> Result<Self, ModelError> {
        self.normalize(policy).map(Self::from)
    }

    pub fn status(&self, policy: ReplacementPolicy) -> Result<CellStatus<D>, ModelError> {
        self.normalize(policy).map(|entry| entry.status())
    }
}

impl<D: LessonDate> Default for LessonCardRecord<D> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Text-level rendition used by serde: dates stay strings until
/// [`LessonDate::parse`] runs, so one set of parsing rules covers JSON and
/// CSV alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecord {
    pub date: String,
    #[serde(default, deserialize_with = "flag")]
    pub attended: bool,
    #[serde(default, deserialize_with = "flag")]
    pub replaced: bool,
    #[serde(default)]
    pub replacement_date: Option<String>,
}

/// Boolean column as written by JSON, lowercase CSV or .NET's `True`/`False`.
/// An empty cell reads as false.
fn flag<'de, De: Deserializer<'de>>(deserializer: De) -> Result<bool, De::Error> {
    struct FlagVisitor;

    impl Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("true/false (any case), 1/0 or an empty cell")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match u64::try_from(v) {
                Ok(v) => self.visit_u64(v),
                Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" | "" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

impl<D: LessonDate> TryFrom<WireRecord> for LessonCardRecord<D> {
    type Error = ModelError;

    fn try_from(w: WireRecord) -> Result<Self, Self::Error> {
        let replacement_date = match w.replacement_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(D::parse(s)?),
        };
        Ok(Self::new(
            D::parse(&w.date)?,
            w.attended,
            w.replaced,
            replacement_date,
        ))
    }
}

impl<D: LessonDate> From<LessonCardRecord<D>> for WireRecord {
    fn from(r: LessonCardRecord<D>) -> Self {
        Self {
            date: r.date.to_wire(),
            attended: r.attended,
            replaced: r.replaced,
            replacement_date: r.replacement_date.map(|d| d.to_wire()),
        }
    }
}
