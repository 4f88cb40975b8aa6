use crate::errors::ModelError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Write};
use std::hash::Hash;

/// Day-granularity zero value: `0001-01-01`, the .NET `default(DateTime)` date.
pub const ZERO_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(d) => d,
    None => panic!("0001-01-01 is a valid calendar date"),
};

pub const ZERO_DATETIME: NaiveDateTime = NaiveDateTime::new(ZERO_DATE, NaiveTime::MIN);

const TIMESTAMP_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Which date type the cells are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateGranularity {
    /// Calendar date only (`YYYY-MM-DD`)
    #[default]
    Day,
    /// Full date and time (`YYYY-MM-DDTHH:MM:SS`)
    Timestamp,
}

impl DateGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateGranularity::Day => "day",
            DateGranularity::Timestamp => "timestamp",
        }
    }
}

impl Display for DateGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date usable as the key of a lesson cell.
///
/// The cell model is generic over this trait so that callers can choose
/// between day and timestamp granularity. `ZERO` is the value a producer
/// writes into an empty cell.
pub trait LessonDate: Copy + Eq + Ord + Hash + Debug + Display {
    const ZERO: Self;
    const GRANULARITY: DateGranularity;

    /// Parse from wire text. Accepts date-only and timestamp inputs.
    fn parse(s: &str) -> Result<Self, ModelError>;

    /// Canonical wire text.
    fn to_wire(&self) -> String;

    /// Strftime rendering; falls back to the wire text on a broken pattern.
    fn format_with(&self, fmt: &str) -> String;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Offset-carrying timestamps keep their wall-clock reading: a lesson at
/// `2024-03-01T00:00:00+01:00` is on March 1st, not February 29th.
fn parse_offset_timestamp(s: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
        .map(|dt| dt.naive_local())
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    parse_offset_timestamp(s).or_else(|| {
        let s = s.trim_end_matches('Z');
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    })
}

fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn render<T: Display>(formatted: T) -> Option<String> {
    let mut out = String::new();
    write!(out, "{formatted}").ok().map(|_| out)
}

impl LessonDate for NaiveDate {
    const ZERO: Self = ZERO_DATE;
    const GRANULARITY: DateGranularity = DateGranularity::Day;

    fn parse(s: &str) -> Result<Self, ModelError> {
        let s = s.trim();
        parse_day(s)
            .or_else(|| parse_timestamp(s).map(|dt| dt.date()))
            .ok_or_else(|| ModelError::InvalidDate(s.to_string()))
    }

    fn to_wire(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }

    fn format_with(&self, fmt: &str) -> String {
        render(self.format(fmt)).unwrap_or_else(|| self.to_wire())
    }
}

impl LessonDate for NaiveDateTime {
    const ZERO: Self = ZERO_DATETIME;
    const GRANULARITY: DateGranularity = DateGranularity::Timestamp;

    fn parse(s: &str) -> Result<Self, ModelError> {
        let s = s.trim();
        parse_timestamp(s)
            .or_else(|| parse_day(s).map(|d| d.and_time(NaiveTime::MIN)))
            .ok_or_else(|| ModelError::InvalidDate(s.to_string()))
    }

    fn to_wire(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    fn format_with(&self, fmt: &str) -> String {
        render(self.format(fmt)).unwrap_or_else(|| self.to_wire())
    }
}

/// True when `fmt` is a strftime pattern chrono can render.
pub fn is_valid_format(fmt: &str) -> bool {
    !fmt.is_empty() && !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}
