//! Reading and writing lesson-card rows as JSON or CSV.

mod csv_file;
mod json_file;
mod overwrite;

pub use overwrite::{WritePlan, confirm_overwrite, confirm_overwrite_from};

use crate::errors::{AppError, AppResult};
use crate::models::{LessonCardRecord, LessonDate, WireRecord};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Column order shared by CSV headers and tabular listings.
pub const HEADERS: [&str; 4] = ["date", "attended", "replaced", "replacementDate"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InterchangeFormat {
    Csv,
    Json,
}

impl InterchangeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterchangeFormat::Csv => "csv",
            InterchangeFormat::Json => "json",
        }
    }

    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(InterchangeFormat::Csv),
            "json" => Ok(InterchangeFormat::Json),
            _ => Err(AppError::UnknownFormat(path.display().to_string())),
        }
    }

    /// Explicit choice first, then the extension, then `fallback`.
    pub fn resolve(explicit: Option<Self>, path: &Path, fallback: Self) -> Self {
        explicit
            .or_else(|| Self::from_path(path).ok())
            .unwrap_or(fallback)
    }
}

impl fmt::Display for InterchangeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read rows without interpreting dates, so callers can report per-row failures.
pub fn read_rows(path: &Path, format: InterchangeFormat) -> AppResult<Vec<WireRecord>> {
    let rows = match format {
        InterchangeFormat::Csv => csv_file::read_csv(path)?,
        InterchangeFormat::Json => json_file::read_json(path)?,
    };
    log::debug!("read {} row(s) from {} as {}", rows.len(), path.display(), format);
    Ok(rows)
}

/// Read and parse every row, stopping at the first malformed one.
pub fn read_records<D: LessonDate>(
    path: &Path,
    format: InterchangeFormat,
) -> AppResult<Vec<LessonCardRecord<D>>> {
    read_rows(path, format)?
        .into_iter()
        .map(|row| LessonCardRecord::try_from(row).map_err(AppError::from))
        .collect()
}

pub fn write_records<D: LessonDate>(
    path: &Path,
    format: InterchangeFormat,
    records: &[LessonCardRecord<D>],
) -> AppResult<()> {
    let rows: Vec<WireRecord> = records.iter().copied().map(WireRecord::from).collect();
    match format {
        InterchangeFormat::Csv => csv_file::write_csv(path, &rows)?,
        InterchangeFormat::Json => json_file::write_json(path, &rows)?,
    }
    log::debug!("wrote {} row(s) to {} as {}", rows.len(), path.display(), format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_out(name: &str, ext: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{name}_lessoncard.{ext}"));
        fs::remove_file(&path).ok();
        path
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Vec<LessonCardRecord<NaiveDate>> {
        vec![
            LessonCardRecord::new(d(2024, 3, 1), true, false, None),
            LessonCardRecord::new(d(2024, 3, 1), false, true, Some(d(2024, 3, 8))),
            LessonCardRecord::empty(),
        ]
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            InterchangeFormat::from_path(Path::new("card.CSV")).unwrap(),
            InterchangeFormat::Csv
        );
        assert!(InterchangeFormat::from_path(Path::new("card.txt")).is_err());
        assert_eq!(
            InterchangeFormat::resolve(None, Path::new("card"), InterchangeFormat::Json),
            InterchangeFormat::Json
        );
        assert_eq!(
            InterchangeFormat::resolve(
                Some(InterchangeFormat::Csv),
                Path::new("card.json"),
                InterchangeFormat::Json
            ),
            InterchangeFormat::Csv
        );
    }

    #[test]
    fn csv_file_keeps_rows() {
        let path = temp_out("interchange_csv", "csv");
        write_records(&path, InterchangeFormat::Csv, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("date,attended,replaced,replacementDate"));
        assert!(content.contains("2024-03-01,false,true,2024-03-08"));

        let back = read_records::<NaiveDate>(&path, InterchangeFormat::Csv).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn json_file_keeps_rows() {
        let path = temp_out("interchange_json", "json");
        write_records(&path, InterchangeFormat::Json, &sample()).unwrap();
        let back = read_records::<NaiveDate>(&path, InterchangeFormat::Json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn empty_csv_still_has_header() {
        let path = temp_out("interchange_empty", "csv");
        write_records::<NaiveDate>(&path, InterchangeFormat::Csv, &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap().trim(),
            "date,attended,replaced,replacementDate"
        );
        assert!(read_rows(&path, InterchangeFormat::Csv).unwrap().is_empty());
    }

    #[test]
    fn dotnet_csv_flags() {
        let path = temp_out("interchange_dotnet", "csv");
        fs::write(
            &path,
            "date,attended,replaced,replacementDate\n2024-03-01T00:00:00+01:00,True,False,\n2024-03-08,FALSE,TRUE,2024-03-09\n",
        )
        .unwrap();

        let back = read_records::<NaiveDate>(&path, InterchangeFormat::Csv).unwrap();
        assert_eq!(
            back,
            vec![
                LessonCardRecord::new(d(2024, 3, 1), true, false, None),
                LessonCardRecord::new(d(2024, 3, 8), false, true, Some(d(2024, 3, 9))),
            ]
        );
    }

    #[test]
    fn malformed_date_is_reported() {
        let path = temp_out("interchange_bad", "json");
        fs::write(&path, r#"[{"date":"2024-13-45","attended":true}]"#).unwrap();
        let err = read_records::<NaiveDate>(&path, InterchangeFormat::Json).unwrap_err();
        assert!(err.to_string().contains("2024-13-45"));
    }
}
