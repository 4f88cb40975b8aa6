use crate::errors::{AppError, AppResult};
use crate::interchange::{self, InterchangeFormat};
use crate::models::{LessonCardRecord, LessonDate, ReplacementPolicy};
use crate::ui::messages::row_problem;
use std::path::Path;

pub struct ConvertLogic;

impl ConvertLogic {
    /// Canonicalize rows: empty cells become all-default rows and
    /// replacement dates of non-replaced lessons are dropped.
    ///
    /// Every failing row is reported; nothing is returned if any row fails.
    pub fn canonicalize<D: LessonDate>(
        records: &[LessonCardRecord<D>],
        policy: ReplacementPolicy,
    ) -> AppResult<Vec<LessonCardRecord<D>>> {
        let mut out = Vec::with_capacity(records.len());
        let mut failed = 0;

        for (i, record) in records.iter().enumerate() {
            match record.canonical(policy) {
                Ok(r) => out.push(r),
                Err(e) => {
                    row_problem(i + 1, e);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(AppError::InvalidRows(failed));
        }
        Ok(out)
    }

    /// Read and canonicalize `input`; nothing is written.
    pub fn load<D: LessonDate>(
        input: &Path,
        from: InterchangeFormat,
        policy: ReplacementPolicy,
    ) -> AppResult<Vec<LessonCardRecord<D>>> {
        let records = interchange::read_records::<D>(input, from)?;
        Self::canonicalize(&records, policy)
    }

    pub fn write<D: LessonDate>(
        output: &Path,
        to: InterchangeFormat,
        records: &[LessonCardRecord<D>],
    ) -> AppResult<()> {
        interchange::write_records(output, to, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::{env, fs};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn canonicalize_clears_and_rejects() {
        let ok = vec![
            LessonCardRecord::new(d("2024-03-01"), true, false, Some(d("2024-03-08"))),
            LessonCardRecord::new(NaiveDate::ZERO, true, true, None),
        ];
        let out = ConvertLogic::canonicalize(&ok, ReplacementPolicy::Strict).unwrap();
        assert_eq!(out[0].replacement_date, None);
        assert_eq!(out[1], LessonCardRecord::empty());

        let bad = vec![LessonCardRecord::new(d("2024-03-01"), true, true, None)];
        assert!(matches!(
            ConvertLogic::canonicalize(&bad, ReplacementPolicy::Strict),
            Err(AppError::InvalidRows(1))
        ));
    }

    #[test]
    fn json_to_csv() {
        let input = env::temp_dir().join("convert_logic_in.json");
        let output = env::temp_dir().join("convert_logic_out.csv");
        fs::remove_file(&output).ok();
        fs::write(
            &input,
            r#"[
                {"date":"2024-03-01T00:00:00","attended":true,"replaced":false,"replacementDate":null},
                {"date":"2024-03-08T00:00:00","attended":false,"replaced":true,"replacementDate":"2024-03-15T00:00:00"}
            ]"#,
        )
        .unwrap();

        let records =
            ConvertLogic::load::<NaiveDate>(&input, InterchangeFormat::Json, ReplacementPolicy::Strict)
                .unwrap();
        assert_eq!(records.len(), 2);
        ConvertLogic::write(&output, InterchangeFormat::Csv, &records).unwrap();

        let csv = fs::read_to_string(&output).unwrap();
        assert!(csv.contains("2024-03-01,true,false,"));
        assert!(csv.contains("2024-03-08,false,true,2024-03-15"));
    }

    #[test]
    fn load_fails_before_anything_is_written() {
        let missing = env::temp_dir().join("convert_logic_missing.json");
        fs::remove_file(&missing).ok();
        assert!(matches!(
            ConvertLogic::load::<NaiveDate>(&missing, InterchangeFormat::Json, ReplacementPolicy::Strict),
            Err(AppError::Io(_))
        ));
    }
}
