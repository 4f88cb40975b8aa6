use super::ReadSettings;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{DateGranularity, LessonDate};
use crate::ui::messages::{info, row_problem, success};
use chrono::{NaiveDate, NaiveDateTime};

/// Handle the `check` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { file, read } = cmd {
        let settings = ReadSettings::resolve(file, read, cfg);
        match settings.granularity {
            DateGranularity::Day => run::<NaiveDate>(&settings)?,
            DateGranularity::Timestamp => run::<NaiveDateTime>(&settings)?,
        }
    }
    Ok(())
}

fn run<D: LessonDate>(settings: &ReadSettings) -> AppResult<()> {
    let outcome = settings.check::<D>()?;

    for failure in &outcome.failures {
        row_problem(failure.index, &failure.error);
    }

    let tally = outcome
        .tally()
        .iter()
        .map(|(label, n)| format!("{n} {label}"))
        .collect::<Vec<_>>()
        .join(", ");
    if !tally.is_empty() {
        info(tally);
    }

    if outcome.is_clean() {
        success(format!(
            "{}: {} row(s) OK ({} granularity)",
            settings.path.display(),
            outcome.total(),
            D::GRANULARITY
        ));
        Ok(())
    } else {
        Err(AppError::InvalidRows(outcome.failures.len()))
    }
}
