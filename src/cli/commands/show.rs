use super::ReadSettings;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ShowLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{DateGranularity, LessonDate};
use crate::ui::messages::{banner, row_problem};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { file, read, json } = cmd {
        let settings = ReadSettings::resolve(file, read, cfg);
        match settings.granularity {
            DateGranularity::Day => run::<NaiveDate>(&settings, cfg, *json)?,
            DateGranularity::Timestamp => run::<NaiveDateTime>(&settings, cfg, *json)?,
        }
    }
    Ok(())
}

fn run<D: LessonDate + Serialize>(settings: &ReadSettings, cfg: &Config, json: bool) -> AppResult<()> {
    let outcome = settings.check::<D>()?;

    if json {
        println!("{}", ShowLogic::render_json(&outcome, &cfg.date_format)?);
    } else {
        banner(format!("Lesson card: {}", settings.path.display()));
        print!("{}", ShowLogic::render(&outcome, &cfg.date_format));
    }

    for failure in &outcome.failures {
        row_problem(failure.index, &failure.error);
    }
    if outcome.is_clean() {
        Ok(())
    } else {
        Err(AppError::InvalidRows(outcome.failures.len()))
    }
}
