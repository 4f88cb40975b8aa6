use super::ReadSettings;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ConvertLogic;
use crate::errors::AppResult;
use crate::interchange::{InterchangeFormat, WritePlan, confirm_overwrite};
use crate::models::{DateGranularity, LessonDate};
use crate::ui::messages::success;
use crate::utils::expand_tilde;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

/// Handle the `convert` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        out,
        to,
        read,
        force,
    } = cmd
    {
        let settings = ReadSettings::resolve(input, read, cfg);
        let output = expand_tilde(out);
        let to = InterchangeFormat::resolve(*to, &output, cfg.default_format);

        match settings.granularity {
            DateGranularity::Day => run::<NaiveDate>(&settings, &output, to, *force)?,
            DateGranularity::Timestamp => run::<NaiveDateTime>(&settings, &output, to, *force)?,
        }
    }
    Ok(())
}

/// Input is read and checked before the overwrite question is asked.
fn run<D: LessonDate>(
    settings: &ReadSettings,
    output: &Path,
    to: InterchangeFormat,
    force: bool,
) -> AppResult<()> {
    let records = ConvertLogic::load::<D>(&settings.path, settings.format, settings.policy)?;

    confirm_overwrite(
        &WritePlan {
            output,
            from: settings.format,
            to,
            rows: records.len(),
        },
        force,
    )?;

    ConvertLogic::write(output, to, &records)?;

    success(format!(
        "{} row(s) converted {} → {}: {}",
        records.len(),
        settings.format,
        to,
        output.display()
    ));
    Ok(())
}
