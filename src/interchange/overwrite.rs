use super::InterchangeFormat;
use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// What a conversion is about to write, shown when the output already exists.
#[derive(Debug, Clone, Copy)]
pub struct WritePlan<'a> {
    pub output: &'a Path,
    pub from: InterchangeFormat,
    pub to: InterchangeFormat,
    pub rows: usize,
}

impl WritePlan<'_> {
    pub fn prompt(&self) -> String {
        format!(
            "'{}' already exists. Replace it with {} row(s) converted {} → {}? [y/N]: ",
            self.output.display(),
            self.rows,
            self.from,
            self.to
        )
    }
}

/// Ask on stdin before replacing an existing output file.
pub fn confirm_overwrite(plan: &WritePlan<'_>, force: bool) -> AppResult<()> {
    confirm_overwrite_from(plan, force, &mut io::stdin().lock())
}

/// Same as [`confirm_overwrite`], reading the answer from `answers`.
/// Anything but `y`/`yes` keeps the file.
pub fn confirm_overwrite_from<R: BufRead>(
    plan: &WritePlan<'_>,
    force: bool,
    answers: &mut R,
) -> AppResult<()> {
    if force || !plan.output.exists() {
        return Ok(());
    }

    print!("{}", plan.prompt());
    io::stdout().flush().ok();

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Cancelled {
            path: plan.output.display().to_string(),
        }),
    }
}
