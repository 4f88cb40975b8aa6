pub mod check;
pub mod config;
pub mod convert;
pub mod init;
pub mod show;

use crate::cli::parser::ReadArgs;
use crate::config::Config;
use crate::core::{CheckLogic, CheckOutcome};
use crate::errors::AppResult;
use crate::interchange::{self, InterchangeFormat};
use crate::models::{DateGranularity, LessonDate, ReplacementPolicy};
use crate::utils::expand_tilde;
use std::path::PathBuf;

/// Input settings after merging command-line flags over the configuration.
pub(crate) struct ReadSettings {
    pub path: PathBuf,
    pub format: InterchangeFormat,
    pub granularity: DateGranularity,
    pub policy: ReplacementPolicy,
}

impl ReadSettings {
    pub fn resolve(file: &str, args: &ReadArgs, cfg: &Config) -> Self {
        let path = expand_tilde(file);
        let format = InterchangeFormat::resolve(args.format, &path, cfg.default_format);
        let policy = if args.lenient {
            ReplacementPolicy::Lenient
        } else {
            cfg.replacement_policy()
        };
        Self {
            format,
            granularity: args.granularity.unwrap_or(cfg.granularity),
            policy,
            path,
        }
    }

    pub fn check<D: LessonDate>(&self) -> AppResult<CheckOutcome<D>> {
        let rows = interchange::read_rows(&self.path, self.format)?;
        Ok(CheckLogic::check_rows::<D>(rows, self.policy))
    }
}
