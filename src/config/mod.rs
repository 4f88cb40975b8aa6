use crate::errors::{AppError, AppResult};
use crate::interchange::InterchangeFormat;
use crate::models::lesson_date::is_valid_format;
use crate::models::{DateGranularity, ReplacementPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether cells are keyed on calendar dates or full timestamps
    #[serde(default)]
    pub granularity: DateGranularity,
    /// strftime pattern used when printing dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Reject rows flagged `replaced` that carry no replacement date
    #[serde(default = "default_strict_replacement")]
    pub strict_replacement: bool,
    #[serde(default = "default_format")]
    pub default_format: InterchangeFormat,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_strict_replacement() -> bool {
    true
}
fn default_format() -> InterchangeFormat {
    InterchangeFormat::Json
}

impl Default for Config {
    fn default() -> Self {
        Self {
            granularity: DateGranularity::default(),
            date_format: default_date_format(),
            strict_replacement: default_strict_replacement(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lessoncard")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("lessoncard.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !is_valid_format(&self.date_format) {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    pub fn replacement_policy(&self) -> ReplacementPolicy {
        if self.strict_replacement {
            ReplacementPolicy::Strict
        } else {
            ReplacementPolicy::Lenient
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{name}_lessoncard.conf"));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_conf("cfg_missing");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_conf("cfg_partial");
        fs::write(&path, "granularity: timestamp\nstrict_replacement: false\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.granularity, DateGranularity::Timestamp);
        assert_eq!(cfg.replacement_policy(), ReplacementPolicy::Lenient);
        assert_eq!(cfg.date_format, "%Y-%m-%d");
        assert_eq!(cfg.default_format, InterchangeFormat::Json);
    }

    #[test]
    fn save_then_load() {
        let path = temp_conf("cfg_save");
        let cfg = Config {
            date_format: "%d.%m.%Y".to_string(),
            default_format: InterchangeFormat::Csv,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn rejects_bad_content() {
        let path = temp_conf("cfg_bad_format");
        fs::write(&path, "date_format: \"%Q\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

        let path = temp_conf("cfg_unknown_key");
        fs::write(&path, "database: foo.sqlite\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
