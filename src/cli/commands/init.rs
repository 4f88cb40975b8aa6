use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if config_path.exists() && !*force {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            ));
            return Ok(());
        }

        Config::default().save_to(config_path)?;
        success(format!("Config file: {}", config_path.display()));
        info("Edit it with `lessoncard config --edit`.");
    }
    Ok(())
}
