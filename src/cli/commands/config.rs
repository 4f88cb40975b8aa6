use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand. Without flags it prints the effective configuration.
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        edit_config,
        editor,
    } = cmd
    {
        let nothing_requested = !(*print_config || *path || *edit_config);

        if *path {
            println!("{}", config_path.display());
        }

        if *print_config || nothing_requested {
            println!("📄 Current configuration ({}):\n", config_path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !config_path.exists() {
                Config::default().save_to(config_path)?;
            }
            edit(config_path, editor.as_deref());
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Editors to try in order: the requested one, then the default, never twice.
fn editor_candidates(requested: Option<&str>, fallback: &str) -> Vec<String> {
    match requested {
        Some(r) if r != fallback => vec![r.to_string(), fallback.to_string()],
        _ => vec![fallback.to_string()],
    }
}

fn open_with(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

fn edit(path: &Path, requested: Option<&str>) {
    let candidates = editor_candidates(requested, &default_editor());

    for (i, editor) in candidates.iter().enumerate() {
        if open_with(editor, path) {
            success(format!("Configuration file edited using '{editor}'"));
            return;
        }
        if let Some(next) = candidates.get(i + 1) {
            warning(format!("Editor '{editor}' not available, falling back to '{next}'"));
        }
    }

    error(format!(
        "Failed to edit {} (tried: {})",
        path.display(),
        candidates.join(", ")
    ));
}
