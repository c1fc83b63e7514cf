use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Report missing keys and invalid values. Returns true when all is well.
    pub fn check(path: &Path, cfg: &Config) -> AppResult<bool> {
        let mut ok = true;

        if path.exists() {
            let missing = migrate::missing_keys(path)?;
            if !missing.is_empty() {
                ok = false;
                warning(format!(
                    "Missing keys in {}: {} (run `lifegrid config --migrate`)",
                    path.display(),
                    missing.join(", ")
                ));
            }
        } else {
            info(format!(
                "No configuration file at {}: defaults are in use",
                path.display()
            ));
        }

        for problem in migrate::validate(cfg) {
            ok = false;
            warning(problem);
        }

        if ok {
            success("Configuration is complete and valid.");
        }
        Ok(ok)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist (run `lifegrid init`)",
                path.display()
            )));
        }

        let added = migrate::fill_missing_keys(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added missing keys: {}", added.join(", ")));
        }
        Ok(added)
    }

    /// Open the config file in `editor`, falling back to $EDITOR/$VISUAL or
    /// the platform default when the requested one cannot be started.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            Ok(_) | Err(_) => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ))),
        }
    }
}
