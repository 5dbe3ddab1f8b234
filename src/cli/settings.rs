//! The `bincalc settings` subcommands, for finding, viewing and editing `settings.toml`.
use crate::settings::{Settings, get_settings_file_path};
use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

/// Subcommands of `bincalc settings`
#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Open settings.toml in a text editor, creating it first if needed
    Edit,
    /// Print where bincalc looks for settings.toml
    Path,
    /// Print a settings.toml listing every setting with its default value
    DumpDefault,
}

impl SettingsSubcommands {
    /// Run the subcommand
    pub fn execute(self) -> Result<()> {
        match self {
            Self::Edit => handle_edit_command()?,
            Self::Path => handle_path_command(),
            Self::DumpDefault => handle_dump_default_command(),
        }

        Ok(())
    }
}

/// Write the commented-out defaults to `file_path`, unless a settings file is already there
fn ensure_settings_file_exists(file_path: &Path) -> Result<()> {
    if file_path.is_file() {
        return Ok(());
    }

    if let Some(dir_path) = file_path.parent() {
        fs::create_dir_all(dir_path)
            .with_context(|| format!("Failed to create directory: {}", dir_path.display()))?;
    }

    fs::write(file_path, Settings::default_file_contents())?;

    Ok(())
}

/// Handle `settings edit`
fn handle_edit_command() -> Result<()> {
    let file_path = get_settings_file_path();
    ensure_settings_file_exists(&file_path)?;

    println!("Opening settings file for editing: {}", file_path.display());
    edit::edit_file(&file_path)?;

    Ok(())
}

/// Handle `settings path`
fn handle_path_command() {
    println!("{}", get_settings_file_path().display());
}

/// Handle `settings dump-default`
fn handle_dump_default_command() {
    print!("{}", Settings::default_file_contents());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_toml;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_settings_file_exists() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bincalc").join("settings.toml");

        ensure_settings_file_exists(&file_path).unwrap();
        assert!(file_path.is_file());

        // The placeholder file only contains comments, so defaults are used
        let settings: Settings = read_toml(&file_path).unwrap();
        assert_eq!(settings, Settings::default());

        // Existing files are left alone
        fs::write(&file_path, "overwrite = true\n").unwrap();
        ensure_settings_file_exists(&file_path).unwrap();
        let settings: Settings = read_toml(&file_path).unwrap();
        assert!(settings.overwrite);
    }
}
