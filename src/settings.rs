//! User settings for bincalc, read from `settings.toml` in the bincalc config directory.
//!
//! The settings provide defaults for the `calculate` and `run` commands. The file is optional and
//! any missing field takes its default value.
use crate::get_bincalc_config_dir;
use crate::input::read_toml;
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::Result;
use documented::DocumentedFields;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

const DEFAULT_SETTINGS_FILE_HEADER: &str = "# bincalc settings
# Every setting is shown with its default value. Remove the leading '# ' from a line to change it.
";

/// Log level used when neither the settings file nor `BINCALC_LOG_LEVEL` sets one
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// The location of `settings.toml`, whether or not the file exists yet
pub fn get_settings_file_path() -> PathBuf {
    let mut path = get_bincalc_config_dir();
    path.push(SETTINGS_FILE_NAME);

    path
}

/// Defaults for the `calculate` and `run` commands
#[derive(Debug, DocumentedFields, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// How much to log: off, error, warn, info, debug or trace (`BINCALC_LOG_LEVEL` takes
    /// precedence)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether results may be written into an output folder that already has files in it, as if
    /// --overwrite was always passed
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            overwrite: false,
        }
    }
}

impl Settings {
    /// Load settings from [`get_settings_file_path`].
    ///
    /// A missing file gives the defaults. A file which is not valid TOML, or which has fields of
    /// the wrong type, is an error.
    pub fn load() -> Result<Settings> {
        Self::load_from_path(&get_settings_file_path())
    }

    /// Load settings from `file_path`, or the defaults if there is no file there
    fn load_from_path(file_path: &Path) -> Result<Settings> {
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        read_toml(file_path)
    }

    /// A settings file with every field commented out, each preceded by its description.
    ///
    /// Used by `bincalc settings dump-default` and as the starting point for `settings edit`.
    pub fn default_file_contents() -> String {
        // Defaults come from the serde attributes, so they match what `load` would give
        let settings: Settings =
            toml::from_str("").expect("Cannot create settings from empty TOML file");

        let settings_raw = toml::to_string(&settings).expect("Could not convert settings to TOML");

        // Comment out each `key = value` line and put its description above it
        let mut out = DEFAULT_SETTINGS_FILE_HEADER.to_string();
        for line in settings_raw.split('\n') {
            if let Some(last) = line.find('=') {
                let field = line[..last].trim();

                let docs = Settings::get_field_docs(field).expect("Missing doc comment for field");
                for line in docs.split('\n') {
                    write!(&mut out, "\n# # {}\n", line.trim()).unwrap();
                }

                writeln!(&mut out, "# {}", line.trim()).unwrap();
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_settings_load_from_path_no_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME); // NB: doesn't exist
        assert_eq!(
            Settings::load_from_path(&file_path).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_settings_load_from_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME);

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "overwrite = true").unwrap();
        }

        assert_eq!(
            Settings::load_from_path(&file_path).unwrap(),
            Settings {
                log_level: "info".to_string(),
                overwrite: true
            }
        );
    }

    #[test]
    fn test_default_file_contents() {
        let contents = Settings::default_file_contents();
        assert!(contents.starts_with(DEFAULT_SETTINGS_FILE_HEADER));
        assert!(contents.contains("# # How much to log: off, error, warn, info, debug or trace"));
        assert!(contents.contains("# # --overwrite was always passed"));
        assert!(contents.contains("# log_level = \"info\""));
        assert!(contents.contains("# overwrite = false"));
    }

    #[test]
    fn test_default_file_contents_uncommented() {
        let contents =
            Settings::default_file_contents().replace("# overwrite = false", "overwrite = true");
        let settings: Settings = toml::from_str(&contents).unwrap();
        assert_eq!(
            settings,
            Settings {
                log_level: "info".to_string(),
                overwrite: true
            }
        );
    }
}
