//! User settings at ~/.config/csvtoics/config.toml

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use config::{Config, File};
use serde::Deserialize;

use crate::error::{ConvertError, ConvertResult};

#[cfg(windows)]
static DEFAULT_CSV_FILE: &str = "c:\\CSVtoICS\\CSV\\events.csv";
#[cfg(windows)]
static DEFAULT_ICS_DIR: &str = "c:\\CSVtoICS\\ICS";

#[cfg(not(windows))]
static DEFAULT_CSV_FILE: &str = "~/CSVtoICS/CSV/events.csv";
#[cfg(not(windows))]
static DEFAULT_ICS_DIR: &str = "~/CSVtoICS/ICS";

/// en-US short date, e.g. 1/1/2022
static DEFAULT_SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";
/// en-US short time, e.g. 12:00 PM
static DEFAULT_SHORT_TIME_FORMAT: &str = "%-I:%M %p";

static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_csv_file() -> String {
    DEFAULT_CSV_FILE.to_string()
}

fn default_ics_dir() -> String {
    DEFAULT_ICS_DIR.to_string()
}

fn default_short_date_format() -> String {
    DEFAULT_SHORT_DATE_FORMAT.to_string()
}

fn default_short_time_format() -> String {
    DEFAULT_SHORT_TIME_FORMAT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Settings loaded from config.toml. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// CSV file read when no path is given on the command line
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    /// Directory written when no path is given on the command line
    #[serde(default = "default_ics_dir")]
    pub ics_dir: String,

    /// chrono pattern for the start-date part of output filenames
    #[serde(default = "default_short_date_format")]
    pub short_date_format: String,

    /// chrono pattern for the start-time part of output filenames
    #[serde(default = "default_short_time_format")]
    pub short_time_format: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            csv_file: default_csv_file(),
            ics_dir: default_ics_dir(),
            short_date_format: default_short_date_format(),
            short_time_format: default_short_time_format(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn config_path() -> ConvertResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConvertError::Config("Could not determine config directory".into()))?
            .join("csvtoics");

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings from the user's config file, creating a commented-out
    /// template the first time.
    pub fn load() -> ConvertResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load settings from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> ConvertResult<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| ConvertError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConvertError::Config(e.to_string()))?;

        settings.check_patterns()?;
        Ok(settings)
    }

    /// Reject filename patterns chrono cannot parse.
    pub fn check_patterns(&self) -> ConvertResult<()> {
        check_pattern("short_date_format", &self.short_date_format)?;
        check_pattern("short_time_format", &self.short_time_format)
    }

    /// Default input file with `~` expanded.
    pub fn csv_file_path(&self) -> PathBuf {
        expand(&self.csv_file)
    }

    /// Default output directory with `~` expanded.
    pub fn ics_dir_path(&self) -> PathBuf {
        expand(&self.ics_dir)
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ConvertResult<()> {
        let contents = format!(
            "\
# csvtoics configuration

# CSV file to read when none is given on the command line:
# csv_file = \"{}\"

# Directory for the .ics files when none is given on the command line:
# ics_dir = \"{}\"

# Date and time patterns used in output filenames (chrono syntax):
# short_date_format = \"{}\"
# short_time_format = \"{}\"

# One of: error, warn, info, debug, trace
# log_level = \"{}\"
",
            DEFAULT_CSV_FILE.replace('\\', "\\\\"),
            DEFAULT_ICS_DIR.replace('\\', "\\\\"),
            DEFAULT_SHORT_DATE_FORMAT,
            DEFAULT_SHORT_TIME_FORMAT,
            DEFAULT_LOG_LEVEL,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConvertError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ConvertError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn check_pattern(key: &str, pattern: &str) -> ConvertResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConvertError::Config(format!(
            "Invalid {key} '{pattern}' in config file"
        )));
    }
    Ok(())
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(settings.csv_file, DEFAULT_CSV_FILE);
        assert_eq!(settings.ics_dir, DEFAULT_ICS_DIR);
        assert_eq!(settings.short_date_format, "%-m/%-d/%Y");
        assert_eq!(settings.short_time_format, "%-I:%M %p");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "ics_dir = \"/srv/calendars\"\nshort_date_format = \"%Y-%m-%d\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.csv_file, DEFAULT_CSV_FILE);
        assert_eq!(settings.ics_dir, "/srv/calendars");
        assert_eq!(settings.short_date_format, "%Y-%m-%d");
        assert_eq!(settings.short_time_format, "%-I:%M %p");
    }

    #[test]
    fn test_default_template_loads_as_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Settings::create_default_config(&path).unwrap();
        assert!(path.exists());

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.csv_file, DEFAULT_CSV_FILE);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "csv_file = [not valid").unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(ConvertError::Config(_))));
    }

    #[test]
    fn test_unknown_pattern_specifier_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "short_date_format = \"%Q\"\n").unwrap();
        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(ConvertError::Config(ref m)) if m.contains("short_date_format")));

        std::fs::write(&path, "short_time_format = \"%H:%\"\n").unwrap();
        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(ConvertError::Config(ref m)) if m.contains("short_time_format")));
    }

    #[test]
    fn test_default_patterns_pass_check() {
        assert!(Settings::default().check_patterns().is_ok());
    }

    #[test]
    fn test_tilde_is_expanded() {
        let settings = Settings {
            csv_file: "~/events.csv".into(),
            ..Settings::default()
        };

        let path = settings.csv_file_path();
        assert!(!path.to_string_lossy().starts_with('~'), "{}", path.display());
        assert!(path.ends_with("events.csv"));
    }
}
