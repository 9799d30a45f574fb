//! Run arguments: resolving positional paths and checking they exist.

use std::path::PathBuf;

use crate::settings::Settings;

/// Outcome of checking a `RunConfiguration` against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validation {
    /// Not validated yet
    #[default]
    Pending,
    Valid,
    Invalid(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Human-readable explanation; empty until validated.
    pub fn message(&self) -> &str {
        match self {
            Validation::Pending => "",
            Validation::Valid => "Arguments are valid.",
            Validation::Invalid(message) => message,
        }
    }
}

/// Paths for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// CSV file to read
    pub csv_file: PathBuf,
    /// Directory receiving the .ics files
    pub ics_dir: PathBuf,
    pub validation: Validation,
}

impl RunConfiguration {
    fn from_settings(settings: &Settings) -> Self {
        RunConfiguration {
            csv_file: settings.csv_file_path(),
            ics_dir: settings.ics_dir_path(),
            validation: Validation::Pending,
        }
    }

    /// Resolve positional arguments against the built-in defaults.
    pub fn resolve(args: Option<&[String]>) -> Self {
        Self::resolve_with(&Settings::default(), args)
    }

    /// Resolve positional arguments against loaded settings.
    ///
    /// The first argument replaces the CSV file, the second the output
    /// directory. Empty strings keep the default; anything past the second
    /// argument is ignored.
    pub fn resolve_with(settings: &Settings, args: Option<&[String]>) -> Self {
        let mut config = Self::from_settings(settings);
        let Some(args) = args else {
            return config;
        };

        if let Some(csv_file) = args.first().filter(|a| !a.is_empty()) {
            config.csv_file = PathBuf::from(csv_file);
        }
        if let Some(ics_dir) = args.get(1).filter(|a| !a.is_empty()) {
            config.ics_dir = PathBuf::from(ics_dir);
        }

        config
    }

    /// Check the CSV file, then the output directory. Stops at the first
    /// failure.
    pub fn validate(self) -> Self {
        let validation = if !self.csv_file.is_file() {
            Validation::Invalid(format!(
                "The .CSV file {} does not exist.",
                self.csv_file.display()
            ))
        } else if !self.ics_dir.is_dir() {
            Validation::Invalid(format!(
                "The directory {}, the location where .ICS files are to be saved, does not exist.",
                self.ics_dir.display()
            ))
        } else {
            Validation::Valid
        };

        RunConfiguration { validation, ..self }
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn validation_message(&self) -> &str {
        self.validation.message()
    }
}

/// Whether the first argument asks for help. Later arguments are ignored.
pub fn is_help_request(args: &[String]) -> bool {
    matches!(args.first().map(String::as_str), Some("-h" | "--help"))
}
