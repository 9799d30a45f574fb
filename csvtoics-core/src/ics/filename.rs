//! Deterministic filenames for generated .ics files.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::error::{ConvertError, ConvertResult};
use crate::event::EventRecord;
use crate::settings::Settings;
use crate::title::{sanitize, title_case};

/// Short date/time patterns used for the start-time part of a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameFormat {
    pub short_date: String,
    pub short_time: String,
}

impl Default for FilenameFormat {
    fn default() -> Self {
        FilenameFormat::from(&Settings::default())
    }
}

impl From<&Settings> for FilenameFormat {
    fn from(settings: &Settings) -> Self {
        FilenameFormat {
            short_date: settings.short_date_format.clone(),
            short_time: settings.short_time_format.clone(),
        }
    }
}

impl FilenameFormat {
    /// `{slug}_{startDate}_{startTime}.ics`
    ///
    /// Fails with a config error when either pattern cannot format a start
    /// time.
    pub fn filename(&self, record: &EventRecord) -> ConvertResult<String> {
        Ok(format!(
            "{}_{}_{}.ics",
            slug_title(&record.title),
            filename_part(&record.start, &self.short_date)?,
            filename_part(&record.start, &self.short_time)?,
        ))
    }
}

/// Title-cased and sanitized title, as written to SUMMARY.
pub fn summary_title(title: &str) -> String {
    sanitize(&title_case(title))
}

/// The summary title with spaces turned into hyphens.
pub fn slug_title(title: &str) -> String {
    summary_title(title).replace(' ', "-")
}

fn filename_part(start: &NaiveDateTime, pattern: &str) -> ConvertResult<String> {
    let mut part = String::new();
    write!(part, "{}", start.format(pattern)).map_err(|_| {
        ConvertError::Config(format!("Cannot format a start time with '{pattern}'"))
    })?;

    Ok(part.replace(['/', ':'], "-").replace(' ', "_"))
}
