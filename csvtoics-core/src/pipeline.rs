//! The conversion run: validate, reset the output directory, convert.

use std::path::Path;

use crate::arguments::RunConfiguration;
use crate::directory;
use crate::error::ConvertResult;
use crate::ics::{CalendarWriter, FilenameFormat};
use crate::reader;
use crate::settings::Settings;
use crate::title::title_case;

/// Receives user-facing progress messages.
pub trait Progress {
    fn notify(&mut self, message: &str);

    /// A record is about to be written. `title` is already title-cased.
    fn writing(&mut self, title: &str) {
        self.notify(&format!("Writing {}...", title));
    }

    /// Every record was written.
    fn finished(&mut self) {
        self.notify("Conversion complete!");
    }

    /// Report a failure before it propagates.
    fn error(&mut self, message: &str) {
        self.notify(message);
    }

    /// Asked once, after validation and before the output directory is
    /// emptied. Returning false ends the run.
    fn confirm(&mut self) -> bool {
        true
    }
}

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ArgsResolved,
    Validated { valid: bool },
    DirectoryCleared,
    Converting,
    Done,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Arguments failed validation; nothing was touched
    Invalid { message: String },
    /// Declined at the confirmation prompt; nothing was touched
    Cancelled,
    Converted { cleared: usize, written: usize },
}

/// Sequences one conversion run and reports progress.
pub struct Pipeline<'a, P: Progress> {
    progress: &'a mut P,
    writer: CalendarWriter,
    stage: Stage,
}

impl<'a, P: Progress> Pipeline<'a, P> {
    pub fn new(progress: &'a mut P) -> Self {
        Self::with_settings(&Settings::default(), progress)
    }

    pub fn with_settings(settings: &Settings, progress: &'a mut P) -> Self {
        Pipeline {
            progress,
            writer: CalendarWriter::new(FilenameFormat::from(settings)),
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, stage: Stage) {
        log::debug!("{:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    /// Validate `config`, then clear the output directory and convert.
    ///
    /// An invalid configuration ends the run before anything on disk is
    /// touched. The first I/O or parse failure aborts the run; files written
    /// before it stay in place.
    pub fn run(&mut self, config: RunConfiguration) -> ConvertResult<Outcome> {
        self.advance(Stage::ArgsResolved);

        let config = config.validate();
        self.advance(Stage::Validated {
            valid: config.is_valid(),
        });

        if !config.is_valid() {
            let message = config.validation_message().to_string();
            self.progress.error(&message);
            return Ok(Outcome::Invalid { message });
        }

        self.progress.notify("Ready to convert your .CSV to .ICS files?");
        self.progress.notify(&format!(
            "The application will read the .CSV file: {}",
            config.csv_file.display()
        ));
        self.progress.notify(&format!(
            "The application will save the .ICS files here: {}",
            config.ics_dir.display()
        ));

        if !self.progress.confirm() {
            log::info!("Conversion cancelled before clearing {}", config.ics_dir.display());
            return Ok(Outcome::Cancelled);
        }

        let cleared = self.report(directory::clear(&config.ics_dir))?;
        log::info!("Cleared {} file(s) from {}", cleared, config.ics_dir.display());
        self.advance(Stage::DirectoryCleared);

        let written = self.convert(&config.csv_file, &config.ics_dir)?;
        self.progress.finished();

        Ok(Outcome::Converted { cleared, written })
    }

    /// Convert every record in `csv_file` into a file in `ics_dir`, one
    /// record at a time. Returns the number of documents written.
    pub fn convert(&mut self, csv_file: &Path, ics_dir: &Path) -> ConvertResult<usize> {
        self.advance(Stage::Converting);

        let records = self.report(reader::read(csv_file))?;
        self.progress.notify("Reading .CSV File...");

        let mut written = 0;
        for record in records {
            let record = self.report(record)?;

            if record.end < record.start {
                log::warn!(
                    "'{}' ends ({}) before it starts ({})",
                    record.title,
                    record.end,
                    record.start
                );
            }

            self.progress.writing(&title_case(&record.title));
            self.report(self.writer.write(&record, ics_dir))?;
            written += 1;
        }

        log::info!("Wrote {} .ics file(s) to {}", written, ics_dir.display());
        self.advance(Stage::Done);
        Ok(written)
    }

    /// Pass a result through, telling the user about an error first.
    fn report<T>(&mut self, result: ConvertResult<T>) -> ConvertResult<T> {
        if let Err(ref e) = result {
            self.progress.error(&e.to_string());
        }
        result
    }
}
