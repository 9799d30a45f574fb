//! Writing generated documents to the output directory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::filename::FilenameFormat;
use super::generate::generate_ics;
use crate::error::{ConvertError, ConvertResult};
use crate::event::EventRecord;

/// Writes one .ics file per record.
#[derive(Debug, Clone, Default)]
pub struct CalendarWriter {
    format: FilenameFormat,
}

impl CalendarWriter {
    pub fn new(format: FilenameFormat) -> Self {
        CalendarWriter { format }
    }

    /// Path the record will be written to inside `dir`.
    pub fn path_for(&self, record: &EventRecord, dir: &Path) -> ConvertResult<PathBuf> {
        Ok(dir.join(self.format.filename(record)?))
    }

    /// Write the record's document into `dir`, replacing any file with the
    /// same name. Returns the written path.
    pub fn write(&self, record: &EventRecord, dir: &Path) -> ConvertResult<PathBuf> {
        let path = self.path_for(record, dir)?;
        let content = generate_ics(record);

        let file = File::create(&path).map_err(|e| ConvertError::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ConvertError::io(&path, e))?;

        log::debug!("Wrote {}", path.display());
        Ok(path)
    }
}
