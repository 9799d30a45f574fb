//! Reading event records from a CSV file.

use std::fs::File;
use std::path::Path;

use csv::{DeserializeRecordsIntoIter, ReaderBuilder};

use crate::error::{ConvertError, ConvertResult};
use crate::event::EventRecord;

/// Single-pass stream of records from one CSV file.
///
/// The file stays open only while the stream is alive; to read again, open
/// the path again.
pub struct RecordReader {
    records: DeserializeRecordsIntoIter<File, EventRecord>,
}

impl RecordReader {
    /// Open `path` and read its header row.
    pub fn open(path: &Path) -> ConvertResult<Self> {
        let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
        let reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        Ok(RecordReader {
            records: reader.into_deserialize(),
        })
    }
}

impl Iterator for RecordReader {
    type Item = ConvertResult<EventRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|record| record.map_err(ConvertError::from))
    }
}

/// Open `path` and stream its records.
pub fn read(path: &Path) -> ConvertResult<RecordReader> {
    RecordReader::open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("events.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_single_row() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Title,Description,StartDate,EndDate,Location\n\
             \"Trip\",\"Plan A\",\"01-01-2022 12:00 PM\",\"01-01-2022 1:00 PM\",\"Home\"\n",
        );

        let records: Vec<EventRecord> = read(&path).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.title, "Trip");
        assert_eq!(record.description, "Plan A");
        assert_eq!(record.location, "Home");
        assert_eq!(
            record.start,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
        );
        assert_eq!(
            record.end,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(13, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_read_matches_columns_by_header() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Location,EndDate,Title,StartDate,Description\n\
             Office,03-02-2024 10:30 AM,Standup,03-02-2024 10:00 AM,Daily sync\n\
             Park,03-03-2024 5:00 PM,Picnic,03-03-2024 2:00 PM,\"Bring food, drinks\"\n",
        );

        let records: Vec<EventRecord> = read(&path).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Standup");
        assert_eq!(records[0].location, "Office");
        assert_eq!(records[1].description, "Bring food, drinks");
        assert!(records[1].start < records[1].end);
    }

    #[test]
    fn test_read_header_only_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Title,Description,StartDate,EndDate,Location\n");

        assert_eq!(read(&path).unwrap().count(), 0);
    }

    #[test]
    fn test_read_bad_date_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Title,Description,StartDate,EndDate,Location\n\
             Good,d,01-01-2022 12:00 PM,01-01-2022 1:00 PM,l\n\
             Bad,d,someday,01-01-2022 1:00 PM,l\n\
             Never,d,01-02-2022 12:00 PM,01-02-2022 1:00 PM,l\n",
        );

        let mut records = read(&path).unwrap();

        assert_eq!(records.next().unwrap().unwrap().title, "Good");
        let err = records.next().unwrap().unwrap_err();
        assert!(matches!(err, ConvertError::Csv(_)), "got {:?}", err);
        assert!(err.to_string().contains("someday"), "got {}", err);
    }

    #[test]
    fn test_read_missing_column_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Title,Description,StartDate,EndDate\n\
             Trip,d,01-01-2022 12:00 PM,01-01-2022 1:00 PM\n",
        );

        let result: Result<Vec<EventRecord>, _> = read(&path).unwrap().collect();

        assert!(matches!(result, Err(ConvertError::Csv(_))));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");

        assert!(matches!(read(&missing), Err(ConvertError::Io { .. })));
    }
}
