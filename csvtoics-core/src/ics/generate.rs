//! Calendar document generation.

use chrono::NaiveDateTime;

use super::filename::summary_title;
use crate::event::EventRecord;

/// Line terminator for generated documents.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Generate the .ics document for one record.
///
/// The layout is fixed: one VEVENT with SUMMARY, DESCRIPTION, DTSTART,
/// DTEND and LOCATION. Values are written verbatim; timestamps keep their
/// components and get a literal `Z`.
pub fn generate_ics(record: &EventRecord) -> String {
    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", summary_title(&record.title)),
        format!("DESCRIPTION:{}", record.description),
        format!("DTSTART:{}", format_timestamp(&record.start)),
        format!("DTEND:{}", format_timestamp(&record.end)),
        format!("LOCATION:{}", record.location),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut result = String::new();
    for line in &lines {
        result.push_str(line);
        result.push_str(LINE_ENDING);
    }
    result
}

fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
