//! .ics file naming and generation.
//!
//! Each event record becomes one calendar document with a fixed layout,
//! written to a file whose name is derived from the title and start time.

mod filename;
mod generate;
mod writer;

pub use filename::{FilenameFormat, slug_title, summary_title};
pub use generate::{LINE_ENDING, generate_ics};
pub use writer::CalendarWriter;
