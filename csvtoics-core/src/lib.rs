//! Core of the csvtoics converter.
//!
//! This crate turns a CSV file of events into one `.ics` file per event:
//! - `arguments` resolves and validates the input/output paths
//! - `directory` empties the output directory before a run
//! - `reader` parses CSV rows into `EventRecord`s
//! - `ics` derives filenames and writes calendar documents
//! - `pipeline` sequences all of the above and reports progress

pub mod arguments;
pub mod directory;
pub mod error;
pub mod event;
pub mod ics;
pub mod pipeline;
pub mod reader;
pub mod settings;
pub mod title;

pub use arguments::{RunConfiguration, Validation};
pub use error::{ConvertError, ConvertResult};
pub use event::EventRecord;
pub use pipeline::{Outcome, Pipeline, Progress};
pub use settings::Settings;
