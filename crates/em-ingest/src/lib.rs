//! Attendee roster ingestion.
//!
//! Reads a delimited roster with a header row into [`AttendeeRecord`]s whose
//! columns are addressed by symbol (see [`symbolize_header`]).
//!
//! [`AttendeeRecord`]: em_model::AttendeeRecord

pub mod error;
pub mod header;
pub mod reader;

pub use error::{IngestError, Result};
pub use header::symbolize_header;
pub use reader::{Roster, read_roster, read_roster_from_reader};
