//! Form letter rendering and per-attendee output files.

pub mod error;
pub mod letter;
pub mod writer;

pub use error::{OutputError, Result};
pub use letter::{FormLetter, render_letter};
pub use writer::{LetterWriter, letter_filename};
