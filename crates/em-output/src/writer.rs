//! One output file per attendee.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OutputError, Result};

/// File name for an attendee's letter: `thanks_<id>.html`.
///
/// Path separators in the id are replaced so every letter stays inside the
/// output directory.
pub fn letter_filename(id: &str) -> String {
    let safe: String = id
        .chars()
        .map(|ch| if matches!(ch, '/' | '\\') { '_' } else { ch })
        .collect();
    format!("thanks_{safe}.html")
}

/// Writes letters into a single output directory, creating it on first use.
#[derive(Debug)]
pub struct LetterWriter {
    dir: PathBuf,
    dir_ready: bool,
}

impl LetterWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            dir_ready: false,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the letter for `id` is written to.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(letter_filename(id))
    }

    /// Write `contents` as the letter for `id`, replacing any previous file.
    pub fn write(&mut self, id: &str, contents: &str) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.path_for(id);
        fs::write(&path, contents).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "letter written");
        Ok(path)
    }

    fn ensure_dir(&mut self) -> Result<()> {
        if self.dir_ready {
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|source| OutputError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        self.dir_ready = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_derived_from_id() {
        assert_eq!(letter_filename("7"), "thanks_7.html");
        assert_eq!(letter_filename("../7"), "thanks_.._7.html");
    }
}
