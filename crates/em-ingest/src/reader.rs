//! CSV roster reading.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use em_model::{AttendeeRecord, columns};

use crate::error::{IngestError, Result};
use crate::header::symbolize_header;

/// All records of a roster file, in file order.
#[derive(Debug, Clone)]
pub struct Roster {
    pub path: PathBuf,
    /// Column symbols in source order.
    pub headers: Vec<String>,
    pub records: Vec<AttendeeRecord>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Expected columns that the header row does not provide.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::EXPECTED
            .into_iter()
            .filter(|column| !self.headers.iter().any(|header| header == column))
            .collect()
    }
}

/// Read a roster file from disk.
pub fn read_roster(path: &Path) -> Result<Roster> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_roster_from_reader(file, path)
}

/// Read a roster from any reader; `source` is used for diagnostics only.
pub fn read_roster_from_reader<R: Read>(reader: R, source: &Path) -> Result<Roster> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let raw_headers = csv_reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: source.to_path_buf(),
            line: 1,
            source: e,
        })?
        .clone();
    if raw_headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }
    let headers: Vec<String> = raw_headers
        .iter()
        .enumerate()
        .map(|(idx, raw)| header_symbol(idx, raw))
        .collect();

    let mut records = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        // records() starts after the header, which is line 1.
        let fallback_line = idx as u64 + 2;
        let row = result.map_err(|e| IngestError::CsvParse {
            path: source.to_path_buf(),
            line: fallback_line,
            source: e,
        })?;
        let line = row
            .position()
            .map(csv::Position::line)
            .unwrap_or(fallback_line);
        if row.len() > headers.len() {
            debug!(
                line,
                extra = row.len() - headers.len(),
                "ignoring cells beyond the header row"
            );
        }
        let fields = headers
            .iter()
            .enumerate()
            .map(|(col, name)| (name.clone(), row.get(col).unwrap_or("").to_string()))
            .collect();
        records.push(AttendeeRecord::new(line as usize, idx + 1, fields));
    }

    debug!(
        path = %source.display(),
        columns = headers.len(),
        records = records.len(),
        "roster loaded"
    );

    Ok(Roster {
        path: source.to_path_buf(),
        headers,
        records,
    })
}

/// Symbol for a header cell; a blank leading header names the id column.
fn header_symbol(index: usize, raw: &str) -> String {
    let symbol = symbolize_header(raw);
    match (symbol.is_empty(), index) {
        (false, _) => symbol,
        (true, 0) => columns::ID.to_string(),
        (true, _) => format!("column_{}", index + 1),
    }
}
