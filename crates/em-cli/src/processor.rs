//! Per-record processing: normalize, look up, render, persist.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use em_lookup::{Legislators, Lookup, legislators_by_zipcode};
use em_model::{AttendeeRecord, LetterFields, NormalizedFields, PhoneNumber, weekday_name};
use em_output::{LetterWriter, render_letter};
use em_transform::normalize_record;

use crate::logging::redact_value;

/// What happens to a record after normalization.
#[derive(Debug)]
pub enum LetterMode {
    /// Look up officials, render the letter and write it to disk.
    Write(LetterWriter),
    /// Look up officials and render the letter without writing it.
    DryRun,
    /// Normalization only: no lookup, no letter.
    Skip,
}

/// One record after processing.
#[derive(Debug, Clone)]
pub struct ProcessedRecord {
    pub id: String,
    pub line: usize,
    pub name: String,
    pub fields: NormalizedFields,
    /// `None` when letters are skipped.
    pub legislators: Option<Legislators>,
    /// Written letter, if any.
    pub letter: Option<PathBuf>,
}

impl ProcessedRecord {
    pub fn phone(&self) -> &PhoneNumber {
        &self.fields.phone
    }

    pub fn used_fallback(&self) -> bool {
        self.legislators
            .as_ref()
            .is_some_and(Legislators::is_fallback)
    }
}

pub struct RecordProcessor {
    lookup: Box<dyn Lookup>,
    letters: LetterMode,
}

impl RecordProcessor {
    pub fn new(lookup: Box<dyn Lookup>, letters: LetterMode) -> Self {
        Self { lookup, letters }
    }

    /// Normalization only; no official lookup and no letters.
    pub fn check_only() -> Self {
        Self::new(Box::new(em_lookup::NoLookup), LetterMode::Skip)
    }

    /// Output directory when letters are written.
    pub fn output_dir(&self) -> Option<PathBuf> {
        match &self.letters {
            LetterMode::Write(writer) => Some(writer.dir().to_path_buf()),
            LetterMode::DryRun | LetterMode::Skip => None,
        }
    }

    /// Normalize zip, phone and registration time of a record.
    pub fn normalize(&self, record: &AttendeeRecord) -> em_transform::Result<NormalizedFields> {
        trace!(
            zipcode = redact_value(record.zipcode().unwrap_or_default()),
            phone = redact_value(record.home_phone().unwrap_or_default()),
            regdate = record.registered_at().unwrap_or_default(),
            "raw fields"
        );
        normalize_record(record)
    }

    /// Look up officials, render and persist the letter for a normalized record.
    ///
    /// Lookup failures become the fallback sentence; render and write failures are fatal.
    pub fn deliver(
        &mut self,
        record: &AttendeeRecord,
        fields: NormalizedFields,
    ) -> Result<ProcessedRecord> {
        let id = record.id();
        let name = record.first_name().unwrap_or_default().to_string();

        let (legislators, letter) = match &mut self.letters {
            LetterMode::Skip => (None, None),
            mode => {
                let legislators = legislators_by_zipcode(self.lookup.as_ref(), &fields.zipcode);
                let letter_fields = LetterFields {
                    id: id.clone(),
                    name: name.clone(),
                    phone: fields.phone.to_string(),
                    zipcode: fields.zipcode.clone(),
                    legislators: legislators.text().to_string(),
                    hour: fields.registered.hour(),
                    weekday: weekday_name(fields.registered.weekday_index())
                        .unwrap_or_default()
                        .to_string(),
                };
                let html = render_letter(&letter_fields)
                    .with_context(|| format!("render letter for record {id}"))?;
                let path = match mode {
                    LetterMode::Write(writer) => Some(
                        writer
                            .write(&id, &html)
                            .with_context(|| format!("write letter for record {id}"))?,
                    ),
                    LetterMode::DryRun | LetterMode::Skip => None,
                };
                (Some(legislators), path)
            }
        };

        debug!(
            id = %id,
            name = redact_value(&name),
            phone = redact_value(fields.phone.as_str()),
            fallback = legislators.as_ref().is_some_and(Legislators::is_fallback),
            "record processed"
        );

        Ok(ProcessedRecord {
            id,
            line: record.line,
            name,
            fields,
            legislators,
            letter,
        })
    }
}
