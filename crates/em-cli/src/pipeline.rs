//! Roster pipeline: drives every record through the [`RecordProcessor`] in
//! file order and collects registration-timing samples on the way.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use em_model::{AttendeeRecord, RegistrationTime};
use em_transform::mode;

use crate::processor::{ProcessedRecord, RecordProcessor};
use crate::report::TimingReport;

/// What to do with a record whose registration timestamp cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Warn, leave the record out of letters and statistics, and continue.
    #[default]
    Skip,
    /// Stop the run with the parse error.
    Halt,
}

/// A record left out of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub id: String,
    pub reason: String,
}

/// Hour and weekday samples, one per processed record.
#[derive(Debug, Clone, Default)]
pub struct TimingAccumulator {
    hours: Vec<u32>,
    weekdays: Vec<u32>,
}

impl TimingAccumulator {
    pub fn record(&mut self, registered: &RegistrationTime) {
        self.hours.push(registered.hour());
        self.weekdays.push(registered.weekday_index());
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Most frequent hours and weekdays over all samples.
    pub fn report(&self) -> TimingReport {
        TimingReport {
            peak_hours: mode(self.hours.iter().copied()),
            peak_weekdays: mode(self.weekdays.iter().copied()),
            samples: self.len(),
        }
    }
}

/// Outcome of a full pass over the roster.
#[derive(Debug, Clone, Default)]
pub struct PipelineResult {
    pub records_read: usize,
    pub processed: usize,
    pub letters: Vec<PathBuf>,
    pub lookup_fallbacks: usize,
    pub skipped: Vec<SkippedRecord>,
    pub timing: TimingReport,
    pub duration_ms: u128,
}

pub struct PipelineDriver {
    processor: RecordProcessor,
    policy: TimestampPolicy,
}

impl PipelineDriver {
    pub fn new(processor: RecordProcessor, policy: TimestampPolicy) -> Self {
        Self { processor, policy }
    }

    pub fn processor(&self) -> &RecordProcessor {
        &self.processor
    }

    /// Process `records` in order. `on_record` sees each record as soon as it is done.
    pub fn run<F>(&mut self, records: &[AttendeeRecord], mut on_record: F) -> Result<PipelineResult>
    where
        F: FnMut(&ProcessedRecord),
    {
        let span = info_span!("pipeline", records = records.len());
        let _guard = span.enter();
        let start = Instant::now();

        let mut timing = TimingAccumulator::default();
        let mut result = PipelineResult {
            records_read: records.len(),
            ..PipelineResult::default()
        };

        for record in records {
            let record_span = info_span!("record", line = record.line, id = %record.id());
            let _record_guard = record_span.enter();

            let fields = match self.processor.normalize(record) {
                Ok(fields) => fields,
                Err(error) => match self.policy {
                    TimestampPolicy::Halt => {
                        return Err(error).with_context(|| {
                            format!("record {} at line {}", record.id(), record.line)
                        });
                    }
                    TimestampPolicy::Skip => {
                        warn!(%error, "skipping record");
                        result.skipped.push(SkippedRecord {
                            line: record.line,
                            id: record.id(),
                            reason: error.to_string(),
                        });
                        continue;
                    }
                },
            };

            let processed = self.processor.deliver(record, fields)?;
            timing.record(&processed.fields.registered);
            result.processed += 1;
            if processed.used_fallback() {
                result.lookup_fallbacks += 1;
            }
            if let Some(path) = &processed.letter {
                result.letters.push(path.clone());
            }
            on_record(&processed);
        }

        result.timing = timing.report();
        result.duration_ms = start.elapsed().as_millis();
        info!(
            processed = result.processed,
            skipped = result.skipped.len(),
            letters = result.letters.len(),
            lookup_fallbacks = result.lookup_fallbacks,
            duration_ms = result.duration_ms,
            "pipeline complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn accumulator_reports_modes() {
        let mut timing = TimingAccumulator::default();
        for (day, hour) in [(12, 10), (12, 13), (13, 13)] {
            timing.record(&RegistrationTime::from_parts(2008, 11, day, hour, 0).unwrap());
        }
        let report = timing.report();
        assert_eq!(report.samples, 3);
        assert_eq!(report.peak_hours, BTreeSet::from([13]));
        // 2008-11-12 was a Wednesday.
        assert_eq!(report.peak_weekdays, BTreeSet::from([3]));
    }

    #[test]
    fn empty_accumulator_has_no_peaks() {
        let report = TimingAccumulator::default().report();
        assert!(report.peak_hours.is_empty());
        assert!(report.peak_weekdays.is_empty());
        assert_eq!(report.samples, 0);
    }
}
