use std::path::PathBuf;

use em_cli::pipeline::PipelineResult;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Set when letters were written.
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub strict: bool,
    pub pipeline: PipelineResult,
}

impl RunResult {
    /// Skipped records only count as errors in strict mode.
    pub fn has_errors(&self) -> bool {
        self.strict && !self.pipeline.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use em_cli::pipeline::SkippedRecord;

    fn result(strict: bool, skipped: usize) -> RunResult {
        let pipeline = PipelineResult {
            skipped: (0..skipped)
                .map(|n| SkippedRecord {
                    line: n + 2,
                    id: (n + 1).to_string(),
                    reason: "malformed timestamp".to_string(),
                })
                .collect(),
            ..PipelineResult::default()
        };
        RunResult {
            input: PathBuf::from("event_attendees.csv"),
            output_dir: None,
            dry_run: false,
            strict,
            pipeline,
        }
    }

    #[test]
    fn skipped_records_are_errors_only_in_strict_mode() {
        assert!(result(true, 1).has_errors());
        assert!(!result(false, 1).has_errors());
        assert!(!result(true, 0).has_errors());
        assert!(!result(false, 0).has_errors());
    }
}
