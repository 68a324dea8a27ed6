use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use em_cli::pipeline::{PipelineDriver, TimestampPolicy};
use em_cli::processor::{LetterMode, RecordProcessor};
use em_cli::report::format_contact_line;
use em_ingest::{Roster, read_roster};
use em_lookup::{CivicClient, CivicConfig, Lookup, NoLookup};
use em_output::LetterWriter;

use crate::cli::{CheckArgs, RosterArgs, RunArgs, TimestampPolicyArg};
use crate::types::RunResult;

pub fn run_letters(args: &RunArgs) -> Result<RunResult> {
    let roster = load_roster(&args.roster.input)?;
    let lookup = build_lookup(args)?;
    let letters = if args.dry_run {
        LetterMode::DryRun
    } else {
        LetterMode::Write(LetterWriter::new(&args.output_dir))
    };
    let processor = RecordProcessor::new(lookup, letters);
    let mut result = run_roster(&roster, processor, &args.roster)?;
    result.dry_run = args.dry_run;
    Ok(result)
}

pub fn run_check(args: &CheckArgs) -> Result<RunResult> {
    let roster = load_roster(&args.roster.input)?;
    run_roster(&roster, RecordProcessor::check_only(), &args.roster)
}

fn load_roster(path: &Path) -> Result<Roster> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let roster = read_roster(path).context("read roster")?;
    let missing = roster.missing_columns();
    if !missing.is_empty() {
        warn!(columns = ?missing, "roster is missing expected columns");
    }
    info!(records = roster.len(), "ingest complete");
    Ok(roster)
}

fn run_roster(roster: &Roster, processor: RecordProcessor, args: &RosterArgs) -> Result<RunResult> {
    let mut driver = PipelineDriver::new(processor, timestamp_policy(args.on_bad_timestamp));
    let pipeline = driver.run(&roster.records, |record| {
        println!("{}", format_contact_line(&record.name, record.phone()));
    })?;
    Ok(RunResult {
        input: roster.path.clone(),
        output_dir: driver.processor().output_dir(),
        dry_run: false,
        strict: args.strict,
        pipeline,
    })
}

fn build_lookup(args: &RunArgs) -> Result<Box<dyn Lookup>> {
    if args.offline {
        info!("offline run, official lookup disabled");
        return Ok(Box::new(NoLookup));
    }
    let Some(api_key) = args.api_key.as_deref().filter(|key| !key.trim().is_empty()) else {
        warn!("no CIVIC_API_KEY configured, letters will use the fallback text");
        return Ok(Box::new(NoLookup));
    };
    let config = CivicConfig::new(api_key)
        .with_base_url(&args.api_url)
        .with_timeout(Duration::from_secs(args.lookup_timeout));
    let client = CivicClient::new(config).context("build lookup client")?;
    Ok(Box::new(client))
}

fn timestamp_policy(arg: TimestampPolicyArg) -> TimestampPolicy {
    match arg {
        TimestampPolicyArg::Skip => TimestampPolicy::Skip,
        TimestampPolicyArg::Halt => TimestampPolicy::Halt,
    }
}
