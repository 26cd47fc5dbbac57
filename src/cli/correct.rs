use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::cli::Cli;
use crate::core::sequence::IdAllocator;
use crate::correction::{CorrectionConfig, CorrectionStats, Scheduler};
use crate::mapping::{EngineConfig, MappingEngine, MinimizerEngine};
use crate::output::RecordWriter;
use crate::parsing::SequenceParser;
use crate::store::SequenceStore;
use crate::utils::validation::validate_correction_config;

/// JSON document written by `--stats`
#[derive(Serialize)]
struct RunSummary<'a> {
    version: &'static str,
    reference: &'a Path,
    queries: &'a Path,
    threads: usize,
    correction: CorrectionConfig,
    engine: EngineConfig,
    records_written: u64,
    stats: CorrectionStats,
}

/// Execute a correction run
///
/// # Errors
///
/// Returns an error if an input cannot be opened or parsed, a parameter is
/// invalid, or output cannot be written.
pub fn run(args: &Cli) -> anyhow::Result<()> {
    let (Some(reference), Some(queries)) = (&args.reference, &args.queries) else {
        return Ok(());
    };

    let correction = args.correction_config();
    validate_correction_config(&correction)?;
    let mut engine = MinimizerEngine::new(args.engine_config())?;

    // Open both inputs before the expensive indexing step
    let mut reference_parser = SequenceParser::open(reference)?;
    let mut query_parser = SequenceParser::open(queries)?;

    let mut ids = IdAllocator::new();
    let store = SequenceStore::new(reference_parser.parse(None, &mut ids)?);
    info!(
        "Loaded {} reference sequences ({} bases) from {}",
        store.len(),
        store.total_bases(),
        reference.display()
    );

    engine.minimize(&store);
    let scheduler = Scheduler::new(&engine, &store, correction)?;

    let format = args.output_format.resolve(query_parser.format());
    let mut writer = RecordWriter::new(BufWriter::new(io::stdout().lock()), format);
    let mut stats = CorrectionStats::default();

    loop {
        let batch = query_parser.parse(Some(correction.batch_bytes), &mut ids)?;
        if batch.is_empty() {
            break;
        }
        let results = scheduler.process_batch(batch);
        stats.record_batch(&results);

        for corrected in &results {
            if args.drop_unchanged && !corrected.status.is_replaced() {
                continue;
            }
            writer.write(&corrected.sequence)?;
        }
    }

    let records_written = writer.records();
    writer.finish()?;

    info!(
        "Processed {} queries in {} batches: {} replaced, {} unchanged, {} below {} bases",
        stats.queries,
        stats.batches,
        stats.replaced,
        stats.unchanged,
        stats.skipped_short,
        correction.min_query_length
    );

    if let Some(path) = &args.stats {
        let summary = RunSummary {
            version: env!("CARGO_PKG_VERSION"),
            reference,
            queries,
            threads: scheduler.num_threads(),
            correction,
            engine: *engine.config(),
            records_written,
            stats,
        };
        serde_json::to_writer_pretty(File::create(path)?, &summary)?;
        info!("Wrote run summary to {}", path.display());
    }

    Ok(())
}
