use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::core::types::CorrectionStatus;
use crate::correction::builder::build_sequence;
use crate::correction::config::CorrectionConfig;
use crate::mapping::{MapOptions, MappingEngine};
use crate::store::SequenceStore;

/// Options passed to the engine for every query
const MAP_OPTIONS: MapOptions = MapOptions {
    avoid_equal: false,
    avoid_symmetric: false,
};

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),
}

/// One query's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedSequence {
    pub sequence: Sequence,
    pub status: CorrectionStatus,
    /// Inflated length of the query before correction
    pub input_len: usize,
}

/// Runs Map, Reduce and Build for every query of a batch on a fixed pool.
///
/// The engine and store are only read. Each query is moved into its own task
/// and the task's result is a new value, so there is no shared mutable state.
pub struct Scheduler<'a, E: MappingEngine + ?Sized> {
    pool: ThreadPool,
    engine: &'a E,
    store: &'a SequenceStore,
    config: CorrectionConfig,
}

impl<'a, E: MappingEngine + ?Sized> Scheduler<'a, E> {
    /// Build the worker pool. `config.threads == 0` uses every available core.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::ThreadPool` if the pool cannot be created.
    pub fn new(
        engine: &'a E,
        store: &'a SequenceStore,
        config: CorrectionConfig,
    ) -> Result<Self, SchedulerError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("correct-{i}"))
            .build()
            .map_err(|e| SchedulerError::ThreadPool(e.to_string()))?;
        debug!("Worker pool started with {} threads", pool.current_num_threads());

        Ok(Self {
            pool,
            engine,
            store,
            config,
        })
    }

    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Correct a batch of queries.
    ///
    /// Results come back in the order of `queries`, whatever order the
    /// workers finish in.
    pub fn process_batch(&self, queries: Vec<Sequence>) -> Vec<CorrectedSequence> {
        let count = queries.len();
        let results: Vec<CorrectedSequence> = self.pool.install(|| {
            queries
                .into_par_iter()
                .map(|query| self.process_one(query))
                .collect()
        });
        debug!("Processed batch of {count} queries");
        results
    }

    fn process_one(&self, query: Sequence) -> CorrectedSequence {
        let input_len = query.inflated_len();
        if input_len < self.config.min_query_length {
            return CorrectedSequence {
                sequence: query,
                status: CorrectionStatus::SkippedShort,
                input_len,
            };
        }

        let overlaps = self.engine.map(&query, MAP_OPTIONS);
        let reduction = self.config.strategy.reduce(&query, overlaps, self.store);
        let (sequence, status) = build_sequence(query, reduction, self.store);
        CorrectedSequence {
            sequence,
            status,
            input_len,
        }
    }
}
