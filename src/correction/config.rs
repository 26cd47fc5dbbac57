use serde::{Deserialize, Serialize};

use crate::correction::reducer::ReductionStrategy;

/// Queries shorter than this are passed through without mapping
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 1000;

/// Default query batch budget in bytes (4 GiB)
pub const DEFAULT_BATCH_BYTES: u64 = 1 << 32;

/// Settings for the correction pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    pub strategy: ReductionStrategy,

    /// Minimum inflated length for a query to be mapped
    pub min_query_length: usize,

    /// Bytes of query records to load per batch
    pub batch_bytes: u64,

    /// Worker threads; 0 uses one per available core
    pub threads: usize,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            strategy: ReductionStrategy::default(),
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            batch_bytes: DEFAULT_BATCH_BYTES,
            threads: 0,
        }
    }
}
