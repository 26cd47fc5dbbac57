use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::overlap::Overlap;
use crate::core::sequence::Sequence;
use crate::mapping::chaining::{chain_anchors, Anchor, ChainParams};
use crate::mapping::index::MinimizerIndex;
use crate::mapping::minimizer::minimizers;
use crate::store::SequenceStore;
use crate::utils::validation::{validate_engine_config, ValidationError};

/// Default k-mer length
pub const DEFAULT_KMER_LEN: usize = 15;
/// Default number of consecutive k-mers per minimizer window
pub const DEFAULT_WINDOW_LEN: usize = 5;
/// Default diagonal band width for grouping anchors
pub const DEFAULT_BANDWIDTH: u32 = 500;
/// Default minimum number of anchors in a chain
pub const DEFAULT_MIN_CHAIN_ANCHORS: usize = 4;
/// Default minimum number of query bases a chain must cover with matches
pub const DEFAULT_MIN_MATCHING_BASES: u32 = 100;
/// Default largest gap between neighbouring anchors of a chain
pub const DEFAULT_MAX_GAP: u32 = 10_000;
/// Default fraction of most frequent minimizers to ignore
pub const DEFAULT_FREQUENCY: f64 = 0.001;

/// Engine-internal toggles passed with every [`MappingEngine::map`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Skip store members with the query's identity
    pub avoid_equal: bool,
    /// Skip store members whose identity is greater than the query's
    pub avoid_symmetric: bool,
}

/// Produces overlaps between a query and an indexed store.
///
/// Implementations are shared read-only across worker threads once
/// [`minimize`](MappingEngine::minimize) has returned.
pub trait MappingEngine: Sync {
    /// Index `store`; must be called before [`map`](MappingEngine::map)
    fn minimize(&mut self, store: &SequenceStore);

    /// All overlaps of `query` against the indexed store, possibly none
    fn map(&self, query: &Sequence, options: MapOptions) -> Vec<Overlap>;
}

/// Configuration for [`MinimizerEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub kmer_len: usize,
    pub window_len: usize,
    pub bandwidth: u32,
    pub min_chain_anchors: usize,
    pub min_matching_bases: u32,
    pub max_gap: u32,
    pub frequency: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kmer_len: DEFAULT_KMER_LEN,
            window_len: DEFAULT_WINDOW_LEN,
            bandwidth: DEFAULT_BANDWIDTH,
            min_chain_anchors: DEFAULT_MIN_CHAIN_ANCHORS,
            min_matching_bases: DEFAULT_MIN_MATCHING_BASES,
            max_gap: DEFAULT_MAX_GAP,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

/// Minimizer index plus chaining
#[derive(Debug)]
pub struct MinimizerEngine {
    config: EngineConfig,
    index: Option<MinimizerIndex>,
}

impl MinimizerEngine {
    /// Create an engine; call [`MappingEngine::minimize`] before mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the configuration is unusable.
    pub fn new(config: EngineConfig) -> Result<Self, ValidationError> {
        validate_engine_config(&config)?;
        Ok(Self {
            config,
            index: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    #[allow(clippy::cast_possible_truncation)] // kmer_len is validated to be at most 32
    fn chain_params(&self) -> ChainParams {
        ChainParams {
            kmer_len: self.config.kmer_len as u32,
            bandwidth: self.config.bandwidth,
            min_anchors: self.config.min_chain_anchors,
            min_matching_bases: self.config.min_matching_bases,
            max_gap: self.config.max_gap,
        }
    }
}

impl MappingEngine for MinimizerEngine {
    fn minimize(&mut self, store: &SequenceStore) {
        let index = MinimizerIndex::build(
            store,
            self.config.kmer_len,
            self.config.window_len,
            self.config.frequency,
        );
        info!(
            "Indexed {} sequences ({} bases), {} distinct minimizers",
            store.len(),
            store.total_bases(),
            index.len()
        );
        self.index = Some(index);
    }

    fn map(&self, query: &Sequence, options: MapOptions) -> Vec<Overlap> {
        let Some(index) = &self.index else {
            return Vec::new();
        };

        let mut anchors = Vec::new();
        for m in minimizers(&query.data, index.kmer_len(), index.window_len()) {
            let Some(locations) = index.lookup(m.value) else {
                continue;
            };
            for location in locations {
                if options.avoid_equal && location.id == query.id {
                    continue;
                }
                if options.avoid_symmetric && location.id > query.id {
                    continue;
                }
                anchors.push(Anchor {
                    rhs_id: location.id,
                    strand: m.strand.relative_to(location.strand),
                    query_pos: m.position,
                    target_pos: location.position,
                });
            }
        }

        let overlaps = chain_anchors(query.id, anchors, &self.chain_params());
        debug!("{}: {} overlaps", query.name, overlaps.len());
        overlaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlap::Strand;
    use crate::core::sequence::{reverse_complement, IdAllocator, SequenceId};

    /// Deterministic pseudo-random bases (xorshift)
    fn random_bases(len: usize, mut state: u64) -> Vec<u8> {
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                b"ACGT"[(state % 4) as usize]
            })
            .collect()
    }

    fn indexed_engine(reference: &[u8]) -> (MinimizerEngine, SequenceStore, IdAllocator) {
        let mut ids = IdAllocator::new();
        let store = SequenceStore::new(vec![Sequence::new(
            ids.allocate(),
            "ref",
            reference.to_vec(),
        )]);
        let mut engine = MinimizerEngine::new(EngineConfig::default()).unwrap();
        engine.minimize(&store);
        (engine, store, ids)
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            kmer_len: 0,
            ..EngineConfig::default()
        };
        assert!(MinimizerEngine::new(config).is_err());
    }

    #[test]
    fn test_unindexed_engine_maps_nothing() {
        let engine = MinimizerEngine::new(EngineConfig::default()).unwrap();
        assert!(!engine.is_indexed());
        let query = Sequence::new(SequenceId(0), "q", random_bases(2000, 7));
        assert!(engine.map(&query, MapOptions::default()).is_empty());
    }

    #[test]
    fn test_forward_overlap() {
        let reference = random_bases(3000, 42);
        let (engine, _store, mut ids) = indexed_engine(&reference);
        let query = Sequence::new(ids.allocate(), "q", reference[500..2500].to_vec());

        let overlaps = engine.map(&query, MapOptions::default());
        assert_eq!(overlaps.len(), 1);

        let o = overlaps[0];
        assert_eq!(o.lhs_id, query.id);
        assert_eq!(o.rhs_id, SequenceId(0));
        assert_eq!(o.strand, Strand::Forward);
        assert!(o.lhs_begin < 50 && o.lhs_end > 1950, "{o}");
        assert_eq!(o.rhs_begin, o.lhs_begin + 500);
        assert_eq!(o.rhs_end, o.lhs_end + 500);
    }

    #[test]
    fn test_reverse_overlap() {
        let reference = random_bases(3000, 42);
        let (engine, store, mut ids) = indexed_engine(&reference);
        let query = Sequence::new(
            ids.allocate(),
            "q",
            reverse_complement(&reference[500..2500]),
        );

        let overlaps = engine.map(&query, MapOptions::default());
        assert_eq!(overlaps.len(), 1);

        let o = overlaps[0];
        assert_eq!(o.strand, Strand::Reverse);
        assert_eq!(o.covered_len(), o.rhs_len());
        assert_eq!(o.rhs_end, 2500 - o.lhs_begin);

        // The reverse-complemented rhs slice reproduces the covered query region
        let slice = store.slice(o.rhs_id, o.rhs_begin, o.rhs_end).unwrap();
        assert_eq!(
            reverse_complement(slice),
            &query.data[o.lhs_begin as usize..o.lhs_end as usize]
        );
    }

    #[test]
    fn test_unrelated_query_has_no_overlaps() {
        let (engine, _store, mut ids) = indexed_engine(&random_bases(3000, 42));
        let query = Sequence::new(ids.allocate(), "q", random_bases(2000, 99));
        assert!(engine.map(&query, MapOptions::default()).is_empty());
    }

    #[test]
    fn test_map_options_filter_identities() {
        let reference = random_bases(3000, 42);
        let (engine, store, _) = indexed_engine(&reference);
        let itself = store.get(SequenceId(0)).unwrap();

        assert_eq!(engine.map(itself, MapOptions::default()).len(), 1);

        let avoid_equal = MapOptions {
            avoid_equal: true,
            avoid_symmetric: false,
        };
        assert!(engine.map(itself, avoid_equal).is_empty());

        // A query with a smaller identity than every store member
        let lower = Sequence::new(SequenceId(0), "lower", reference[..2000].to_vec());
        let mut engine = engine;
        let mut ids = IdAllocator::starting_at(1);
        let store = SequenceStore::new(vec![Sequence::new(
            ids.allocate(),
            "ref",
            reference.clone(),
        )]);
        engine.minimize(&store);
        let avoid_symmetric = MapOptions {
            avoid_equal: false,
            avoid_symmetric: true,
        };
        assert!(engine.map(&lower, avoid_symmetric).is_empty());
        assert_eq!(engine.map(&lower, MapOptions::default()).len(), 1);
    }
}
