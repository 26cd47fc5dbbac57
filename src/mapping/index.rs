use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::core::overlap::Strand;
use crate::core::sequence::SequenceId;
use crate::mapping::minimizer::minimizers;
use crate::store::SequenceStore;

/// Where a minimizer occurs in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub id: SequenceId,
    pub position: u32,
    pub strand: Strand,
}

/// Minimizer value -> locations across the store
#[derive(Debug)]
pub struct MinimizerIndex {
    kmer_len: usize,
    window_len: usize,

    /// Index: minimizer value -> every location it was sampled at
    locations: HashMap<u64, Vec<Location>>,

    /// Minimizers occurring more often than this are ignored when mapping
    max_occurrence: usize,
}

impl MinimizerIndex {
    /// Index every sequence in `store`.
    ///
    /// Minimizers are extracted in parallel; the merge walks the store in order,
    /// so location lists are identical from run to run. The most frequent
    /// `frequency` fraction of distinct minimizers is masked out.
    pub fn build(store: &SequenceStore, kmer_len: usize, window_len: usize, frequency: f64) -> Self {
        let sampled: Vec<_> = store
            .sequences()
            .par_iter()
            .map(|seq| (seq.id, minimizers(&seq.data, kmer_len, window_len)))
            .collect();

        let mut locations: HashMap<u64, Vec<Location>> = HashMap::new();
        for (id, found) in sampled {
            for m in found {
                locations.entry(m.value).or_default().push(Location {
                    id,
                    position: m.position,
                    strand: m.strand,
                });
            }
        }

        let max_occurrence = occurrence_threshold(&locations, frequency);
        debug!(
            "Indexed {} sequences: {} distinct minimizers, max occurrence {}",
            store.len(),
            locations.len(),
            max_occurrence
        );

        Self {
            kmer_len,
            window_len,
            locations,
            max_occurrence,
        }
    }

    /// Locations of a minimizer, or `None` if unseen or too frequent
    #[must_use]
    pub fn lookup(&self, value: u64) -> Option<&[Location]> {
        self.locations
            .get(&value)
            .filter(|locs| locs.len() <= self.max_occurrence)
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn kmer_len(&self) -> usize {
        self.kmer_len
    }

    #[must_use]
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    #[must_use]
    pub fn max_occurrence(&self) -> usize {
        self.max_occurrence
    }

    /// Number of distinct minimizers
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Occurrence count at the `1 - frequency` quantile of distinct minimizers
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn occurrence_threshold(locations: &HashMap<u64, Vec<Location>>, frequency: f64) -> usize {
    if locations.is_empty() {
        return usize::MAX;
    }
    let mut counts: Vec<usize> = locations.values().map(Vec::len).collect();
    counts.sort_unstable();

    let quantile = ((1.0 - frequency.clamp(0.0, 1.0)) * counts.len() as f64) as usize;
    counts[quantile.min(counts.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::{IdAllocator, Sequence};

    fn make_store(seqs: &[&[u8]]) -> SequenceStore {
        let mut ids = IdAllocator::new();
        SequenceStore::new(
            seqs.iter()
                .enumerate()
                .map(|(i, s)| Sequence::new(ids.allocate(), format!("s{i}"), s.to_vec()))
                .collect(),
        )
    }

    #[test]
    fn test_lookup_finds_all_sequences() {
        let shared = b"GATTACAGATTACCAGGCTTAGC";
        let store = make_store(&[shared, shared]);
        let index = MinimizerIndex::build(&store, 7, 3, 0.0);
        assert!(!index.is_empty());

        let value = minimizers(shared, 7, 3)[0].value;
        let locs = index.lookup(value).unwrap();
        assert_eq!(locs.len(), 2);
        assert_eq!(locs[0].id, SequenceId(0));
        assert_eq!(locs[1].id, SequenceId(1));
        assert_eq!(locs[0].position, locs[1].position);
    }

    #[test]
    fn test_frequent_minimizers_are_masked() {
        // One repetitive minimizer (AAAAAAC) alongside a unique sequence
        let repeat = b"AAAAAAC";
        let unique = b"GATTACAGATTACCAGGCTTAGCCTAGGACTTAGG";
        let store = make_store(&[repeat, repeat, repeat, repeat, unique]);
        let index = MinimizerIndex::build(&store, 7, 1, 0.05);

        let repeat_value = minimizers(repeat, 7, 1)[0].value;
        assert_eq!(index.max_occurrence(), 1);
        assert!(index.lookup(repeat_value).is_none());

        let unique_value = minimizers(unique, 7, 1)[0].value;
        assert!(index.lookup(unique_value).is_some());
    }

    #[test]
    fn test_empty_store() {
        let index = MinimizerIndex::build(&SequenceStore::default(), 15, 5, 0.001);
        assert!(index.is_empty());
        assert!(index.lookup(42).is_none());
    }
}
