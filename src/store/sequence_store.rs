use std::collections::HashMap;

use crate::core::sequence::{Sequence, SequenceId};

/// Immutable collection of sequences indexed by identity
#[derive(Debug, Default)]
pub struct SequenceStore {
    /// All sequences in insertion order
    sequences: Vec<Sequence>,

    /// Index: sequence ID -> index in sequences vec
    id_to_index: HashMap<SequenceId, usize>,

    /// Total bases across all sequences
    total_bases: u64,
}

impl SequenceStore {
    /// Build a store, indexing every sequence by its identity.
    ///
    /// Later sequences win if two share an identity.
    #[must_use]
    pub fn new(sequences: Vec<Sequence>) -> Self {
        let mut id_to_index = HashMap::with_capacity(sequences.len());
        let mut total_bases = 0;
        for (index, sequence) in sequences.iter().enumerate() {
            id_to_index.insert(sequence.id, index);
            total_bases += sequence.data.len() as u64;
        }

        Self {
            sequences,
            id_to_index,
            total_bases,
        }
    }

    /// Get a sequence by identity
    #[must_use]
    pub fn get(&self, id: SequenceId) -> Option<&Sequence> {
        self.id_to_index.get(&id).map(|&idx| &self.sequences[idx])
    }

    /// Slice `[begin, end)` of a stored sequence.
    ///
    /// Returns `None` for an unknown identity or an interval that is reversed or
    /// runs past the end of the sequence.
    #[must_use]
    pub fn slice(&self, id: SequenceId, begin: u32, end: u32) -> Option<&[u8]> {
        let (begin, end) = (begin as usize, end as usize);
        if begin > end {
            return None;
        }
        self.get(id).and_then(|seq| seq.data.get(begin..end))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.iter()
    }

    /// All sequences in insertion order
    #[must_use]
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Number of sequences in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    #[must_use]
    pub fn total_bases(&self) -> u64 {
        self.total_bases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::IdAllocator;

    fn make_store() -> (SequenceStore, Vec<SequenceId>) {
        let mut ids = IdAllocator::starting_at(5);
        let seqs = vec![
            Sequence::new(ids.allocate(), "a", b"AAAACCCC".to_vec()),
            Sequence::new(ids.allocate(), "b", b"GGGGTTTT".to_vec()),
        ];
        let id_list = seqs.iter().map(|s| s.id).collect();
        (SequenceStore::new(seqs), id_list)
    }

    #[test]
    fn test_get_by_id() {
        let (store, ids) = make_store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_bases(), 16);
        assert_eq!(store.get(ids[1]).map(|s| s.name.as_str()), Some("b"));
        assert!(store.get(SequenceId(0)).is_none());
    }

    #[test]
    fn test_slice_bounds() {
        let (store, ids) = make_store();
        assert_eq!(store.slice(ids[0], 2, 6), Some(&b"AACC"[..]));
        assert_eq!(store.slice(ids[1], 0, 8), Some(&b"GGGGTTTT"[..]));
        assert_eq!(store.slice(ids[1], 4, 4), Some(&b""[..]));

        assert!(store.slice(ids[1], 4, 9).is_none());
        assert!(store.slice(ids[1], 6, 4).is_none());
        assert!(store.slice(SequenceId(99), 0, 1).is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = SequenceStore::default();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
