use tracing::warn;

use crate::core::overlap::Strand;
use crate::core::sequence::{reverse_complement, Sequence};
use crate::core::types::CorrectionStatus;
use crate::correction::reducer::Reduction;
use crate::store::SequenceStore;

/// Quality byte used for synthesized quality strings
pub const PLACEHOLDER_QUALITY: u8 = b'^';

/// Materialize the output sequence for `query` from a reduction decision.
///
/// `NoChange` returns `query` untouched. `Replace` concatenates the rhs slices
/// of the chosen overlaps, reverse-complementing those on the reverse strand,
/// into a new sequence with the query's name and identity. Overlaps that do
/// not resolve against `store` are skipped; if none resolve, the query is
/// returned unchanged.
#[must_use]
pub fn build_sequence(
    query: Sequence,
    reduction: Reduction,
    store: &SequenceStore,
) -> (Sequence, CorrectionStatus) {
    let Reduction::Replace {
        overlaps,
        synthesize_quality,
    } = reduction
    else {
        return (query, CorrectionStatus::Unchanged);
    };

    let capacity = overlaps.iter().map(|o| o.rhs_len() as usize).sum();
    let mut data: Vec<u8> = Vec::with_capacity(capacity);
    for overlap in &overlaps {
        let Some(slice) = store.slice(overlap.rhs_id, overlap.rhs_begin, overlap.rhs_end) else {
            warn!("{}: skipping unresolvable overlap {}", query.name, overlap);
            continue;
        };
        match overlap.strand {
            Strand::Forward => data.extend_from_slice(slice),
            Strand::Reverse => data.extend(reverse_complement(slice)),
        }
    }

    if data.is_empty() {
        return (query, CorrectionStatus::Unchanged);
    }

    let quality = (synthesize_quality && query.quality.is_some())
        .then(|| vec![PLACEHOLDER_QUALITY; data.len()]);
    let replacement = Sequence {
        id: query.id,
        name: query.name,
        data,
        quality,
    };
    (replacement, CorrectionStatus::Replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlap::Overlap;
    use crate::core::sequence::{IdAllocator, SequenceId};

    fn store() -> SequenceStore {
        let mut ids = IdAllocator::new();
        SequenceStore::new(vec![
            Sequence::new(ids.allocate(), "a", b"AAAACCCCGGGGTTTT".to_vec()),
            Sequence::new(ids.allocate(), "b", b"GATTACA".to_vec()),
        ])
    }

    fn query_with_quality() -> Sequence {
        Sequence::with_quality(SequenceId(10), "read", b"ACGTACGT".to_vec(), b"IIIIIIII".to_vec())
            .unwrap()
    }

    fn overlap(rhs: u32, (begin, end): (u32, u32), strand: Strand) -> Overlap {
        Overlap::new(SequenceId(10), (0, 0), SequenceId(rhs), (begin, end), strand)
    }

    #[test]
    fn test_no_change_is_identical() {
        let query = query_with_quality();
        let (built, status) = build_sequence(query.clone(), Reduction::NoChange, &store());
        assert_eq!(built, query);
        assert_eq!(status, CorrectionStatus::Unchanged);
    }

    #[test]
    fn test_stitch_concatenates_and_drops_quality() {
        let reduction = Reduction::Replace {
            overlaps: vec![
                overlap(0, (4, 8), Strand::Forward),
                overlap(1, (0, 4), Strand::Reverse),
            ],
            synthesize_quality: false,
        };
        let (built, status) = build_sequence(query_with_quality(), reduction, &store());

        assert_eq!(status, CorrectionStatus::Replaced);
        // CCCC + revcomp(GATT)
        assert_eq!(built.data, b"CCCCAATC");
        assert_eq!(built.name, "read");
        assert_eq!(built.id, SequenceId(10));
        assert!(built.quality.is_none());
    }

    #[test]
    fn test_single_source_gets_placeholder_quality() {
        let reduction = Reduction::Replace {
            overlaps: vec![overlap(1, (0, 7), Strand::Forward)],
            synthesize_quality: true,
        };
        let (built, _) = build_sequence(query_with_quality(), reduction.clone(), &store());
        assert_eq!(built.data, b"GATTACA");
        assert_eq!(built.quality.as_deref(), Some(&b"^^^^^^^"[..]));

        // No quality to begin with: none is invented
        let plain = Sequence::new(SequenceId(11), "plain", b"ACGT".to_vec());
        let (built, _) = build_sequence(plain, reduction, &store());
        assert!(built.quality.is_none());
    }

    #[test]
    fn test_unresolvable_overlaps_are_skipped() {
        let reduction = Reduction::Replace {
            overlaps: vec![
                overlap(5, (0, 4), Strand::Forward),
                overlap(1, (0, 3), Strand::Forward),
                overlap(1, (3, 100), Strand::Forward),
            ],
            synthesize_quality: false,
        };
        let (built, status) = build_sequence(query_with_quality(), reduction, &store());
        assert_eq!(status, CorrectionStatus::Replaced);
        assert_eq!(built.data, b"GAT");
    }

    #[test]
    fn test_nothing_resolvable_leaves_query_unchanged() {
        let query = query_with_quality();
        let reduction = Reduction::Replace {
            overlaps: vec![overlap(9, (0, 4), Strand::Reverse)],
            synthesize_quality: true,
        };
        let (built, status) = build_sequence(query.clone(), reduction, &store());
        assert_eq!(built, query);
        assert_eq!(status, CorrectionStatus::Unchanged);
    }
}
