use serde::Serialize;

use crate::core::types::CorrectionStatus;
use crate::correction::scheduler::CorrectedSequence;

/// Running totals over a correction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorrectionStats {
    pub batches: u64,
    pub queries: u64,
    pub skipped_short: u64,
    pub unchanged: u64,
    pub replaced: u64,
    pub input_bases: u64,
    pub output_bases: u64,
}

impl CorrectionStats {
    /// Account for one processed query
    pub fn record(&mut self, corrected: &CorrectedSequence) {
        self.queries += 1;
        self.input_bases += corrected.input_len as u64;
        self.output_bases += corrected.sequence.inflated_len() as u64;
        match corrected.status {
            CorrectionStatus::SkippedShort => self.skipped_short += 1,
            CorrectionStatus::Unchanged => self.unchanged += 1,
            CorrectionStatus::Replaced => self.replaced += 1,
        }
    }

    /// Account for a whole batch
    pub fn record_batch(&mut self, batch: &[CorrectedSequence]) {
        self.batches += 1;
        for corrected in batch {
            self.record(corrected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::{Sequence, SequenceId};

    fn corrected(len: usize, out_len: usize, status: CorrectionStatus) -> CorrectedSequence {
        CorrectedSequence {
            sequence: Sequence::new(SequenceId(0), "q", vec![b'A'; out_len]),
            status,
            input_len: len,
        }
    }

    #[test]
    fn test_record_batch() {
        let mut stats = CorrectionStats::default();
        stats.record_batch(&[
            corrected(500, 500, CorrectionStatus::SkippedShort),
            corrected(2000, 2000, CorrectionStatus::Unchanged),
            corrected(3000, 2950, CorrectionStatus::Replaced),
        ]);
        stats.record_batch(&[]);

        assert_eq!(stats.batches, 2);
        assert_eq!(stats.queries, 3);
        assert_eq!(
            (stats.skipped_short, stats.unchanged, stats.replaced),
            (1, 1, 1)
        );
        assert_eq!(stats.input_bases, 5500);
        assert_eq!(stats.output_bases, 5450);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(CorrectionStats::default()).unwrap();
        assert_eq!(json["replaced"], 0);
        assert_eq!(json["batches"], 0);
    }
}
