//! FASTQ record reading using noodles.

use std::io::BufRead;

use noodles::fastq;

use crate::core::sequence::{IdAllocator, Sequence};
use crate::parsing::reader::{budget_reached, ParseError};

/// Read FASTQ records until `budget` bytes have been collected or input ends
pub(crate) fn read_batch<R: BufRead>(
    reader: &mut fastq::io::Reader<R>,
    budget: Option<u64>,
    ids: &mut IdAllocator,
) -> Result<Vec<Sequence>, ParseError> {
    let mut sequences = Vec::new();
    let mut bytes = 0;

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTQ record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = Sequence::with_quality(
            ids.allocate(),
            name,
            record.sequence().to_vec(),
            record.quality_scores().to_vec(),
        )
        .map_err(|e| ParseError::InvalidRecord(e.to_string()))?;

        bytes += sequence.byte_size();
        sequences.push(sequence);

        if budget_reached(bytes, budget) {
            break;
        }
    }

    Ok(sequences)
}
