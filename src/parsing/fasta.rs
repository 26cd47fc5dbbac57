//! FASTA record reading using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files; decompression is
//! set up by [`SequenceParser`](super::SequenceParser).

use std::io::BufRead;

use noodles::fasta;

use crate::core::sequence::{IdAllocator, Sequence};
use crate::parsing::reader::{budget_reached, ParseError};

/// Read FASTA records until `budget` bytes have been collected or input ends
pub(crate) fn read_batch<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
    budget: Option<u64>,
    ids: &mut IdAllocator,
) -> Result<Vec<Sequence>, ParseError> {
    let mut sequences = Vec::new();
    let mut bytes = 0;

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let data = record.sequence().as_ref().to_vec();
        let sequence = Sequence::new(ids.allocate(), name, data);

        bytes += sequence.byte_size();
        sequences.push(sequence);

        if budget_reached(bytes, budget) {
            break;
        }
    }

    Ok(sequences)
}
