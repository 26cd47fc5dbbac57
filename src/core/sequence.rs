use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Quality length {quality} does not match sequence length {data} for '{name}'")]
    QualityLengthMismatch {
        name: String,
        data: usize,
        quality: usize,
    },
}

/// Process-scoped identity of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceId(pub u32);

impl std::fmt::Display for SequenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out sequence identities in allocation order.
///
/// One allocator is owned per session and passed by `&mut` to whatever creates
/// sequences, so identities are deterministic for a given input order.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating at `first`
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> SequenceId {
        let id = SequenceId(self.next);
        self.next += 1;
        id
    }

    /// Number of identities handed out so far (when started at zero)
    #[must_use]
    pub fn peek(&self) -> u32 {
        self.next
    }
}

/// A nucleotide record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: SequenceId,

    /// Record name (first word of the header line)
    pub name: String,

    /// Nucleotides, stored inflated
    pub data: Vec<u8>,

    /// Per-base quality, same length as `data` when present
    pub quality: Option<Vec<u8>>,
}

impl Sequence {
    pub fn new(id: SequenceId, name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id,
            name: name.into(),
            data,
            quality: None,
        }
    }

    /// Create a sequence carrying per-base quality.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::QualityLengthMismatch` if `quality` and `data`
    /// differ in length.
    pub fn with_quality(
        id: SequenceId,
        name: impl Into<String>,
        data: Vec<u8>,
        quality: Vec<u8>,
    ) -> Result<Self, SequenceError> {
        let name = name.into();
        if quality.len() != data.len() {
            return Err(SequenceError::QualityLengthMismatch {
                name,
                data: data.len(),
                quality: quality.len(),
            });
        }
        Ok(Self {
            id,
            name,
            data,
            quality: Some(quality),
        })
    }

    /// Logical (decompressed) length
    #[must_use]
    pub fn inflated_len(&self) -> usize {
        self.data.len()
    }

    /// Approximate in-memory size, used for batch budgeting
    #[must_use]
    pub fn byte_size(&self) -> u64 {
        (self.name.len() + self.data.len() + self.quality.as_ref().map_or(0, Vec::len)) as u64
    }
}

const fn complement_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    // Pairs are swapped both ways so the table is an involution
    let pairs: [(u8, u8); 6] = [
        (b'A', b'T'),
        (b'C', b'G'),
        (b'R', b'Y'),
        (b'K', b'M'),
        (b'B', b'V'),
        (b'D', b'H'),
    ];
    let mut p = 0;
    while p < 6 {
        let (a, b) = pairs[p];
        table[a as usize] = b;
        table[b as usize] = a;
        table[a.to_ascii_lowercase() as usize] = b.to_ascii_lowercase();
        table[b.to_ascii_lowercase() as usize] = a.to_ascii_lowercase();
        p += 1;
    }
    table
}

const COMPLEMENT: [u8; 256] = complement_table();

/// Reverse-complement a nucleotide slice.
///
/// IUPAC ambiguity codes are complemented; `N`, `S`, `W` and any other byte map
/// to themselves, so applying this twice always returns the input.
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| COMPLEMENT[b as usize]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ACGT"), b"ACGT");
        assert_eq!(reverse_complement(b"AACG"), b"CGTT");
        assert_eq!(reverse_complement(b"acgtN"), b"Nacgt");
        assert_eq!(reverse_complement(b"RYKM"), b"KMRY");
        assert!(reverse_complement(b"").is_empty());
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(reverse_complement(&reverse_complement(&all_bytes)), all_bytes);

        let seq = b"GATTACAnnRYSWKMBDHVgattaca";
        assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
    }

    #[test]
    fn test_id_allocator_is_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(), SequenceId(0));
        assert_eq!(ids.allocate(), SequenceId(1));
        assert_eq!(ids.peek(), 2);

        let mut ids = IdAllocator::starting_at(10);
        assert_eq!(ids.allocate(), SequenceId(10));
    }

    #[test]
    fn test_with_quality_checks_length() {
        let ok = Sequence::with_quality(SequenceId(0), "r1", b"ACGT".to_vec(), b"IIII".to_vec());
        assert!(ok.is_ok());

        let err = Sequence::with_quality(SequenceId(0), "r1", b"ACGT".to_vec(), b"III".to_vec());
        assert_eq!(
            err,
            Err(SequenceError::QualityLengthMismatch {
                name: "r1".to_string(),
                data: 4,
                quality: 3,
            })
        );
    }

    #[test]
    fn test_byte_size() {
        let seq = Sequence::with_quality(SequenceId(0), "r1", b"ACGT".to_vec(), b"IIII".to_vec())
            .unwrap();
        assert_eq!(seq.byte_size(), 10);
        assert_eq!(seq.inflated_len(), 4);
    }
}
