//! Canonical (k, w)-minimizer extraction.
//!
//! Each k-mer is encoded two bits per base on both strands; the smaller of the
//! two codes is the canonical k-mer and its strand is recorded. Canonical codes
//! are hashed with an invertible 64-bit hash so that low-complexity k-mers do
//! not dominate, and the minimum hash of every window of `w` consecutive k-mers
//! is kept. Palindromic k-mers (equal on both strands) are skipped, and any
//! non-ACGT base resets the k-mer.

use std::collections::VecDeque;

use crate::core::overlap::Strand;

/// A sampled k-mer: hash value, start position on the sequence, and the strand
/// its canonical form was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimizer {
    pub value: u64,
    pub position: u32,
    pub strand: Strand,
}

#[inline]
fn base_code(base: u8) -> Option<u64> {
    match base {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' | b'U' | b'u' => Some(3),
        _ => None,
    }
}

/// Thomas Wang's invertible integer hash, restricted to `mask`
#[inline]
pub(crate) fn hash64(key: u64, mask: u64) -> u64 {
    let mut key = (!key).wrapping_add(key << 21) & mask;
    key ^= key >> 24;
    key = (key.wrapping_add(key << 3)).wrapping_add(key << 8) & mask;
    key ^= key >> 14;
    key = (key.wrapping_add(key << 2)).wrapping_add(key << 4) & mask;
    key ^= key >> 28;
    key.wrapping_add(key << 31) & mask
}

/// Extract minimizers from `seq`.
///
/// `kmer_len` must be in `1..=32` and `window_len` at least 1. Sequences
/// shorter than `kmer_len` yield nothing. Consecutive windows sharing the same
/// minimum produce a single minimizer.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Positions fit in u32 for sequence lengths we index
pub fn minimizers(seq: &[u8], kmer_len: usize, window_len: usize) -> Vec<Minimizer> {
    debug_assert!((1..=32).contains(&kmer_len));
    debug_assert!(window_len >= 1);

    let mask: u64 = if kmer_len == 32 {
        u64::MAX
    } else {
        (1u64 << (2 * kmer_len)) - 1
    };
    let shift = 2 * (kmer_len as u64 - 1);

    let mut result: Vec<Minimizer> = Vec::new();
    // (kmer index, minimizer); values increase from front to back
    let mut window: VecDeque<(usize, Minimizer)> = VecDeque::with_capacity(window_len);

    let mut forward = 0u64;
    let mut reverse = 0u64;
    let mut run = 0usize;
    let mut kmer_index = 0usize;

    for (i, &base) in seq.iter().enumerate() {
        let Some(code) = base_code(base) else {
            run = 0;
            window.clear();
            kmer_index = 0;
            continue;
        };

        forward = ((forward << 2) | code) & mask;
        reverse = (reverse >> 2) | ((3 - code) << shift);
        run += 1;
        if run < kmer_len || forward == reverse {
            continue;
        }

        let (canonical, strand) = if forward < reverse {
            (forward, Strand::Forward)
        } else {
            (reverse, Strand::Reverse)
        };
        let candidate = Minimizer {
            value: hash64(canonical, mask),
            position: (i + 1 - kmer_len) as u32,
            strand,
        };

        while window
            .back()
            .is_some_and(|(_, back)| back.value > candidate.value)
        {
            window.pop_back();
        }
        window.push_back((kmer_index, candidate));
        while window
            .front()
            .is_some_and(|(index, _)| *index + window_len <= kmer_index)
        {
            window.pop_front();
        }

        kmer_index += 1;
        if kmer_index >= window_len {
            if let Some(&(_, front)) = window.front() {
                if result.last() != Some(&front) {
                    result.push(front);
                }
            }
        }
    }

    result
}
