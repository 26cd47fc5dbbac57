//! Turning minimizer hits into overlaps.
//!
//! Hits are binned by target, relative strand and diagonal band. Within each
//! band the longest co-linear subset of hits is kept, split wherever the gap
//! between neighbouring hits grows beyond `max_gap`, and each piece that is
//! long enough becomes one [`Overlap`].

use crate::core::overlap::{Overlap, Strand};
use crate::core::sequence::SequenceId;

/// A shared minimizer between the query and a store member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub rhs_id: SequenceId,
    pub strand: Strand,
    pub query_pos: u32,
    pub target_pos: u32,
}

impl Anchor {
    /// Diagonal for forward hits, anti-diagonal for reverse hits
    fn diagonal(&self) -> i64 {
        let (q, t) = (i64::from(self.query_pos), i64::from(self.target_pos));
        match self.strand {
            Strand::Forward => t - q,
            Strand::Reverse => t + q,
        }
    }

    /// Target coordinate oriented so that a co-linear chain is increasing
    fn chain_key(&self) -> i64 {
        match self.strand {
            Strand::Forward => i64::from(self.target_pos),
            Strand::Reverse => -i64::from(self.target_pos),
        }
    }
}

/// Thresholds for accepting a chain
#[derive(Debug, Clone, Copy)]
pub struct ChainParams {
    pub kmer_len: u32,
    pub bandwidth: u32,
    pub min_anchors: usize,
    pub min_matching_bases: u32,
    pub max_gap: u32,
}

/// Chain `anchors` into overlaps for query `lhs_id`.
///
/// The result is ordered by (lhs_begin, rhs_id, strand) so it does not depend
/// on hash map iteration order upstream.
#[must_use]
pub fn chain_anchors(lhs_id: SequenceId, mut anchors: Vec<Anchor>, params: &ChainParams) -> Vec<Overlap> {
    anchors.sort_unstable_by_key(|a| (a.rhs_id, a.strand, a.diagonal(), a.query_pos));

    let mut overlaps = Vec::new();
    let mut start = 0;
    for end in 1..=anchors.len() {
        let split = end == anchors.len() || {
            let (first, prev, next) = (&anchors[start], &anchors[end - 1], &anchors[end]);
            prev.rhs_id != next.rhs_id
                || prev.strand != next.strand
                || next.diagonal() - first.diagonal() > i64::from(params.bandwidth)
        };
        if split {
            chain_band(lhs_id, &anchors[start..end], params, &mut overlaps);
            start = end;
        }
    }

    overlaps.sort_by_key(|o| (o.lhs_begin, o.lhs_end, o.rhs_id, o.strand, o.rhs_begin));
    overlaps
}

/// Longest co-linear chain of one band, split at large gaps
fn chain_band(lhs_id: SequenceId, band: &[Anchor], params: &ChainParams, out: &mut Vec<Overlap>) {
    if band.len() < params.min_anchors {
        return;
    }

    // Equal query positions sort by descending key so at most one is chained
    let mut sorted = band.to_vec();
    sorted.sort_unstable_by_key(|a| (a.query_pos, std::cmp::Reverse(a.chain_key())));

    let keys: Vec<i64> = sorted.iter().map(Anchor::chain_key).collect();
    let chain: Vec<Anchor> = longest_increasing(&keys)
        .into_iter()
        .map(|i| sorted[i])
        .collect();

    let mut piece_start = 0;
    for end in 1..=chain.len() {
        let split = end == chain.len() || {
            let (prev, next) = (&chain[end - 1], &chain[end]);
            next.query_pos - prev.query_pos > params.max_gap
                || prev.target_pos.abs_diff(next.target_pos) > params.max_gap
        };
        if split {
            if let Some(overlap) = to_overlap(lhs_id, &chain[piece_start..end], params) {
                out.push(overlap);
            }
            piece_start = end;
        }
    }
}

fn to_overlap(lhs_id: SequenceId, piece: &[Anchor], params: &ChainParams) -> Option<Overlap> {
    if piece.len() < params.min_anchors {
        return None;
    }
    let (first, last) = (piece.first()?, piece.last()?);

    let matching: u32 = piece
        .windows(2)
        .map(|w| (w[1].query_pos - w[0].query_pos).min(params.kmer_len))
        .sum::<u32>()
        + params.kmer_len;
    if matching < params.min_matching_bases {
        return None;
    }

    let k = params.kmer_len;
    let rhs = match first.strand {
        Strand::Forward => (first.target_pos, last.target_pos + k),
        Strand::Reverse => (last.target_pos, first.target_pos + k),
    };
    Some(Overlap::new(
        lhs_id,
        (first.query_pos, last.query_pos + k),
        first.rhs_id,
        rhs,
        first.strand,
    ))
}

/// Indices of a longest strictly increasing subsequence of `keys`
fn longest_increasing(keys: &[i64]) -> Vec<usize> {
    // tails[l] = index ending the lowest-keyed increasing run of length l + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut previous: Vec<Option<usize>> = vec![None; keys.len()];

    for (i, &key) in keys.iter().enumerate() {
        let pos = tails.partition_point(|&j| keys[j] < key);
        if pos > 0 {
            previous[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut chain = Vec::with_capacity(tails.len());
    let mut current = tails.last().copied();
    while let Some(i) = current {
        chain.push(i);
        current = previous[i];
    }
    chain.reverse();
    chain
}
