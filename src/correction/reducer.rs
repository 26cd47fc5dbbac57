use std::cmp::Reverse;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::overlap::Overlap;
use crate::core::sequence::Sequence;
use crate::store::SequenceStore;

/// Stitch-Many stops collecting overlaps once the replacement exceeds this
/// fraction of the query length
pub const STITCH_MANY_MAX_FRACTION: f64 = 0.98;

/// Best-Single accepts an overlap when `(lhs_end - lhs_begin) / query_len`
/// is strictly greater than this
pub const BEST_SINGLE_MIN_COVERAGE: f64 = 0.98;

/// How the overlaps of one query are turned into a decision
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReductionStrategy {
    /// Concatenate the rhs material of every non-contained overlap, left to right
    #[default]
    StitchMany,
    /// Replace with the single longest overlap if it covers almost the whole query
    BestSingle,
}

/// Outcome of reducing a query's overlaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    /// Keep the query as it is
    NoChange,
    /// Build a new sequence from these overlaps' rhs slices, in order
    Replace {
        overlaps: Vec<Overlap>,
        /// Give the replacement a placeholder quality if the query had one
        synthesize_quality: bool,
    },
}

impl Reduction {
    #[must_use]
    pub fn is_replace(&self) -> bool {
        matches!(self, Self::Replace { .. })
    }
}

impl ReductionStrategy {
    /// Decide what to do with `query` given all of its overlaps.
    ///
    /// Overlaps whose rhs slice does not resolve against `store` are dropped
    /// first, so they neither shadow contained overlaps nor count towards the
    /// Stitch-Many length bound. Otherwise depends only on its arguments.
    #[must_use]
    pub fn reduce(
        self,
        query: &Sequence,
        mut overlaps: Vec<Overlap>,
        store: &SequenceStore,
    ) -> Reduction {
        overlaps.retain(|o| {
            let resolves = store.slice(o.rhs_id, o.rhs_begin, o.rhs_end).is_some();
            if !resolves {
                warn!("{}: ignoring unresolvable overlap {}", query.name, o);
            }
            resolves
        });
        if overlaps.is_empty() {
            return Reduction::NoChange;
        }
        match self {
            Self::StitchMany => stitch_many(query.inflated_len(), overlaps),
            Self::BestSingle => best_single(query.inflated_len(), &overlaps),
        }
    }
}

impl std::fmt::Display for ReductionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StitchMany => write!(f, "stitch-many"),
            Self::BestSingle => write!(f, "best-single"),
        }
    }
}

/// Drop every overlap whose lhs interval lies within an earlier one.
///
/// `overlaps` must already be in priority order. Containment is transitive, so
/// checking each candidate against the survivors only reaches the same set as
/// rescanning from the start after every removal.
fn remove_contained(overlaps: Vec<Overlap>) -> Vec<Overlap> {
    let mut kept: Vec<Overlap> = Vec::with_capacity(overlaps.len());
    for candidate in overlaps {
        if !kept.iter().any(|k| candidate.lhs_contained_in(k)) {
            kept.push(candidate);
        }
    }
    kept
}

#[allow(clippy::cast_precision_loss)] // Lengths are far below 2^52
fn stitch_many(query_len: usize, mut overlaps: Vec<Overlap>) -> Reduction {
    // Stable sorts: ties keep mapping order
    overlaps.sort_by_key(|o| Reverse(o.covered_len()));
    let mut survivors = remove_contained(overlaps);
    survivors.sort_by_key(|o| o.lhs_begin);

    let limit = STITCH_MANY_MAX_FRACTION * query_len as f64;
    let mut accumulated = 0u64;
    let mut taken = 0;
    for o in &survivors {
        accumulated += u64::from(o.rhs_len());
        taken += 1;
        if accumulated as f64 > limit {
            break;
        }
    }
    survivors.truncate(taken);

    Reduction::Replace {
        overlaps: survivors,
        synthesize_quality: false,
    }
}

#[allow(clippy::cast_precision_loss)]
fn best_single(query_len: usize, overlaps: &[Overlap]) -> Reduction {
    if query_len == 0 {
        return Reduction::NoChange;
    }

    // First maximum wins ties
    let mut best = overlaps[0];
    for o in &overlaps[1..] {
        if o.covered_len() > best.covered_len() {
            best = *o;
        }
    }

    let coverage = f64::from(best.covered_len()) / query_len as f64;
    if coverage > BEST_SINGLE_MIN_COVERAGE {
        Reduction::Replace {
            overlaps: vec![best],
            synthesize_quality: true,
        }
    } else {
        Reduction::NoChange
    }
}
