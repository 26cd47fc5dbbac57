use serde::{Deserialize, Serialize};

use crate::core::sequence::SequenceId;

/// Orientation of the rhs sequence relative to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    /// Same orientation as the query
    Forward,
    /// rhs must be reverse-complemented to match the query
    Reverse,
}

impl Strand {
    /// Relative strand of two oriented k-mer hits
    #[must_use]
    pub fn relative_to(self, other: Strand) -> Strand {
        if self == other {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// A local alignment between a query (lhs) and a store member (rhs).
///
/// Intervals are half-open. rhs coordinates are always on the forward strand
/// of the rhs sequence, regardless of `strand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlap {
    pub lhs_id: SequenceId,
    pub lhs_begin: u32,
    pub lhs_end: u32,
    pub rhs_id: SequenceId,
    pub rhs_begin: u32,
    pub rhs_end: u32,
    pub strand: Strand,
}

impl Overlap {
    #[must_use]
    pub fn new(
        lhs_id: SequenceId,
        (lhs_begin, lhs_end): (u32, u32),
        rhs_id: SequenceId,
        (rhs_begin, rhs_end): (u32, u32),
        strand: Strand,
    ) -> Self {
        debug_assert!(lhs_begin <= lhs_end, "lhs interval is reversed");
        debug_assert!(rhs_begin <= rhs_end, "rhs interval is reversed");
        Self {
            lhs_id,
            lhs_begin,
            lhs_end,
            rhs_id,
            rhs_begin,
            rhs_end,
            strand,
        }
    }

    /// Bases of the query covered by this overlap; the score proxy for ranking
    #[must_use]
    pub fn covered_len(&self) -> u32 {
        self.lhs_end - self.lhs_begin
    }

    /// Length of the replacement material this overlap contributes
    #[must_use]
    pub fn rhs_len(&self) -> u32 {
        self.rhs_end - self.rhs_begin
    }

    /// Is this overlap's lhs interval inside `other`'s?
    #[must_use]
    pub fn lhs_contained_in(&self, other: &Overlap) -> bool {
        other.lhs_begin <= self.lhs_begin && self.lhs_end <= other.lhs_end
    }
}

impl std::fmt::Display for Overlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} {} {}:{}-{}",
            self.lhs_id,
            self.lhs_begin,
            self.lhs_end,
            self.strand,
            self.rhs_id,
            self.rhs_begin,
            self.rhs_end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ovl(lhs: (u32, u32), rhs: (u32, u32)) -> Overlap {
        Overlap::new(SequenceId(0), lhs, SequenceId(1), rhs, Strand::Forward)
    }

    #[test]
    fn test_lengths() {
        let o = ovl((100, 350), (0, 260));
        assert_eq!(o.covered_len(), 250);
        assert_eq!(o.rhs_len(), 260);
    }

    #[test]
    fn test_lhs_containment() {
        let outer = ovl((0, 1000), (0, 1000));
        let inner = ovl((10, 900), (0, 890));
        let straddling = ovl((900, 1100), (0, 200));

        assert!(inner.lhs_contained_in(&outer));
        assert!(outer.lhs_contained_in(&outer));
        assert!(!outer.lhs_contained_in(&inner));
        assert!(!straddling.lhs_contained_in(&outer));
    }

    #[test]
    fn test_relative_strand() {
        assert_eq!(Strand::Forward.relative_to(Strand::Forward), Strand::Forward);
        assert_eq!(Strand::Reverse.relative_to(Strand::Reverse), Strand::Forward);
        assert_eq!(Strand::Forward.relative_to(Strand::Reverse), Strand::Reverse);
    }

    #[test]
    fn test_display() {
        let o = Overlap::new(SequenceId(3), (5, 10), SequenceId(7), (20, 25), Strand::Reverse);
        assert_eq!(o.to_string(), "3:5-10 - 7:20-25");
    }
}
