//! Core data types for overlap-based read correction.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Sequence`]: A named nucleotide record with optional per-base quality
//! - [`SequenceId`], [`IdAllocator`]: Stable process-scoped identities and their allocator
//! - [`Overlap`], [`Strand`]: A local alignment between a query and a store member
//! - [`SequenceFormat`]: The record family (FASTA or FASTQ) a sequence came from
//!
//! ## Coordinates
//!
//! All intervals are 0-based and half-open:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `lhs_begin..lhs_end` | Aligned region on the query |
//! | `rhs_begin..rhs_end` | Aligned region on the store member, forward coordinates |
//! | `strand` | Whether the rhs region must be reverse-complemented to match the query |

pub mod overlap;
pub mod sequence;
pub mod types;
