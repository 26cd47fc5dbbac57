//! Overlap reduction, sequence building and parallel scheduling.
//!
//! Per query, the pipeline is:
//!
//! 1. **Gate**: queries shorter than `min_query_length` are passed through
//!    without consulting the mapping engine
//! 2. **Map**: the engine reports the query's overlaps against the store
//! 3. **Reduce**: a [`ReductionStrategy`] turns the overlaps into a
//!    [`Reduction`], either `NoChange` or `Replace` with an ordered overlap list
//! 4. **Build**: [`build_sequence`] materializes the output sequence
//!
//! The [`Scheduler`] runs this for every query of a batch on a fixed-size
//! worker pool and returns the results in input order.
//!
//! ## Strategies
//!
//! | Strategy | Keeps | Accepts when | Quality |
//! |----------|-------|--------------|---------|
//! | `stitch-many` | every overlap not contained in a longer one, left to right | at least one overlap | dropped |
//! | `best-single` | the longest overlap | it covers more than 98% of the query | `^` placeholder |
//!
//! ## Example
//!
//! ```rust
//! use seq_patcher::core::overlap::{Overlap, Strand};
//! use seq_patcher::core::sequence::{Sequence, SequenceId};
//! use seq_patcher::correction::{Reduction, ReductionStrategy};
//! use seq_patcher::store::SequenceStore;
//!
//! let store = SequenceStore::new(vec![Sequence::new(SequenceId(0), "ref", vec![b'C'; 5000])]);
//! let query = Sequence::new(SequenceId(1), "read", vec![b'A'; 1200]);
//! let overlaps = vec![Overlap::new(SequenceId(1), (0, 1000), SequenceId(0), (0, 1000), Strand::Forward)];
//!
//! // 1000 of 1200 bases covered is not enough for a single-source replacement
//! assert_eq!(ReductionStrategy::BestSingle.reduce(&query, overlaps.clone(), &store), Reduction::NoChange);
//! assert!(ReductionStrategy::StitchMany.reduce(&query, overlaps, &store).is_replace());
//! ```

pub mod builder;
pub mod config;
pub mod reducer;
pub mod scheduler;
pub mod stats;

pub use builder::{build_sequence, PLACEHOLDER_QUALITY};
pub use config::CorrectionConfig;
pub use reducer::{Reduction, ReductionStrategy};
pub use scheduler::{CorrectedSequence, Scheduler, SchedulerError};
pub use stats::CorrectionStats;
