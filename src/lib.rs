//! # seq-patcher
//!
//! A library for correcting long sequencing reads (or contigs) by replacing
//! them with material from overlapping, higher-confidence sequences.
//!
//! Each query is mapped against an indexed reference set. Its overlaps are
//! reduced to a decision, and the decision is materialized as a new sequence:
//!
//! - **Stitch-Many**: keep every overlap not contained in a longer one and
//!   concatenate their reference slices left to right
//! - **Best-Single**: replace the query with its longest overlap's slice, if
//!   that overlap covers nearly the whole query
//!
//! Queries run in parallel on a fixed worker pool; results always come back in
//! input order.
//!
//! ## Example
//!
//! ```rust
//! use seq_patcher::core::sequence::{IdAllocator, Sequence};
//! use seq_patcher::correction::{CorrectionConfig, Scheduler};
//! use seq_patcher::mapping::{EngineConfig, MappingEngine, MinimizerEngine};
//! use seq_patcher::store::SequenceStore;
//!
//! let mut ids = IdAllocator::new();
//! let store = SequenceStore::new(vec![
//!     Sequence::new(ids.allocate(), "contig", b"ACGTTGCA".repeat(300)),
//! ]);
//!
//! let mut engine = MinimizerEngine::new(EngineConfig::default()).unwrap();
//! engine.minimize(&store);
//!
//! let scheduler = Scheduler::new(&engine, &store, CorrectionConfig::default()).unwrap();
//! let short_read = Sequence::new(ids.allocate(), "read", b"ACGT".to_vec());
//! let results = scheduler.process_batch(vec![short_read]);
//! assert_eq!(results[0].sequence.data, b"ACGT");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequences, identities and overlaps
//! - [`store`]: Read-only reference storage
//! - [`parsing`]: FASTA/FASTQ readers with byte-budgeted batches
//! - [`mapping`]: Minimizer index and overlap chaining
//! - [`correction`]: Overlap reduction, sequence building and scheduling
//! - [`output`]: FASTA/FASTQ record writing
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod correction;
pub mod mapping;
pub mod output;
pub mod parsing;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::overlap::{Overlap, Strand};
pub use core::sequence::{IdAllocator, Sequence, SequenceId};
pub use core::types::*;
pub use correction::{CorrectionConfig, Reduction, ReductionStrategy, Scheduler};
pub use mapping::{EngineConfig, MapOptions, MappingEngine, MinimizerEngine};
pub use store::SequenceStore;
