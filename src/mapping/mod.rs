//! Overlap discovery between queries and the sequence store.
//!
//! The correction pipeline only depends on the [`MappingEngine`] trait: index a
//! [`SequenceStore`](crate::store::SequenceStore) once with `minimize`, then
//! `map` each query to its local alignments. [`MinimizerEngine`] is the
//! bundled implementation:
//!
//! 1. **Sampling**: canonical (k, w)-minimizers of every store member
//! 2. **Indexing**: minimizer value to (identity, position, strand), with the
//!    most frequent minimizers masked
//! 3. **Anchoring**: query minimizers looked up in the index
//! 4. **Chaining**: anchors grouped per target, strand and diagonal band; the
//!    longest co-linear chain per band becomes an [`Overlap`](crate::core::overlap::Overlap)
//!
//! ## Defaults
//!
//! | Parameter | Default |
//! |-----------|---------|
//! | k-mer length | 15 |
//! | window length | 5 |
//! | bandwidth | 500 |
//! | minimum chain anchors | 4 |
//! | minimum matching bases | 100 |
//! | maximum gap | 10 000 |
//! | masked frequency | 0.001 |
//!
//! ## Example
//!
//! ```rust
//! use seq_patcher::core::sequence::{IdAllocator, Sequence};
//! use seq_patcher::mapping::{EngineConfig, MapOptions, MappingEngine, MinimizerEngine};
//! use seq_patcher::store::SequenceStore;
//!
//! let mut ids = IdAllocator::new();
//! let store = SequenceStore::new(vec![Sequence::new(ids.allocate(), "ref", b"ACGT".to_vec())]);
//!
//! let mut engine = MinimizerEngine::new(EngineConfig::default()).unwrap();
//! engine.minimize(&store);
//!
//! let query = Sequence::new(ids.allocate(), "read", b"ACGT".to_vec());
//! assert!(engine.map(&query, MapOptions::default()).is_empty());
//! ```

mod chaining;
pub mod engine;
pub mod index;
pub mod minimizer;

pub use engine::{EngineConfig, MapOptions, MappingEngine, MinimizerEngine};
