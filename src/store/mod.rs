//! Read-only sequence storage.
//!
//! The store holds the reference (or read) collection that replacement material
//! is drawn from. It is built once, before any query is processed, and is only
//! read afterwards, so it can be shared by reference across worker threads.
//!
//! ## Example
//!
//! ```rust
//! use seq_patcher::core::sequence::{IdAllocator, Sequence};
//! use seq_patcher::store::SequenceStore;
//!
//! let mut ids = IdAllocator::new();
//! let contig = Sequence::new(ids.allocate(), "ctg1", b"ACGTACGT".to_vec());
//! let id = contig.id;
//!
//! let store = SequenceStore::new(vec![contig]);
//! assert_eq!(store.slice(id, 2, 6), Some(&b"GTAC"[..]));
//! ```

mod sequence_store;

pub use sequence_store::SequenceStore;
