//! Parsers for the sequence files consumed by the correction pipeline.
//!
//! This module provides readers for:
//!
//! - **FASTA files**: quality-less two-line records
//! - **FASTQ files**: four-line records with per-base quality
//!
//! Both families may be gzip/bgzip compressed. The family is detected from the
//! file name suffix:
//!
//! | Family | Extensions |
//! |--------|------------|
//! | FASTA  | `.fasta`, `.fa`, `.fna` (+ `.gz`, `.bgz`) |
//! | FASTQ  | `.fastq`, `.fq` (+ `.gz`, `.bgz`) |
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_patcher::core::sequence::IdAllocator;
//! use seq_patcher::parsing::SequenceParser;
//! use std::path::Path;
//!
//! let mut ids = IdAllocator::new();
//! let mut parser = SequenceParser::open(Path::new("reads.fastq.gz")).unwrap();
//!
//! // Stream the file in ~64 MiB batches
//! loop {
//!     let batch = parser.parse(Some(64 << 20), &mut ids).unwrap();
//!     if batch.is_empty() {
//!         break;
//!     }
//!     println!("{} records", batch.len());
//! }
//! ```

mod fasta;
mod fastq;
mod reader;

pub use reader::{detect_format, ParseError, SequenceParser, VALID_EXTENSIONS};
