//! Command-line interface for seq-patcher.
//!
//! One command: index the reference set, then correct every query record
//! against it and write the results to standard output in input order.
//!
//! ## Usage
//!
//! ```text
//! # Correct reads against contigs, FASTA in -> FASTA out
//! seq-patcher contigs.fa.gz reads.fa.gz > corrected.fa
//!
//! # Single-source replacement, 16 threads, quality-bearing output
//! seq-patcher -s best-single -t 16 -f fastq contigs.fa reads.fq > corrected.fq
//!
//! # Only emit reads that were replaced, and write a JSON run summary
//! seq-patcher --drop-unchanged --stats summary.json contigs.fa reads.fq > corrected.fq
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::core::types::SequenceFormat;
use crate::correction::config::{DEFAULT_BATCH_BYTES, DEFAULT_MIN_QUERY_LENGTH};
use crate::correction::{CorrectionConfig, ReductionStrategy};
use crate::mapping::engine::{DEFAULT_FREQUENCY, DEFAULT_KMER_LEN, DEFAULT_WINDOW_LEN};
use crate::mapping::EngineConfig;

pub mod correct;

#[derive(Parser)]
#[command(name = "seq-patcher")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Correct long reads by patching them with overlapping sequences")]
#[command(
    long_about = "seq-patcher maps every query sequence against a reference set and replaces it with material from the overlapping reference sequences.\n\nQueries shorter than --min-length, and queries without a usable overlap, are written out unchanged. Output records follow the order of the query file."
)]
pub struct Cli {
    /// Reference sequences (FASTA/FASTQ, optionally gzipped) to draw replacement material from
    pub reference: Option<PathBuf>,

    /// Query sequences (FASTA/FASTQ, optionally gzipped) to correct
    pub queries: Option<PathBuf>,

    /// Number of worker threads (0 = all available cores)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// How overlaps are turned into a replacement
    #[arg(short, long, value_enum, default_value_t = ReductionStrategy::StitchMany)]
    pub strategy: ReductionStrategy,

    /// Queries shorter than this are passed through without mapping
    #[arg(long, default_value_t = DEFAULT_MIN_QUERY_LENGTH)]
    pub min_length: usize,

    /// Bytes of query records loaded per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_BYTES)]
    pub batch_size: u64,

    /// k-mer length used for minimizers
    #[arg(short, long = "kmer-length", default_value_t = DEFAULT_KMER_LEN)]
    pub kmer_len: usize,

    /// Window length used for minimizers
    #[arg(short, long = "window-length", default_value_t = DEFAULT_WINDOW_LEN)]
    pub window_len: usize,

    /// Fraction of most frequent minimizers to ignore
    #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
    pub frequency: f64,

    /// Output record family (defaults to the family of the query file)
    #[arg(short = 'f', long, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,

    /// Only write queries that were replaced
    #[arg(long)]
    pub drop_unchanged: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn correction_config(&self) -> CorrectionConfig {
        CorrectionConfig {
            strategy: self.strategy,
            min_query_length: self.min_length,
            batch_bytes: self.batch_size,
            threads: self.threads,
        }
    }

    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            kmer_len: self.kmer_len,
            window_len: self.window_len,
            frequency: self.frequency,
            ..EngineConfig::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Same family as the query file
    Auto,
    Fasta,
    Fastq,
}

impl OutputFormat {
    /// The family to write for queries read as `input`
    #[must_use]
    pub fn resolve(self, input: SequenceFormat) -> SequenceFormat {
        match self {
            Self::Auto => input,
            Self::Fasta => SequenceFormat::Fasta,
            Self::Fastq => SequenceFormat::Fastq,
        }
    }
}
