use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use noodles::{fasta, fastq};
use thiserror::Error;
use tracing::debug;

use crate::core::sequence::{IdAllocator, Sequence};
use crate::core::types::SequenceFormat;

/// Extensions accepted by [`SequenceParser::open`], for diagnostics
pub const VALID_EXTENSIONS: &str =
    ".fasta, .fasta.gz, .fa, .fa.gz, .fastq, .fastq.gz, .fq, .fq.gz";

const READ_BUFFER_CAPACITY: usize = 1 << 20;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open {}: {error}", .path.display())]
    Open {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error(
        "file {} has unsupported format extension (valid extensions: {})",
        .0.display(),
        VALID_EXTENSIONS
    )]
    UnsupportedFormat(PathBuf),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Detect the record family of a file from its name.
///
/// Returns the family and whether the file is gzip/bgzip compressed, or `None`
/// for an unsupported extension.
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn detect_format(path: &Path) -> Option<(SequenceFormat, bool)> {
    let path_str = path.to_string_lossy().to_lowercase();

    let (stem, compressed) = if let Some(stem) = path_str.strip_suffix(".gz") {
        (stem, true)
    } else if let Some(stem) = path_str.strip_suffix(".bgz") {
        (stem, true)
    } else {
        (path_str.as_str(), false)
    };

    if stem.ends_with(".fasta") || stem.ends_with(".fa") || stem.ends_with(".fna") {
        Some((SequenceFormat::Fasta, compressed))
    } else if stem.ends_with(".fastq") || stem.ends_with(".fq") {
        Some((SequenceFormat::Fastq, compressed))
    } else {
        None
    }
}

enum Records {
    Fasta(fasta::io::Reader<Box<dyn BufRead>>),
    Fastq(fastq::io::Reader<Box<dyn BufRead>>),
}

/// Streaming reader over a FASTA or FASTQ file
pub struct SequenceParser {
    format: SequenceFormat,
    records: Records,
}

impl SequenceParser {
    /// Open a sequence file, choosing the parser from its extension.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` for an unknown extension, or
    /// `ParseError::Open` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let (format, compressed) =
            detect_format(path).ok_or_else(|| ParseError::UnsupportedFormat(path.to_path_buf()))?;

        let file = File::open(path).map_err(|error| ParseError::Open {
            path: path.to_path_buf(),
            error,
        })?;

        let inner: Box<dyn BufRead> = if compressed {
            Box::new(BufReader::with_capacity(
                READ_BUFFER_CAPACITY,
                MultiGzDecoder::new(file),
            ))
        } else {
            Box::new(BufReader::with_capacity(READ_BUFFER_CAPACITY, file))
        };

        debug!(
            "Opened {} as {format}{}",
            path.display(),
            if compressed { " (gzip)" } else { "" }
        );

        let records = match format {
            SequenceFormat::Fasta => Records::Fasta(fasta::io::Reader::new(inner)),
            SequenceFormat::Fastq => Records::Fastq(fastq::io::Reader::new(inner)),
        };

        Ok(Self { format, records })
    }

    /// Record family of the underlying file
    #[must_use]
    pub fn format(&self) -> SequenceFormat {
        self.format
    }

    /// Read the next batch of records.
    ///
    /// Reading stops once the cumulative byte size of the batch reaches
    /// `budget`; the record that crosses the budget is included. `None` reads to
    /// the end of the file. An empty batch signals end of input.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Noodles` for a malformed record, or
    /// `ParseError::InvalidRecord` if a FASTQ quality line does not match its
    /// sequence length.
    pub fn parse(
        &mut self,
        budget: Option<u64>,
        ids: &mut IdAllocator,
    ) -> Result<Vec<Sequence>, ParseError> {
        match &mut self.records {
            Records::Fasta(reader) => super::fasta::read_batch(reader, budget, ids),
            Records::Fastq(reader) => super::fastq::read_batch(reader, budget, ids),
        }
    }
}

/// Has a batch of `bytes` reached `budget`?
pub(crate) fn budget_reached(bytes: u64, budget: Option<u64>) -> bool {
    budget.is_some_and(|limit| bytes >= limit)
}
