use serde::{Deserialize, Serialize};

/// Record family of a sequence file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceFormat {
    /// Two-line records without quality
    Fasta,
    /// Four-line records with quality
    Fastq,
}

impl std::fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fasta => write!(f, "FASTA"),
            Self::Fastq => write!(f, "FASTQ"),
        }
    }
}

/// What happened to a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionStatus {
    /// Shorter than the minimum length; the mapping engine was never consulted
    SkippedShort,
    /// Passed through as-is
    Unchanged,
    /// Data replaced with overlapping material
    Replaced,
}

impl CorrectionStatus {
    #[must_use]
    pub fn is_replaced(self) -> bool {
        self == Self::Replaced
    }
}
