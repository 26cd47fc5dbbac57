//! Record emission.
//!
//! | Family | Layout |
//! |--------|--------|
//! | FASTA | `>name`, sequence on one line |
//! | FASTQ | `@name`, sequence, `+`, quality; `^` repeated when the record has none |

use std::io::{self, Write};

use crate::core::sequence::Sequence;
use crate::core::types::SequenceFormat;
use crate::correction::PLACEHOLDER_QUALITY;

/// Writes sequences as FASTA or FASTQ records
pub struct RecordWriter<W: Write> {
    inner: W,
    format: SequenceFormat,
    records: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, format: SequenceFormat) -> Self {
        Self {
            inner,
            format,
            records: 0,
        }
    }

    /// Records written so far
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Write one record.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn write(&mut self, sequence: &Sequence) -> io::Result<()> {
        match self.format {
            SequenceFormat::Fasta => {
                writeln!(self.inner, ">{}", sequence.name)?;
                self.inner.write_all(&sequence.data)?;
                self.inner.write_all(b"\n")?;
            }
            SequenceFormat::Fastq => {
                writeln!(self.inner, "@{}", sequence.name)?;
                self.inner.write_all(&sequence.data)?;
                self.inner.write_all(b"\n+\n")?;
                match &sequence.quality {
                    Some(quality) => self.inner.write_all(quality)?,
                    None => self
                        .inner
                        .write_all(&vec![PLACEHOLDER_QUALITY; sequence.data.len()])?,
                }
                self.inner.write_all(b"\n")?;
            }
        }
        self.records += 1;
        Ok(())
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from flushing.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
