//! FASTA input and output for batch processing.
//!
//! Records are read raw: sequence lines are concatenated and whitespace is
//! dropped, but case and alphabet are left to [`crate::validate`].
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! UGCAUGCAUGCA...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to open file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty FASTA file")]
    EmptyFile,

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// A single FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier (header text up to the first whitespace, without '>')
    pub id: String,
    /// Raw sequence data
    pub data: String,
}

impl Record {
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }
}

/// Parses a FASTA file.
///
/// # Examples
///
/// ```no_run
/// use seqproc::fasta::parse_fasta_file;
///
/// let records = parse_fasta_file("sequences.fasta").unwrap();
/// println!("Loaded {} sequences", records.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Record>> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Parses FASTA content from a reader.
///
/// Handles both single-line and multi-line sequences. Records with no
/// sequence data are kept so that validation can report them as empty.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for (index, line_result) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }

            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(FastaError::InvalidFormat(format!(
                    "Empty sequence identifier at line {}",
                    line_number
                )));
            }
            current = Some(Record::new(id, String::new()));
        } else {
            let record = current
                .as_mut()
                .ok_or(FastaError::SequenceWithoutHeader(line_number))?;
            record.data.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    if records.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(records)
}

/// Parses FASTA content from a string.
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<Record>> {
    parse_fasta(content.as_bytes())
}

/// Writes one record, wrapping the sequence every `width` characters.
///
/// A `width` of 0 writes the sequence on a single line.
pub fn write_fasta_record<W: Write>(
    writer: &mut W,
    id: &str,
    sequence: &str,
    width: usize,
) -> std::io::Result<()> {
    writeln!(writer, ">{}", id)?;
    for line in crate::ui::wrap_sequence(sequence, width) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
