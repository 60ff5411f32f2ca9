//! Batch commands over a list of records.
//!
//! A record read from a FASTA file carries its id; a sequence given on the
//! command line is a record with an empty id. Errors name the offending
//! record when it has an id.

use std::io::Write;

use anyhow::{Context, Result};

use crate::fasta::{write_fasta_record, Record};
use crate::report::to_json;
use crate::revcomp::reverse_complement;
use crate::stats::compute_stats;
use crate::ui::{render_stats, wrap_sequence};
use crate::validate::ValidateResult;

/// Attaches the record id to a core failure.
fn for_record<T>(result: ValidateResult<T>, record: &Record) -> Result<T> {
    if record.id.is_empty() {
        Ok(result?)
    } else {
        result.with_context(|| format!("Invalid sequence {}", record.id))
    }
}

/// Writes statistics for every record, as text or as JSON reports.
pub fn write_stats<W: Write>(out: &mut W, records: &[Record], json: bool) -> Result<()> {
    for record in records {
        let stats = for_record(compute_stats(&record.data), record)?;
        if json {
            writeln!(out, "{}", to_json(&stats)?)?;
        } else {
            if !record.id.is_empty() {
                writeln!(out, ">{}", record.id)?;
            }
            render_stats(out, &stats)?;
        }
    }
    Ok(())
}

/// Writes the reverse complement of every record.
///
/// With `as_fasta`, each result is a FASTA record under the input id;
/// otherwise the bare sequence is written.
pub fn write_reverse_complements<W: Write>(
    out: &mut W,
    records: &[Record],
    as_fasta: bool,
    width: usize,
) -> Result<()> {
    for record in records {
        let rc = for_record(reverse_complement(&record.data), record)?;
        if as_fasta {
            write_fasta_record(out, &record.id, &rc, width)?;
        } else {
            for line in wrap_sequence(&rc, width) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}
