//! Text rendering for the interactive shell and the subcommands.
//!
//! Everything writes to a generic `Write` so the session can be driven
//! against an in-memory buffer.

pub mod glyphs;

use std::borrow::Cow;
use std::io::{self, Write};

use crate::stats::StatsReport;
use glyphs::Glyphs;

/// Program title shown in the banner.
pub const TITLE: &str = "Advanced Genomic Sequence Processor";

/// Menu entries, in choice order.
pub const MENU_ENTRIES: [&str; 5] = [
    "Load/Input Sequence",
    "Analyze Sequence (GC Content & Stats)",
    "Generate Reverse Complement",
    "Save Analysis Report",
    "Exit",
];

/// Splits a sequence into lines of at most `width` characters.
///
/// A width of 0 keeps the sequence on one line.
pub fn wrap_sequence(sequence: &str, width: usize) -> Vec<Cow<'_, str>> {
    if width == 0 {
        return vec![Cow::Borrowed(sequence)];
    }
    let options = textwrap::Options::new(width).break_words(true);
    textwrap::wrap(sequence, options)
}

/// Renders the banner printed once at startup.
pub fn render_banner<W: Write>(out: &mut W, glyphs: &Glyphs) -> io::Result<()> {
    writeln!(out, "{}{}", glyphs.banner, TITLE)?;
    writeln!(out, "{}", glyphs.h_separator.repeat(TITLE.len() + 4))
}

/// Renders the numbered menu, without the prompt.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for (i, entry) in MENU_ENTRIES.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, entry)?;
    }
    Ok(())
}

/// Writes a prompt and flushes so it is visible before reading input.
pub fn render_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}

/// Writes one status line prefixed with `marker`.
pub fn render_status<W: Write>(out: &mut W, marker: &str, message: &str) -> io::Result<()> {
    writeln!(out, "{}{}", marker, message)
}

/// Renders statistics as shown to a user.
pub fn render_stats<W: Write>(out: &mut W, stats: &StatsReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Length: {} bp", stats.length)?;
    writeln!(out, "GC Content: {}%", format_percentage(stats.gc_percentage))?;
    writeln!(out, "Nucleotide Counts: {}", stats.counts)
}

/// Renders a reverse complement under a heading.
pub fn render_reverse_complement<W: Write>(
    out: &mut W,
    reverse_complement: &str,
    width: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Reverse Complement:")?;
    for line in wrap_sequence(reverse_complement, width) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Formats a percentage the way it appears in the JSON report (`100.0`, `33.33`).
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
