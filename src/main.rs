//! seqproc - DNA/RNA Sequence Processor
//!
//! ## Usage
//!
//! ```bash
//! seqproc                              # interactive menu
//! seqproc validate "acg t"             # canonical sequence
//! seqproc stats GGCC --json            # statistics as JSON
//! seqproc revcomp --fasta reads.fa     # reverse complement of each record
//! seqproc save AUGC -o report.json     # write a JSON report
//! ```
//!
//! A sequence argument of `-` is read from stdin.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};

use seqproc::batch::{write_reverse_complements, write_stats};
use seqproc::controller::run_interactive;
use seqproc::fasta::{parse_fasta_file, Record};
use seqproc::report::{save_report, DEFAULT_REPORT_PATH};
use seqproc::stats::compute_stats;
use seqproc::ui::{glyphs, wrap_sequence};
use seqproc::validate::validate;

/// Default wrap width for FASTA output.
const FASTA_LINE_WIDTH: usize = 60;

/// seqproc - validate, analyze and reverse-complement DNA/RNA sequences
///
/// Without a subcommand, starts the interactive menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use plain ASCII status markers instead of emoji
    #[arg(long, global = true)]
    ascii: bool,

    /// Wrap sequence output every N characters (0 = no wrapping)
    #[arg(short = 'w', long = "line-width", global = true)]
    line_width: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive menu (default)
    Interactive,

    /// Clean and validate a sequence, printing its canonical form
    Validate {
        /// Raw sequence, or "-" for stdin
        sequence: String,
    },

    /// Print length, base counts and GC content
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the reverse complement
    Revcomp {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Save a JSON statistics report
    Save {
        /// Raw sequence, or "-" for stdin
        sequence: String,

        /// Report path
        #[arg(short = 'o', long = "output", default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
}

/// Where the sequences of a batch command come from.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Raw sequence, or "-" for stdin
    sequence: Option<String>,

    /// FASTA file; every record is processed
    #[arg(long = "fasta")]
    fasta: Option<PathBuf>,
}

/// Resolves a sequence argument, reading stdin for "-".
fn read_sequence_arg(sequence: &str) -> Result<String> {
    if sequence == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read sequence from stdin")?;
        Ok(buf)
    } else {
        Ok(sequence.to_string())
    }
}

/// Loads the records of a batch command. A lone sequence gets no id.
fn load_records(input: &InputArgs) -> Result<Vec<Record>> {
    if let Some(path) = &input.fasta {
        let records = parse_fasta_file(path)
            .with_context(|| format!("Failed to read FASTA file {}", path.display()))?;
        debug!("Read {} records from {}", records.len(), path.display());
        return Ok(records);
    }
    let raw = match &input.sequence {
        Some(sequence) => read_sequence_arg(sequence)?,
        None => anyhow::bail!("No input sequence given"),
    };
    Ok(vec![Record::new(String::new(), raw)])
}

fn run_validate(sequence: &str, line_width: usize) -> Result<()> {
    let raw = read_sequence_arg(sequence)?;
    let seq = validate(&raw)?;
    let mut out = io::stdout().lock();
    for line in wrap_sequence(seq.as_str(), line_width) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn run_stats(input: &InputArgs, json: bool) -> Result<()> {
    let records = load_records(input)?;
    write_stats(&mut io::stdout().lock(), &records, json)
}

fn run_revcomp(input: &InputArgs, line_width: Option<usize>) -> Result<()> {
    let records = load_records(input)?;
    let as_fasta = input.fasta.is_some();
    let default_width = if as_fasta { FASTA_LINE_WIDTH } else { 0 };
    let width = line_width.unwrap_or(default_width);
    write_reverse_complements(&mut io::stdout().lock(), &records, as_fasta, width)
}

fn run_save(sequence: &str, output: &Path) -> Result<()> {
    let raw = read_sequence_arg(sequence)?;
    let stats = compute_stats(&raw)?;
    save_report(&stats, output)
        .with_context(|| format!("Failed to save report to {}", output.display()))?;
    info!("Saved report to {}", output.display());
    eprintln!("Saved to {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let line_width = args.line_width;

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            run_interactive(glyphs::select(!args.ascii), line_width.unwrap_or(0))?
        }
        Command::Validate { sequence } => run_validate(&sequence, line_width.unwrap_or(0))?,
        Command::Stats { input, json } => run_stats(&input, json)?,
        Command::Revcomp { input } => run_revcomp(&input, line_width)?,
        Command::Save { sequence, output } => run_save(&sequence, &output)?,
    }

    Ok(())
}
