//! # seqproc - DNA/RNA Sequence Processor
//!
//! Basic handling of nucleotide sequences: validation, base composition,
//! reverse complement and JSON reports.
//!
//! ## Architecture
//!
//! The core is three stateless functions, each validating its own input:
//! - `validate`: cleaning and alphabet checks
//! - `stats`: length, per-base counts and GC percentage
//! - `revcomp`: DNA/RNA reverse complement
//!
//! Around them:
//! - `model`: shared data structures
//! - `report`: JSON persistence of statistics
//! - `fasta`: FASTA input for batch commands
//! - `batch`: stats and reverse complement over many records
//! - `event`: menu choice parsing
//! - `ui`: text rendering
//! - `controller`: the interactive menu session

pub mod batch;
pub mod controller;
pub mod event;
pub mod fasta;
pub mod model;
pub mod report;
pub mod revcomp;
pub mod stats;
pub mod ui;
pub mod validate;
