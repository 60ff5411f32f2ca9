//! Data model for the sequence processor.
//!
//! This module contains the data structures shared by the core functions
//! and the interactive shell:
//! - Validated sequences and their molecule type
//! - Per-base counts
//! - Interactive session state

use std::fmt;

use serde::{Deserialize, Serialize};

/// Accepted bases, in report order.
pub const ALPHABET: [char; 6] = ['A', 'C', 'G', 'T', 'U', 'N'];

/// A validated, canonical nucleotide sequence.
///
/// Only [`crate::validate::validate`] builds one: the content is non-empty,
/// uppercase, free of whitespace and drawn from [`ALPHABET`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    pub(crate) fn new_unchecked(data: String) -> Self {
        Self(data)
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of bases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the sequence and returns the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Detects whether this is DNA or RNA.
    pub fn molecule_type(&self) -> MoleculeType {
        MoleculeType::detect(self.as_str())
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Molecule type, decided solely by the presence of `U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoleculeType {
    Dna,
    Rna,
}

impl MoleculeType {
    /// Any `U` makes the sequence RNA, even when `T` is also present.
    pub fn detect(sequence: &str) -> Self {
        if sequence.contains('U') {
            MoleculeType::Rna
        } else {
            MoleculeType::Dna
        }
    }
}

impl fmt::Display for MoleculeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoleculeType::Dna => write!(f, "DNA"),
            MoleculeType::Rna => write!(f, "RNA"),
        }
    }
}

/// Occurrence count of every base of [`ALPHABET`].
///
/// All six keys are always serialized, in alphabet order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "G")]
    pub g: usize,
    #[serde(rename = "T")]
    pub t: usize,
    #[serde(rename = "U")]
    pub u: usize,
    #[serde(rename = "N")]
    pub n: usize,
}

impl BaseCounts {
    /// Counts the bases of a validated sequence.
    pub fn from_sequence(sequence: &Sequence) -> Self {
        let mut counts = Self::default();
        for base in sequence.as_str().chars() {
            if let Some(slot) = counts.slot_mut(base) {
                *slot += 1;
            }
        }
        counts
    }

    /// Returns the count for `base`, or `None` if it is not in the alphabet.
    pub fn get(&self, base: char) -> Option<usize> {
        match base {
            'A' => Some(self.a),
            'C' => Some(self.c),
            'G' => Some(self.g),
            'T' => Some(self.t),
            'U' => Some(self.u),
            'N' => Some(self.n),
            _ => None,
        }
    }

    fn slot_mut(&mut self, base: char) -> Option<&mut usize> {
        match base {
            'A' => Some(&mut self.a),
            'C' => Some(&mut self.c),
            'G' => Some(&mut self.g),
            'T' => Some(&mut self.t),
            'U' => Some(&mut self.u),
            'N' => Some(&mut self.n),
            _ => None,
        }
    }

    /// Iterates over `(base, count)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        ALPHABET.iter().map(move |&b| (b, self.get(b).unwrap_or(0)))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Number of G and C bases.
    pub fn gc(&self) -> usize {
        self.g + self.c
    }
}

impl fmt::Display for BaseCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(b, count)| format!("{}: {}", b, count))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// State of the interactive session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last successfully loaded sequence
    pub loaded: Option<Sequence>,
    /// Whether the session should end
    pub should_quit: bool,
}

impl AppState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the loaded sequence.
    pub fn load(&mut self, sequence: Sequence) {
        self.loaded = Some(sequence);
    }
}
