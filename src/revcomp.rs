//! Reverse complement generation for DNA and RNA.
//!
//! Pairing rules:
//! - DNA: `A<->T`, `C<->G`
//! - RNA: `A<->U`, `C<->G`
//! - `N` is its own complement
//!
//! A sequence is RNA as soon as it contains one `U`. Under RNA rules a
//! stray `T` has no partner and is left as is.

use crate::model::MoleculeType;
use crate::validate::{validate, ValidateResult};

/// Complements a single canonical base.
pub fn complement(base: char, molecule: MoleculeType) -> char {
    match (molecule, base) {
        (MoleculeType::Dna, 'A') => 'T',
        (MoleculeType::Dna, 'T') => 'A',
        (MoleculeType::Rna, 'A') => 'U',
        (MoleculeType::Rna, 'U') => 'A',
        (_, 'C') => 'G',
        (_, 'G') => 'C',
        (_, other) => other,
    }
}

/// Returns the reverse complement of a sequence.
///
/// The input is validated again; its failure is returned unchanged.
///
/// # Examples
///
/// ```
/// use seqproc::revcomp::reverse_complement;
///
/// assert_eq!(reverse_complement("ATGC").unwrap(), "GCAT");
/// assert_eq!(reverse_complement("AUGC").unwrap(), "GCAU");
/// ```
pub fn reverse_complement(sequence: &str) -> ValidateResult<String> {
    let seq = validate(sequence)?;
    let molecule = seq.molecule_type();
    Ok(seq
        .as_str()
        .chars()
        .rev()
        .map(|base| complement(base, molecule))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::validate::InvalidSequence;

    #[test]
    fn test_dna() {
        assert_eq!(reverse_complement("ATGC").unwrap(), "GCAT");
        assert_eq!(reverse_complement("AAAACCC").unwrap(), "GGGTTTT");
    }

    #[test]
    fn test_rna() {
        assert_eq!(reverse_complement("AUGC").unwrap(), "GCAU");
    }

    #[test]
    fn test_ambiguous_base() {
        assert_eq!(reverse_complement("ATTN").unwrap(), "NAAT");
        assert_eq!(reverse_complement("NNNN").unwrap(), "NNNN");
    }

    #[test]
    fn test_mixed_t_and_u_is_rna() {
        // T has no pair under RNA rules
        assert_eq!(reverse_complement("TUA").unwrap(), "UAT");
    }

    #[test]
    fn test_lowercase_input() {
        assert_eq!(reverse_complement("at gc").unwrap(), "GCAT");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(reverse_complement(""), Err(InvalidSequence::Empty));
        assert!(matches!(
            reverse_complement("ATGQ"),
            Err(InvalidSequence::InvalidBases(_))
        ));
    }

    proptest! {
        #[test]
        fn dna_involution(seq in "[ACGT]{1,200}") {
            let rc = reverse_complement(&seq).unwrap();
            prop_assert_eq!(rc.len(), seq.len());
            prop_assert_eq!(reverse_complement(&rc).unwrap(), seq);
        }

        #[test]
        fn rna_involution(seq in "[ACGU]{0,30}A[ACGU]{0,30}U[ACGU]{0,30}") {
            let rc = reverse_complement(&seq).unwrap();
            prop_assert_eq!(reverse_complement(&rc).unwrap(), seq);
        }
    }
}
