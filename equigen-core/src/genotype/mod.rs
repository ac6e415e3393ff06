//! Genotype parsing and display canonicalisation.
//!
//! Genotypes arrive as plain text, `"allele1/allele2"`, one per gene and
//! parent. An empty value means the parent was not tested for that gene and
//! is carried through as `None` rather than treated as an error.

pub mod io;

use crate::constants::{ALLELE_SEPARATOR, DOMINANCE_RANKS};
use crate::types::{EquigenError, Genotype};

/// Split `"a/b"` into its two trimmed allele tokens.
///
/// # Errors
///
/// [`EquigenError::MalformedGenotype`] unless the text holds exactly one
/// separator with a non-empty token on each side.
pub fn split_alleles(text: &str) -> Result<(&str, &str), EquigenError> {
    let malformed = || EquigenError::MalformedGenotype(text.to_string());

    let (first, second) = text.trim().split_once(ALLELE_SEPARATOR).ok_or_else(malformed)?;
    if second.contains(ALLELE_SEPARATOR) {
        return Err(malformed());
    }

    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        return Err(malformed());
    }
    Ok((first, second))
}

/// Parse one gene's genotype for one parent.
///
/// `None`, `""` and whitespace-only input yield `Ok(None)`, the
/// "no genotype" sentinel.
///
/// # Errors
///
/// [`EquigenError::MalformedGenotype`] for non-empty text that is not `a/b`.
///
/// # Examples
///
/// ```rust
/// use equigen_core::genotype::parse_genotype;
///
/// let genotype = parse_genotype(Some("CR/prl"))?.unwrap();
/// assert_eq!(genotype.alleles(), ["CR", "prl"]);
/// assert!(parse_genotype(Some(""))?.is_none());
/// assert!(parse_genotype(Some("CR-prl")).is_err());
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
pub fn parse_genotype(text: Option<&str>) -> Result<Option<Genotype>, EquigenError> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some),
    }
}

/// Display rank of an allele; unknown alleles rank lowest
#[must_use]
pub fn dominance_rank(allele: &str) -> u8 {
    DOMINANCE_RANKS
        .iter()
        .find(|(token, _)| *token == allele)
        .map_or(0, |(_, rank)| *rank)
}

/// Order two alleles by dominance for display, keeping input order on ties
#[must_use]
pub fn standardize_genotype(first: &str, second: &str) -> Genotype {
    if dominance_rank(first) >= dominance_rank(second) {
        Genotype::new(first, second)
    } else {
        Genotype::new(second, first)
    }
}
