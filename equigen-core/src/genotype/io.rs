use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::types::{Cross, EquigenError, ParentalGenotypes};

/// Separator between `gene=genotype` assignments on one line
pub const ASSIGNMENT_SEPARATOR: char = ',';

/// Read a cross from a JSON file shaped `{"dam": {...}, "sire": {...}}`.
///
/// Each parent object maps gene names to genotype strings; empty strings and
/// `null` mean "not tested". Missing parents default to no data at all.
///
/// # Errors
///
/// [`EquigenError::Io`] if the file cannot be opened, [`EquigenError::Json`]
/// for invalid JSON, unknown genes or malformed genotypes.
pub fn read_cross_json<P: AsRef<Path>>(path: P) -> Result<Cross, EquigenError> {
    let file = File::open(path)?;
    let cross = serde_json::from_reader(BufReader::new(file))?;
    Ok(cross)
}

/// Parse a cross from JSON text; see [`read_cross_json`].
///
/// # Errors
///
/// [`EquigenError::Json`] for invalid JSON, unknown genes or malformed genotypes.
///
/// # Examples
///
/// ```rust
/// use equigen_core::genotype::io::parse_cross_json;
/// use equigen_core::types::Gene;
///
/// let cross = parse_cross_json(r#"{
///     "dam":  {"extension": "E/e", "agouti": "A/a"},
///     "sire": {"extension": "e/e", "agouti": "a/a", "cream": "CR/n"}
/// }"#)?;
/// assert!(cross.dam.get(Gene::Cream).is_none());
/// assert!(cross.sire.get(Gene::Cream).is_some());
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
pub fn parse_cross_json(text: &str) -> Result<Cross, EquigenError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse `extension=E/e,agouti=A/a,...` into one parent's genotypes.
///
/// Whitespace around names and values is ignored and empty assignments are
/// skipped, so trailing commas are harmless.
///
/// # Errors
///
/// [`EquigenError::InvalidInput`] for an assignment without `=`, plus the
/// errors of [`ParentalGenotypes::from_strings`].
pub fn parse_gene_assignments(text: &str) -> Result<ParentalGenotypes, EquigenError> {
    let pairs = text
        .split(ASSIGNMENT_SEPARATOR)
        .map(str::trim)
        .filter(|assignment| !assignment.is_empty())
        .map(|assignment| {
            assignment.split_once('=').ok_or_else(|| {
                EquigenError::InvalidInput(format!(
                    "expected gene=genotype, found {assignment:?}"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ParentalGenotypes::from_strings(pairs)
}
