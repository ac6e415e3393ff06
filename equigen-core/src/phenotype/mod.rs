//! Phenotype derivation: one gene combination in, one color label out.
//!
//! Stages run in a fixed order and each returns a fresh [`PhenotypeRecord`]:
//!
//! 1. **Base color** ([`base_color`]): extension and agouti seed the label.
//!    Missing data for either rejects the whole combination.
//! 2. **Dilutions** ([`dilutions`]): cream, champagne, dun, silver, each
//!    reading the label left by the previous one.
//! 3. **Patterns** ([`patterns`]): `Olw/Olw` ends derivation with the lethal
//!    white label; otherwise tobiano, overo and roan prefix the label.
//! 4. **Modifiers** ([`modifiers`]): flaxen, sooty and pangare prefix the label.
//!
//! A stage that fires appends the triggering genotype, written in
//! dominance-ranked order, to the record. A stage that does not fire returns
//! its input untouched.
//!
//! ## Example
//!
//! ```rust
//! use equigen_core::cross::GeneCombination;
//! use equigen_core::phenotype::derive_phenotype;
//! use equigen_core::types::{Gene, Genotype};
//!
//! let extension = Genotype::new("e", "e");
//! let agouti = Genotype::new("A", "a");
//! let dun = Genotype::new("n", "D");
//! let flaxen = Genotype::new("f", "f");
//!
//! let combination = GeneCombination::default()
//!     .with(Gene::Extension, &extension)
//!     .with(Gene::Agouti, &agouti)
//!     .with(Gene::Dun, &dun)
//!     .with(Gene::Flaxen, &flaxen);
//!
//! let record = derive_phenotype(&combination).unwrap();
//! assert_eq!(record.color(), "Flaxen Red Dun");
//! assert_eq!(record.genotypes(), ["e/e", "A/a", "D/n", "f/f"]);
//! ```

pub mod base_color;
pub mod dilutions;
pub mod modifiers;
pub mod patterns;

use std::ops::ControlFlow;

use crate::cross::GeneCombination;
use crate::types::Genotype;

/// A color label plus the genotypes that shaped it.
///
/// Records are values: every stage consumes one and returns another, so a
/// record observed between stages never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenotypeRecord {
    color: String,
    genotypes: Vec<String>,
}

impl PhenotypeRecord {
    pub fn new(color: impl Into<String>, genotypes: Vec<String>) -> Self {
        Self {
            color: color.into(),
            genotypes,
        }
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn genotypes(&self) -> &[String] {
        &self.genotypes
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.color, self.genotypes)
    }

    /// New label, with the triggering genotype appended
    #[must_use]
    pub fn relabeled(self, color: impl Into<String>, genotype: &Genotype) -> Self {
        let mut genotypes = self.genotypes;
        genotypes.push(display_genotype(genotype));
        Self {
            color: color.into(),
            genotypes,
        }
    }

    /// Prefix every matched trait name, in the order given, to the label.
    ///
    /// `traits` holds `(name, genotype)` for each trait that tested positive;
    /// with none, the record is returned unchanged.
    #[must_use]
    pub fn prefixed(self, traits: &[(&str, &Genotype)]) -> Self {
        if traits.is_empty() {
            return self;
        }

        let names: Vec<&str> = traits.iter().map(|(name, _)| *name).collect();
        let mut genotypes = self.genotypes;
        genotypes.extend(traits.iter().map(|(_, genotype)| display_genotype(genotype)));
        Self {
            color: format!("{} {}", names.join(" "), self.color),
            genotypes,
        }
    }
}

/// Genotype text as recorded on a phenotype
fn display_genotype(genotype: &Genotype) -> String {
    genotype.standardized().to_string()
}

/// Run the full stage chain over one combination.
///
/// Returns `None` when extension or agouti is missing; this is the only way a
/// combination is rejected. Every later stage accepts any genotype, absent
/// included.
#[must_use]
pub fn derive_phenotype(combination: &GeneCombination<'_>) -> Option<PhenotypeRecord> {
    let record = base_color::apply_base_color(combination)?;
    let record = dilutions::apply_dilutions(record, combination);
    let record = match patterns::apply_patterns(record, combination) {
        ControlFlow::Break(lethal) => return Some(lethal),
        ControlFlow::Continue(record) => record,
    };
    Some(modifiers::apply_modifiers(record, combination))
}
