//! Mendelian cross expansion.
//!
//! A single gene is expanded with a Punnett square into four equally likely
//! offspring genotypes; [`combinations`] then spans every gene at once.
//!
//! ## Branching
//!
//! | dam genotype | sire genotype | outcomes |
//! |--------------|---------------|----------|
//! | present      | present       | 4        |
//! | absent       | any           | 1 (`None`) |
//! | any          | absent        | 1 (`None`) |
//!
//! A gene with missing data on either side contributes no branching, so the
//! total combination count shrinks by a factor of 4 per such gene.

pub mod combinations;

pub use combinations::{CombinationIter, CombinationSpace, GeneCombination};

use crate::types::{Cross, GENE_ORDER, Gene, Genotype};

/// Possible offspring genotypes for one gene.
///
/// Duplicates are kept: `E/e x E/e` yields `E/E`, `E/e`, `e/E`, `e/e`, and a
/// repeated genotype simply carries more probability mass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneOutcomes {
    pub gene: Gene,
    pub genotypes: Vec<Option<Genotype>>,
}

impl GeneOutcomes {
    /// Number of branches this gene adds to the product
    #[must_use]
    pub fn branching(&self) -> usize {
        self.genotypes.len()
    }
}

/// Punnett square for one gene.
///
/// Returns `(dam1,sire1), (dam1,sire2), (dam2,sire1), (dam2,sire2)` in that
/// order, or a single `None` when either parent has no genotype.
///
/// # Examples
///
/// ```rust
/// use equigen_core::cross::cross_genotypes;
/// use equigen_core::types::Genotype;
///
/// let dam = Genotype::new("CR", "n");
/// let sire = Genotype::new("n", "n");
/// let offspring: Vec<String> = cross_genotypes(Some(&dam), Some(&sire))
///     .into_iter()
///     .flatten()
///     .map(|genotype| genotype.to_string())
///     .collect();
/// assert_eq!(offspring, ["CR/n", "CR/n", "n/n", "n/n"]);
///
/// assert_eq!(cross_genotypes(Some(&dam), None), vec![None]);
/// ```
#[must_use]
pub fn cross_genotypes(dam: Option<&Genotype>, sire: Option<&Genotype>) -> Vec<Option<Genotype>> {
    let (Some(dam), Some(sire)) = (dam, sire) else {
        return vec![None];
    };

    let [dam1, dam2] = dam.alleles();
    let [sire1, sire2] = sire.alleles();
    vec![
        Some(Genotype::new(dam1, sire1)),
        Some(Genotype::new(dam1, sire2)),
        Some(Genotype::new(dam2, sire1)),
        Some(Genotype::new(dam2, sire2)),
    ]
}

/// Expand every gene of a cross, in [`GENE_ORDER`]
#[must_use]
pub fn offspring_outcomes(cross: &Cross) -> Vec<GeneOutcomes> {
    GENE_ORDER
        .into_iter()
        .map(|gene| GeneOutcomes {
            gene,
            genotypes: cross_genotypes(cross.dam.get(gene), cross.sire.get(gene)),
        })
        .collect()
}
