use serde::{Serialize, Serializer};

use crate::types::{Gene, GeneCategory};

/// One distinct phenotype in a cross distribution.
///
/// # Examples
///
/// ```rust
/// use equigen_core::compute_phenotype_distribution;
/// use equigen_core::types::{Cross, ParentalGenotypes};
///
/// let dam = ParentalGenotypes::from_strings([("extension", "E/e"), ("agouti", "a/a")])?;
/// let sire = ParentalGenotypes::from_strings([("extension", "E/e"), ("agouti", "a/a")])?;
///
/// for result in compute_phenotype_distribution(&Cross::new(dam, sire)) {
///     println!("{} - {}%", result.phenotype, result.percentage_label());
/// }
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResult {
    /// Final color label.
    pub phenotype: String,

    /// Every distinct genotype string recorded for this label, in the order
    /// first seen during enumeration.
    pub genotypes: Vec<String>,

    /// Number of combinations that produced this label.
    pub count: usize,

    /// Share of all viable combinations, rounded to one decimal place.
    ///
    /// Serialized as a string with exactly one decimal (`"25.0"`).
    #[serde(serialize_with = "serialize_percentage")]
    pub percentage: f64,
}

impl AggregatedResult {
    /// Percentage with exactly one decimal, without the `%` sign
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

fn serialize_percentage<S: Serializer>(percentage: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{percentage:.1}"))
}

/// How many offspring genotypes a gene contributes to the cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneBranching {
    pub gene: Gene,
    pub category: GeneCategory,
    pub outcomes: usize,
}

impl GeneBranching {
    #[must_use]
    pub const fn new(gene: Gene, outcomes: usize) -> Self {
        Self {
            gene,
            category: gene.category(),
            outcomes,
        }
    }
}

/// Bookkeeping for one cross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossSummary {
    /// Size of the Cartesian product over every gene's offspring outcomes.
    pub total_combinations: usize,

    /// Combinations that produced a phenotype.
    ///
    /// Equal to the sum of every result's `count`.
    pub viable_combinations: usize,

    /// Combinations dropped for missing extension or agouti data.
    pub rejected_combinations: usize,

    /// Per-gene branching factors, in declared gene order.
    pub branching: Vec<GeneBranching>,
}

impl CrossSummary {
    /// Whether no combination yielded a phenotype
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viable_combinations == 0
    }
}

/// Results of analyzing one cross with [`crate::CrossAnalyzer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossResults {
    pub summary: CrossSummary,

    /// Distribution in enumeration order; use [`sort_for_display`] for
    /// presentation.
    pub phenotypes: Vec<AggregatedResult>,
}

/// Sort by descending count, and so descending percentage, then by label
pub fn sort_for_display(results: &mut [AggregatedResult]) {
    results.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.phenotype.cmp(&b.phenotype))
    });
}
