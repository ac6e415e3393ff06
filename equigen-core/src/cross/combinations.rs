use std::iter::FusedIterator;
use std::ops::Range;

use crate::cross::{GeneOutcomes, offspring_outcomes};
use crate::types::{Cross, EquigenError, GENE_COUNT, Gene, Genotype};

/// One offspring: a concrete genotype (or none) for every gene.
///
/// Genotypes are borrowed from the [`CombinationSpace`] that produced the
/// combination, so enumerating leaves never clones allele text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneCombination<'a> {
    genotypes: [Option<&'a Genotype>; GENE_COUNT],
}

impl<'a> GeneCombination<'a> {
    #[must_use]
    pub fn get(&self, gene: Gene) -> Option<&'a Genotype> {
        self.genotypes[gene.index()]
    }

    pub fn set(&mut self, gene: Gene, genotype: Option<&'a Genotype>) {
        self.genotypes[gene.index()] = genotype;
    }

    /// Builder form of [`GeneCombination::set`]
    #[must_use]
    pub fn with(mut self, gene: Gene, genotype: &'a Genotype) -> Self {
        self.set(gene, Some(genotype));
        self
    }
}

/// The full Cartesian product of per-gene offspring outcomes.
///
/// Leaves are never materialised up front. [`CombinationSpace::iter`] walks
/// them with an odometer over per-gene digits: the last gene turns fastest,
/// the first slowest, which reproduces the order of a depth-first recursion
/// over the gene list without its stack depth.
///
/// # Examples
///
/// ```rust
/// use equigen_core::cross::CombinationSpace;
/// use equigen_core::types::{Cross, Gene, ParentalGenotypes};
///
/// let dam = ParentalGenotypes::from_strings([("extension", "E/e"), ("agouti", "A/a")])?;
/// let sire = ParentalGenotypes::from_strings([("extension", "E/e"), ("agouti", "a/a")])?;
/// let space = CombinationSpace::from_cross(&Cross::new(dam, sire));
///
/// // Two genes with data on both sides: 4 x 4 leaves
/// assert_eq!(space.len(), 16);
/// let first = space.iter().next().unwrap();
/// assert_eq!(first.get(Gene::Extension).unwrap().to_string(), "E/E");
/// assert!(first.get(Gene::Cream).is_none());
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CombinationSpace {
    outcomes: Vec<GeneOutcomes>,
    len: usize,
}

impl CombinationSpace {
    /// Build a space from arbitrary per-gene outcome lists.
    ///
    /// A gene with an empty outcome list is treated like a gene without data:
    /// it contributes a single `None` branch.
    ///
    /// # Errors
    ///
    /// [`EquigenError::InvalidInput`] if a gene appears twice or the leaf
    /// count overflows `usize`.
    pub fn new(mut outcomes: Vec<GeneOutcomes>) -> Result<Self, EquigenError> {
        let mut seen = [false; GENE_COUNT];
        let mut len: usize = 1;

        for outcome in &mut outcomes {
            if std::mem::replace(&mut seen[outcome.gene.index()], true) {
                return Err(EquigenError::InvalidInput(format!(
                    "gene {} listed more than once",
                    outcome.gene
                )));
            }
            if outcome.genotypes.is_empty() {
                outcome.genotypes.push(None);
            }
            len = len.checked_mul(outcome.genotypes.len()).ok_or_else(|| {
                EquigenError::InvalidInput("combination count overflows usize".to_string())
            })?;
        }

        Ok(Self { outcomes, len })
    }

    /// Expand both parents over the whole gene set.
    ///
    /// Twelve genes with at most four outcomes each cannot overflow.
    #[must_use]
    pub fn from_cross(cross: &Cross) -> Self {
        let outcomes = offspring_outcomes(cross);
        let len: usize = outcomes.iter().map(GeneOutcomes::branching).product();
        Self { outcomes, len }
    }

    /// Number of leaves, i.e. equally likely offspring
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: an empty gene list still has one (empty) leaf
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Branching factor per gene, in enumeration order
    pub fn branching(&self) -> impl Iterator<Item = (Gene, usize)> + '_ {
        self.outcomes
            .iter()
            .map(|outcome| (outcome.gene, outcome.branching()))
    }

    #[must_use]
    pub fn iter(&self) -> CombinationIter<'_> {
        self.iter_range(0..self.len)
    }

    /// Iterate the leaves whose enumeration index falls in `range`.
    ///
    /// The range is clamped to the space, so chunked callers can overshoot the
    /// final chunk.
    #[must_use]
    pub fn iter_range(&self, range: Range<usize>) -> CombinationIter<'_> {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        CombinationIter {
            space: self,
            digits: self.digits_of(start),
            remaining: end - start,
        }
    }

    /// Leaf at a given enumeration index
    #[must_use]
    pub fn combination_at(&self, index: usize) -> Option<GeneCombination<'_>> {
        (index < self.len).then(|| self.combination_from_digits(&self.digits_of(index)))
    }

    /// Mixed-radix decomposition of `index`, most significant gene first
    fn digits_of(&self, mut index: usize) -> Vec<usize> {
        let mut digits = vec![0; self.outcomes.len()];
        for (digit, outcome) in digits.iter_mut().zip(&self.outcomes).rev() {
            let radix = outcome.genotypes.len();
            *digit = index % radix;
            index /= radix;
        }
        digits
    }

    fn combination_from_digits(&self, digits: &[usize]) -> GeneCombination<'_> {
        let mut combination = GeneCombination::default();
        for (outcome, &digit) in self.outcomes.iter().zip(digits) {
            combination.set(outcome.gene, outcome.genotypes[digit].as_ref());
        }
        combination
    }
}

impl<'a> IntoIterator for &'a CombinationSpace {
    type Item = GeneCombination<'a>;
    type IntoIter = CombinationIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Odometer over a [`CombinationSpace`]
#[derive(Debug, Clone)]
pub struct CombinationIter<'a> {
    space: &'a CombinationSpace,
    digits: Vec<usize>,
    remaining: usize,
}

impl<'a> CombinationIter<'a> {
    fn advance(&mut self) {
        for (digit, outcome) in self
            .digits
            .iter_mut()
            .zip(&self.space.outcomes)
            .rev()
        {
            *digit += 1;
            if *digit < outcome.genotypes.len() {
                return;
            }
            *digit = 0;
        }
    }
}

impl<'a> Iterator for CombinationIter<'a> {
    type Item = GeneCombination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let combination = self.space.combination_from_digits(&self.digits);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CombinationIter<'_> {}

impl FusedIterator for CombinationIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParentalGenotypes;

    fn outcomes(gene: Gene, genotypes: &[&str]) -> GeneOutcomes {
        GeneOutcomes {
            gene,
            genotypes: genotypes
                .iter()
                .map(|text| Some(text.parse().unwrap()))
                .collect(),
        }
    }

    fn labels(combination: &GeneCombination<'_>, genes: &[Gene]) -> String {
        genes
            .iter()
            .map(|gene| {
                combination
                    .get(*gene)
                    .map_or_else(|| "-".to_string(), ToString::to_string)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_space_enumerates_last_gene_fastest() {
        let space = CombinationSpace::new(vec![
            outcomes(Gene::Extension, &["E/E", "e/e"]),
            outcomes(Gene::Agouti, &["A/A", "A/a", "a/a"]),
        ])
        .unwrap();

        assert_eq!(space.len(), 6);
        let genes = [Gene::Extension, Gene::Agouti];
        let rendered: Vec<_> = space.iter().map(|c| labels(&c, &genes)).collect();
        assert_eq!(
            rendered,
            [
                "E/E A/A", "E/E A/a", "E/E a/a", "e/e A/A", "e/e A/a", "e/e a/a"
            ]
        );
    }

    #[test]
    fn test_space_empty_outcomes_count_as_single_branch() {
        let space = CombinationSpace::new(vec![
            outcomes(Gene::Extension, &["E/e"]),
            GeneOutcomes {
                gene: Gene::Dun,
                genotypes: vec![],
            },
        ])
        .unwrap();
        assert_eq!(space.len(), 1);
        let only = space.iter().next().unwrap();
        assert!(only.get(Gene::Dun).is_none());
    }

    #[test]
    fn test_space_rejects_duplicate_gene() {
        let result = CombinationSpace::new(vec![
            outcomes(Gene::Roan, &["RN/n"]),
            outcomes(Gene::Roan, &["n/n"]),
        ]);
        assert!(matches!(result, Err(EquigenError::InvalidInput(_))));
    }

    #[test]
    fn test_space_without_genes_has_one_leaf() {
        let space = CombinationSpace::new(vec![]).unwrap();
        assert_eq!(space.len(), 1);
        assert!(!space.is_empty());
        assert_eq!(space.iter().count(), 1);
    }

    #[test]
    fn test_from_cross_counts_branching() {
        let dam = ParentalGenotypes::from_strings([
            ("extension", "E/e"),
            ("agouti", "A/a"),
            ("cream", "CR/n"),
        ])
        .unwrap();
        let sire = ParentalGenotypes::from_strings([
            ("extension", "E/e"),
            ("agouti", "A/a"),
        ])
        .unwrap();
        let space = CombinationSpace::from_cross(&Cross::new(dam, sire));

        assert_eq!(space.len(), 16);
        assert_eq!(space.iter().len(), 16);
        let branching: Vec<_> = space.branching().filter(|(_, n)| *n > 1).collect();
        assert_eq!(branching, vec![(Gene::Extension, 4), (Gene::Agouti, 4)]);
    }

    #[test]
    fn test_iter_range_matches_full_iteration() {
        let space = CombinationSpace::new(vec![
            outcomes(Gene::Extension, &["E/E", "E/e", "e/E", "e/e"]),
            outcomes(Gene::Agouti, &["A/A", "A/a", "a/A", "a/a"]),
            outcomes(Gene::Dun, &["D/n", "n/n"]),
        ])
        .unwrap();

        let full: Vec<_> = space.iter().collect();
        let mut chunked = Vec::new();
        for start in (0..space.len()).step_by(5) {
            chunked.extend(space.iter_range(start..start + 5));
        }
        assert_eq!(full, chunked);
    }

    #[test]
    fn test_combination_at() {
        let space = CombinationSpace::new(vec![
            outcomes(Gene::Extension, &["E/E", "e/e"]),
            outcomes(Gene::Agouti, &["A/A", "a/a"]),
        ])
        .unwrap();

        let third = space.combination_at(2).unwrap();
        assert_eq!(labels(&third, &[Gene::Extension, Gene::Agouti]), "e/e A/A");
        assert!(space.combination_at(4).is_none());
        assert_eq!(space.combination_at(3), space.iter().last());
    }

    #[test]
    fn test_iter_range_clamps() {
        let space = CombinationSpace::new(vec![outcomes(Gene::Roan, &["RN/n", "n/n"])]).unwrap();
        assert_eq!(space.iter_range(1..10).count(), 1);
        assert_eq!(space.iter_range(5..10).count(), 0);
    }

    #[test]
    fn test_gene_combination_builder() {
        let genotype: Genotype = "TO/n".parse().unwrap();
        let combination = GeneCombination::default().with(Gene::Tobiano, &genotype);
        assert_eq!(combination.get(Gene::Tobiano), Some(&genotype));
        assert!(combination.get(Gene::Overo).is_none());
    }
}
