use std::ops::ControlFlow;

use crate::constants::{
    LETHAL_WHITE_ALLELE, LETHAL_WHITE_LABEL, NORMAL_ALLELE, OVERO_LABEL, ROAN_ALLELE, ROAN_LABEL,
    TOBIANO_ALLELE, TOBIANO_LABEL,
};
use crate::cross::GeneCombination;
use crate::phenotype::PhenotypeRecord;
use crate::types::{Gene, Genotype};

/// Homozygous or heterozygous for `allele`, the only two states that show
fn shows_dominant(genotype: Option<&Genotype>, allele: &str) -> bool {
    genotype.is_some_and(|genotype| {
        genotype.is(allele, allele) || genotype.is(allele, NORMAL_ALLELE)
    })
}

#[must_use]
pub fn is_lethal_white(overo: Option<&Genotype>) -> bool {
    overo.is_some_and(|overo| overo.is_homozygous_for(LETHAL_WHITE_ALLELE))
}

#[must_use]
pub fn is_tobiano(tobiano: Option<&Genotype>) -> bool {
    shows_dominant(tobiano, TOBIANO_ALLELE)
}

/// Only the heterozygote is a viable overo
#[must_use]
pub fn is_overo(overo: Option<&Genotype>) -> bool {
    overo.is_some_and(|overo| overo.is(LETHAL_WHITE_ALLELE, NORMAL_ALLELE))
}

#[must_use]
pub fn is_roan(roan: Option<&Genotype>) -> bool {
    shows_dominant(roan, ROAN_ALLELE)
}

/// Stage 2: white patterns.
///
/// `Olw/Olw` breaks out of the chain with the terminal lethal white label,
/// discarding everything computed so far except the recorded genotypes.
/// Otherwise each positive pattern is prefixed, always in the order
/// tobiano, overo, roan.
#[must_use]
pub fn apply_patterns(
    record: PhenotypeRecord,
    combination: &GeneCombination<'_>,
) -> ControlFlow<PhenotypeRecord, PhenotypeRecord> {
    let overo = combination.get(Gene::Overo);
    if let Some(lethal) = overo.filter(|overo| is_lethal_white(Some(overo))) {
        return ControlFlow::Break(record.relabeled(LETHAL_WHITE_LABEL, lethal));
    }

    let tobiano = combination.get(Gene::Tobiano);
    let roan = combination.get(Gene::Roan);
    let candidates = [
        (TOBIANO_LABEL, tobiano.filter(|_| is_tobiano(tobiano))),
        (OVERO_LABEL, overo.filter(|_| is_overo(overo))),
        (ROAN_LABEL, roan.filter(|_| is_roan(roan))),
    ];
    let positive: Vec<(&str, &Genotype)> = candidates
        .into_iter()
        .filter_map(|(name, genotype)| genotype.map(|genotype| (name, genotype)))
        .collect();

    ControlFlow::Continue(record.prefixed(&positive))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genotype(text: &str) -> Genotype {
        text.parse().unwrap()
    }

    fn base() -> PhenotypeRecord {
        PhenotypeRecord::new("Palomino", vec!["e/e".into(), "A/a".into(), "CR/n".into()])
    }

    fn continued(flow: ControlFlow<PhenotypeRecord, PhenotypeRecord>) -> PhenotypeRecord {
        match flow {
            ControlFlow::Continue(record) => record,
            ControlFlow::Break(record) => panic!("unexpected lethal outcome: {:?}", record),
        }
    }

    #[test]
    fn test_pattern_predicates() {
        assert!(is_tobiano(Some(&genotype("TO/TO"))));
        assert!(is_tobiano(Some(&genotype("n/TO"))));
        assert!(!is_tobiano(Some(&genotype("n/n"))));
        assert!(!is_tobiano(None));

        assert!(is_overo(Some(&genotype("n/Olw"))));
        assert!(!is_overo(Some(&genotype("Olw/Olw"))));
        assert!(is_lethal_white(Some(&genotype("Olw/Olw"))));
        assert!(!is_lethal_white(Some(&genotype("Olw/n"))));

        assert!(is_roan(Some(&genotype("RN/n"))));
        assert!(!is_roan(None));
    }

    #[test]
    fn test_lethal_white_breaks_chain() {
        let overo = genotype("Olw/Olw");
        let tobiano = genotype("TO/n");
        let combination = GeneCombination::default()
            .with(Gene::Overo, &overo)
            .with(Gene::Tobiano, &tobiano);

        match apply_patterns(base(), &combination) {
            ControlFlow::Break(record) => {
                assert_eq!(record.color(), LETHAL_WHITE_LABEL);
                assert_eq!(record.genotypes(), ["e/e", "A/a", "CR/n", "Olw/Olw"]);
            }
            ControlFlow::Continue(record) => panic!("expected lethal white, got {:?}", record),
        }
    }

    #[test]
    fn test_patterns_prefix_in_fixed_order() {
        let overo = genotype("n/Olw");
        let tobiano = genotype("TO/TO");
        let roan = genotype("RN/n");
        // Insertion order into the combination does not matter
        let combination = GeneCombination::default()
            .with(Gene::Roan, &roan)
            .with(Gene::Overo, &overo)
            .with(Gene::Tobiano, &tobiano);

        let record = continued(apply_patterns(base(), &combination));
        assert_eq!(record.color(), "Tobiano Overo Roan Palomino");
        assert_eq!(
            record.genotypes(),
            ["e/e", "A/a", "CR/n", "TO/TO", "Olw/n", "RN/n"]
        );
    }

    #[test]
    fn test_single_pattern() {
        let roan = genotype("RN/RN");
        let combination = GeneCombination::default().with(Gene::Roan, &roan);
        let record = continued(apply_patterns(base(), &combination));
        assert_eq!(record.color(), "Roan Palomino");
    }

    #[test]
    fn test_no_patterns_is_identity() {
        let normal = genotype("n/n");
        let combination = GeneCombination::default()
            .with(Gene::Tobiano, &normal)
            .with(Gene::Overo, &normal);
        assert_eq!(continued(apply_patterns(base(), &combination)), base());
        assert_eq!(
            continued(apply_patterns(base(), &GeneCombination::default())),
            base()
        );
    }
}
