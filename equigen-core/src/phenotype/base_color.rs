use crate::constants::{
    BAY, BLACK, BLACK_AGOUTI_ALLELE, RED, RED_EXTENSION_ALLELE, SEAL_AGOUTI_MARKER, SEAL_BAY,
    WILD_AGOUTI_MARKER, WILD_BAY,
};
use crate::cross::GeneCombination;
use crate::phenotype::{PhenotypeRecord, display_genotype};
use crate::types::{Gene, Genotype};

/// Base coat label from extension and agouti.
///
/// Extension is epistatic: `e/e` is red whatever agouti says. Otherwise
/// `a/a` is black, and any other agouti is a bay variant chosen by allele
/// markers: `+` (wild bay) before `t` (seal bay).
#[must_use]
pub fn base_color_label(extension: &Genotype, agouti: &Genotype) -> &'static str {
    if extension.is_homozygous_for(RED_EXTENSION_ALLELE) {
        return RED;
    }
    if agouti.is_homozygous_for(BLACK_AGOUTI_ALLELE) {
        return BLACK;
    }

    let alleles = agouti.alleles();
    if alleles.iter().any(|allele| allele.contains(WILD_AGOUTI_MARKER)) {
        WILD_BAY
    } else if alleles.iter().any(|allele| allele.contains(SEAL_AGOUTI_MARKER)) {
        SEAL_BAY
    } else {
        BAY
    }
}

/// Seed record for a combination, recording both base-color genotypes.
///
/// `None` if either genotype is missing: base color cannot be determined and
/// the combination is dropped.
#[must_use]
pub fn determine_base_color(
    extension: Option<&Genotype>,
    agouti: Option<&Genotype>,
) -> Option<PhenotypeRecord> {
    let (extension, agouti) = (extension?, agouti?);
    Some(PhenotypeRecord::new(
        base_color_label(extension, agouti),
        vec![display_genotype(extension), display_genotype(agouti)],
    ))
}

/// Stage 0 of the chain
#[must_use]
pub fn apply_base_color(combination: &GeneCombination<'_>) -> Option<PhenotypeRecord> {
    determine_base_color(combination.get(Gene::Extension), combination.get(Gene::Agouti))
}
