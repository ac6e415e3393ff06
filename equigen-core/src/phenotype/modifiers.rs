use crate::constants::{
    DARK_LABELS, FLAXEN_ALLELE, FLAXEN_LABEL, FLAXEN_RED_BASED_LABELS, NORMAL_ALLELE,
    PANGARE_ALLELE, PANGARE_LABEL, RED_BASED_LABELS, SOOTY_ALLELE, SOOTY_LABEL,
};
use crate::cross::GeneCombination;
use crate::phenotype::PhenotypeRecord;
use crate::types::{Gene, Genotype};

const MODIFIER_LABELS: [&str; 3] = [FLAXEN_LABEL, SOOTY_LABEL, PANGARE_LABEL];

fn contains_any(label: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|candidate| label.contains(candidate))
}

/// `f/f` on a label that contains one of the red-based names
#[must_use]
pub fn is_flaxen(flaxen: Option<&Genotype>, label: &str) -> bool {
    flaxen.is_some_and(|flaxen| flaxen.is_homozygous_for(FLAXEN_ALLELE))
        && contains_any(label, FLAXEN_RED_BASED_LABELS)
}

#[must_use]
pub fn is_sooty(sooty: Option<&Genotype>) -> bool {
    sooty.is_some_and(|sooty| {
        sooty.is(SOOTY_ALLELE, SOOTY_ALLELE) || sooty.is(SOOTY_ALLELE, NORMAL_ALLELE)
    })
}

#[must_use]
pub fn is_pangare(pangare: Option<&Genotype>) -> bool {
    pangare.is_some_and(|pangare| {
        pangare.is(PANGARE_ALLELE, PANGARE_ALLELE) || pangare.is(PANGARE_ALLELE, NORMAL_ALLELE)
    })
}

/// Stage 3: flaxen, sooty, pangare, prefixed in that order.
///
/// Flaxen reads the label as it stands after dilutions and patterns, so a
/// `Red Dun` or `Tobiano Gold Champagne` still qualifies.
#[must_use]
pub fn apply_modifiers(record: PhenotypeRecord, combination: &GeneCombination<'_>) -> PhenotypeRecord {
    let flaxen = combination.get(Gene::Flaxen);
    let sooty = combination.get(Gene::Sooty);
    let pangare = combination.get(Gene::Pangare);

    let candidates = [
        (FLAXEN_LABEL, flaxen.filter(|_| is_flaxen(flaxen, record.color()))),
        (SOOTY_LABEL, sooty.filter(|_| is_sooty(sooty))),
        (PANGARE_LABEL, pangare.filter(|_| is_pangare(pangare))),
    ];
    let positive: Vec<(&str, &Genotype)> = candidates
        .into_iter()
        .filter_map(|(name, genotype)| genotype.map(|genotype| (name, genotype)))
        .collect();

    record.prefixed(&positive)
}

// =============================================================================
// Visibility queries
//
// Descriptive only. Nothing here feeds back into a derived label.
// =============================================================================

/// Whether each modifier would show clearly on a given label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierVisibility {
    pub flaxen: bool,
    pub sooty: bool,
    pub pangare: bool,
}

#[must_use]
pub fn is_red_based(label: &str) -> bool {
    contains_any(label, RED_BASED_LABELS)
}

#[must_use]
pub fn is_dark_color(label: &str) -> bool {
    contains_any(label, DARK_LABELS)
}

/// Flaxen shows on red-based coats, sooty on light coats, pangare on dark ones
#[must_use]
pub fn modifier_visibility(label: &str) -> ModifierVisibility {
    let dark = is_dark_color(label);
    ModifierVisibility {
        flaxen: is_red_based(label),
        sooty: !dark,
        pangare: dark,
    }
}

/// Case-insensitive check for a modifier name anywhere in the label
#[must_use]
pub fn has_modifier(label: &str, modifier: &str) -> bool {
    label.to_lowercase().contains(&modifier.to_lowercase())
}

/// Label with the first occurrence of each modifier prefix removed
#[must_use]
pub fn strip_modifiers(label: &str) -> String {
    MODIFIER_LABELS.iter().fold(label.to_string(), |label, modifier| {
        label.replacen(&format!("{modifier} "), "", 1)
    })
}
