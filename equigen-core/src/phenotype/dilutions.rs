use crate::constants::{
    CHAMPAGNE_TABLE, CREAM_ALLELE, DOUBLE_CREAM_TABLE, DOUBLE_PEARL_TABLE, DUN_SUFFIX, DUN_TABLE,
    NORMAL_ALLELE, PEARL_ALLELE, SILVER_EXEMPT_LABELS, SILVER_PREFIX, SINGLE_CREAM_TABLE,
    lookup_label,
};
use crate::cross::GeneCombination;
use crate::phenotype::PhenotypeRecord;
use crate::types::{Gene, Genotype};

/// How a cream-locus genotype acts on the base color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreamDose {
    /// `CR/CR` or `CR/prl`
    Double,
    /// `CR/n`
    Single,
    /// `prl/prl`
    DoublePearl,
    /// Anything else, including `n/n` and single pearl carriers
    None,
}

impl CreamDose {
    #[must_use]
    pub fn of(genotype: &Genotype) -> Self {
        if genotype.is(CREAM_ALLELE, CREAM_ALLELE) || genotype.is(CREAM_ALLELE, PEARL_ALLELE) {
            Self::Double
        } else if genotype.is(CREAM_ALLELE, NORMAL_ALLELE) {
            Self::Single
        } else if genotype.is(PEARL_ALLELE, PEARL_ALLELE) {
            Self::DoublePearl
        } else {
            Self::None
        }
    }

    fn table(self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Self::Double => Some(DOUBLE_CREAM_TABLE),
            Self::Single => Some(SINGLE_CREAM_TABLE),
            Self::DoublePearl => Some(DOUBLE_PEARL_TABLE),
            Self::None => None,
        }
    }
}

/// The genotype, if present and not `n/n`
fn carries_dilution(genotype: Option<&Genotype>) -> Option<&Genotype> {
    genotype.filter(|genotype| !genotype.is_normal())
}

/// Cream and pearl, looked up by dose.
///
/// `prl/prl` only recolors red (Apricot Pearl), but records the genotype on
/// every base color it meets.
#[must_use]
pub fn apply_cream(record: PhenotypeRecord, cream: Option<&Genotype>) -> PhenotypeRecord {
    let Some(cream) = cream else {
        return record;
    };
    let Some(table) = CreamDose::of(cream).table() else {
        return record;
    };
    match lookup_label(table, record.color()) {
        Some(color) => record.relabeled(color, cream),
        None => record,
    }
}

/// Champagne on any label in its table; others pass through unrecorded
#[must_use]
pub fn apply_champagne(record: PhenotypeRecord, champagne: Option<&Genotype>) -> PhenotypeRecord {
    let Some(champagne) = carries_dilution(champagne) else {
        return record;
    };
    match lookup_label(CHAMPAGNE_TABLE, record.color()) {
        Some(color) => record.relabeled(color, champagne),
        None => record,
    }
}

/// Dun, with a catch-all: labels missing from the table get `" Dun"` appended
#[must_use]
pub fn apply_dun(record: PhenotypeRecord, dun: Option<&Genotype>) -> PhenotypeRecord {
    let Some(dun) = carries_dilution(dun) else {
        return record;
    };
    let color = lookup_label(DUN_TABLE, record.color())
        .map_or_else(|| format!("{}{}", record.color(), DUN_SUFFIX), str::to_string);
    record.relabeled(color, dun)
}

/// Silver prefixes every label except the red-based ones it cannot act on
#[must_use]
pub fn apply_silver(record: PhenotypeRecord, silver: Option<&Genotype>) -> PhenotypeRecord {
    let Some(silver) = carries_dilution(silver) else {
        return record;
    };
    if SILVER_EXEMPT_LABELS.iter().any(|label| *label == record.color()) {
        return record;
    }
    let color = format!("{} {}", SILVER_PREFIX, record.color());
    record.relabeled(color, silver)
}

/// Stage 1: cream, champagne, dun, silver, in that order
#[must_use]
pub fn apply_dilutions(record: PhenotypeRecord, combination: &GeneCombination<'_>) -> PhenotypeRecord {
    let record = apply_cream(record, combination.get(Gene::Cream));
    let record = apply_champagne(record, combination.get(Gene::Champagne));
    let record = apply_dun(record, combination.get(Gene::Dun));
    apply_silver(record, combination.get(Gene::Silver))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(color: &str) -> PhenotypeRecord {
        PhenotypeRecord::new(color, vec!["E/e".to_string(), "A/a".to_string()])
    }

    fn genotype(text: &str) -> Genotype {
        text.parse().unwrap()
    }

    #[test]
    fn test_cream_dose_is_order_insensitive() {
        assert_eq!(CreamDose::of(&genotype("CR/n")), CreamDose::Single);
        assert_eq!(CreamDose::of(&genotype("n/CR")), CreamDose::Single);
        assert_eq!(CreamDose::of(&genotype("prl/CR")), CreamDose::Double);
        assert_eq!(CreamDose::of(&genotype("prl/prl")), CreamDose::DoublePearl);
        assert_eq!(CreamDose::of(&genotype("prl/n")), CreamDose::None);
        assert_eq!(CreamDose::of(&genotype("n/n")), CreamDose::None);
    }

    #[test]
    fn test_single_cream() {
        let cases = [
            ("Red", "Palomino"),
            ("Black", "Smoky Black"),
            ("Bay", "Buckskin"),
            ("Wild Bay", "Wild Buckskin"),
            ("Seal Bay", "Seal Buckskin"),
        ];
        for (base, expected) in cases {
            let result = apply_cream(record(base), Some(&genotype("CR/n")));
            assert_eq!(result.color(), expected);
            assert_eq!(result.genotypes().last().unwrap(), "CR/n");
        }
    }

    #[test]
    fn test_double_cream_and_cream_pearl() {
        for cream in ["CR/CR", "CR/prl"] {
            let cream = genotype(cream);
            assert_eq!(apply_cream(record("Red"), Some(&cream)).color(), "Cremello");
            assert_eq!(apply_cream(record("Black"), Some(&cream)).color(), "Smoky Cream");
            assert_eq!(apply_cream(record("Seal Bay"), Some(&cream)).color(), "Perlino");
        }
    }

    #[test]
    fn test_double_pearl_records_without_recoloring_black() {
        let pearl = genotype("prl/prl");
        let red = apply_cream(record("Red"), Some(&pearl));
        assert_eq!(red.color(), "Apricot Pearl");

        let black = apply_cream(record("Black"), Some(&pearl));
        assert_eq!(black.color(), "Black");
        assert_eq!(black.genotypes(), ["E/e", "A/a", "prl/prl"]);
    }

    #[test]
    fn test_cream_noop_cases() {
        let base = record("Bay");
        assert_eq!(apply_cream(base.clone(), None), base);
        assert_eq!(apply_cream(base.clone(), Some(&genotype("n/n"))), base);
        assert_eq!(apply_cream(base.clone(), Some(&genotype("prl/n"))), base);
    }

    #[test]
    fn test_champagne() {
        let champagne = genotype("Ch/n");
        assert_eq!(apply_champagne(record("Bay"), Some(&champagne)).color(), "Amber Champagne");
        assert_eq!(apply_champagne(record("Wild Bay"), Some(&champagne)).color(), "Sable Champagne");
        assert_eq!(
            apply_champagne(record("Perlino"), Some(&champagne)).color(),
            "Amber Cream Champagne"
        );
    }

    #[test]
    fn test_champagne_unknown_label_passes_unrecorded() {
        let base = record("Apricot Pearl");
        assert_eq!(apply_champagne(base.clone(), Some(&genotype("Ch/Ch"))), base);
        assert_eq!(apply_champagne(record("Bay"), Some(&genotype("n/n"))), record("Bay"));
    }

    #[test]
    fn test_dun_table() {
        let dun = genotype("D/n");
        assert_eq!(apply_dun(record("Bay"), Some(&dun)).color(), "Bay Dun");
        assert_eq!(apply_dun(record("Black"), Some(&dun)).color(), "Grullo");
        assert_eq!(apply_dun(record("Palomino"), Some(&dun)).color(), "Dunalino");
    }

    #[test]
    fn test_dun_fallback_appends_suffix() {
        let dun = genotype("n/D");
        for base in ["Perlino", "Cremello", "Apricot Pearl", "Gold Cream Champagne"] {
            let result = apply_dun(record(base), Some(&dun));
            assert_eq!(result.color(), format!("{base} Dun"));
            assert_eq!(result.genotypes().last().unwrap(), "D/n");
        }
    }

    #[test]
    fn test_dun_noop() {
        assert_eq!(apply_dun(record("Bay"), None), record("Bay"));
        assert_eq!(apply_dun(record("Bay"), Some(&genotype("n/n"))), record("Bay"));
    }

    #[test]
    fn test_silver_skips_red_based_labels() {
        let silver = genotype("Z/n");
        for exempt in SILVER_EXEMPT_LABELS {
            let base = record(exempt);
            assert_eq!(apply_silver(base.clone(), Some(&silver)), base);
        }
    }

    #[test]
    fn test_silver_prefixes_black_based_labels() {
        let silver = genotype("Z/Z");
        let result = apply_silver(record("Bay Dun"), Some(&silver));
        assert_eq!(result.color(), "Silver Bay Dun");
        assert_eq!(result.genotypes().last().unwrap(), "Z/Z");
        assert_eq!(apply_silver(record("Black"), Some(&silver)).color(), "Silver Black");
    }

    #[test]
    fn test_dilutions_apply_in_order() {
        let cream = genotype("CR/n");
        let champagne = genotype("Ch/n");
        let dun = genotype("D/n");
        let silver = genotype("Z/n");
        let combination = GeneCombination::default()
            .with(Gene::Cream, &cream)
            .with(Gene::Champagne, &champagne)
            .with(Gene::Dun, &dun)
            .with(Gene::Silver, &silver);

        // Bay -> Buckskin -> Amber Champagne -> Amber Champagne Dun -> Silver ...
        let result = apply_dilutions(record("Bay"), &combination);
        assert_eq!(result.color(), "Silver Amber Champagne Dun");
        assert_eq!(
            result.genotypes(),
            ["E/e", "A/a", "CR/n", "Ch/n", "D/n", "Z/n"]
        );

        // Red -> Palomino -> Gold Champagne -> Gold Champagne Dun, silver exempt
        let result = apply_dilutions(record("Red"), &combination);
        assert_eq!(result.color(), "Gold Champagne Dun");
        assert_eq!(result.genotypes().len(), 5);
    }
}
