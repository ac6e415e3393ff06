//! Folding phenotype records into a distribution.
//!
//! [`PhenotypeTally`] keeps entries in first-sighting order with a label
//! index beside them, so each record costs one hash lookup plus one per
//! genotype. Tallies built over disjoint, consecutive slices of the
//! combination space merge into exactly the tally a single pass would build.

use std::collections::{HashMap, HashSet};

use crate::phenotype::PhenotypeRecord;
use crate::results::AggregatedResult;

#[derive(Debug, Clone, Default)]
struct TallyEntry {
    phenotype: String,
    genotypes: Vec<String>,
    seen: HashSet<String>,
    count: usize,
}

impl TallyEntry {
    fn new(phenotype: String) -> Self {
        Self {
            phenotype,
            ..Default::default()
        }
    }

    fn absorb_genotypes(&mut self, genotypes: impl IntoIterator<Item = String>) {
        for genotype in genotypes {
            if !self.seen.contains(&genotype) {
                self.seen.insert(genotype.clone());
                self.genotypes.push(genotype);
            }
        }
    }
}

/// Running count of phenotype labels and their contributing genotypes
#[derive(Debug, Clone, Default)]
pub struct PhenotypeTally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
    total: usize,
}

impl PhenotypeTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_mut(&mut self, phenotype: String) -> &mut TallyEntry {
        let position = match self.index.get(&phenotype) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(phenotype.clone(), position);
                self.entries.push(TallyEntry::new(phenotype));
                position
            }
        };
        &mut self.entries[position]
    }

    /// Count one record under its label
    pub fn add(&mut self, record: PhenotypeRecord) {
        let (phenotype, genotypes) = record.into_parts();
        let entry = self.entry_mut(phenotype);
        entry.absorb_genotypes(genotypes);
        entry.count += 1;
        self.total += 1;
    }

    /// Append `other`, which must cover combinations enumerated after ours
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for theirs in other.entries {
            let entry = self.entry_mut(theirs.phenotype);
            entry.absorb_genotypes(theirs.genotypes);
            entry.count += theirs.count;
        }
        self.total += other.total;
        self
    }

    /// Records counted so far
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Distinct labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach percentages; entries stay in first-sighting order
    #[must_use]
    pub fn finalize(self) -> Vec<AggregatedResult> {
        let total = self.total;
        self.entries
            .into_iter()
            .map(|entry| AggregatedResult {
                percentage: percentage(entry.count, total),
                phenotype: entry.phenotype,
                genotypes: entry.genotypes,
                count: entry.count,
            })
            .collect()
    }
}

impl Extend<PhenotypeRecord> for PhenotypeTally {
    fn extend<I: IntoIterator<Item = PhenotypeRecord>>(&mut self, records: I) {
        for record in records {
            self.add(record);
        }
    }
}

impl FromIterator<PhenotypeRecord> for PhenotypeTally {
    fn from_iter<I: IntoIterator<Item = PhenotypeRecord>>(records: I) -> Self {
        let mut tally = Self::new();
        tally.extend(records);
        tally
    }
}

/// `100 * count / total`, rounded half away from zero to one decimal.
///
/// Zero when `total` is zero.
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = 100.0 * count as f64 / total as f64;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(color: &str, genotypes: &[&str]) -> PhenotypeRecord {
        PhenotypeRecord::new(color, genotypes.iter().map(|g| g.to_string()).collect())
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(1, 16), 6.3);
        assert_eq!(percentage(3, 3), 100.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn test_add_unions_genotypes() {
        let mut tally = PhenotypeTally::new();
        tally.add(record("Bay", &["E/e", "A/a"]));
        tally.add(record("Black", &["E/e", "a/a"]));
        tally.add(record("Bay", &["E/E", "A/a"]));

        assert_eq!(tally.total(), 3);
        assert_eq!(tally.len(), 2);

        let results = tally.finalize();
        assert_eq!(results[0].phenotype, "Bay");
        assert_eq!(results[0].count, 2);
        assert_eq!(results[0].genotypes, ["E/e", "A/a", "E/E"]);
        assert_eq!(results[0].percentage, 66.7);
        assert_eq!(results[1].phenotype, "Black");
        assert_eq!(results[1].percentage, 33.3);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let records = vec![
            record("Red", &["e/e", "A/a"]),
            record("Bay", &["E/e", "A/a"]),
            record("Red", &["e/e", "a/a"]),
            record("Palomino", &["e/e", "A/a", "CR/n"]),
            record("Bay", &["E/e", "A/A"]),
        ];

        let single: PhenotypeTally = records.iter().cloned().collect();
        let left: PhenotypeTally = records[..2].iter().cloned().collect();
        let right: PhenotypeTally = records[2..].iter().cloned().collect();
        let merged = left.merge(right);

        assert_eq!(merged.total(), single.total());
        assert_eq!(merged.finalize(), single.finalize());
    }

    #[test]
    fn test_empty_tally() {
        let tally = PhenotypeTally::new();
        assert!(tally.is_empty());
        assert!(tally.finalize().is_empty());
    }
}
