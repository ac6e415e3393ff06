use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{ALLELE_SEPARATOR, NORMAL_ALLELE};
use crate::genotype::{split_alleles, standardize_genotype};

/// Number of genes in the fixed gene set.
pub const GENE_COUNT: usize = 12;

/// Pipeline stage a gene feeds into.
///
/// The category decides *when* a gene is consulted during phenotype
/// derivation, not how its genotype is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneCategory {
    /// Extension and agouti; seeds the label
    BaseColor,
    /// Cream, champagne, dun, silver
    Dilution,
    /// Overo, tobiano, roan
    Pattern,
    /// Flaxen, sooty, pangare
    Modifier,
}

impl fmt::Display for GeneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseColor => write!(f, "base color"),
            Self::Dilution => write!(f, "dilution"),
            Self::Pattern => write!(f, "pattern"),
            Self::Modifier => write!(f, "modifier"),
        }
    }
}

/// Coat-color genes recognised by the engine.
///
/// Discriminants follow [`GENE_ORDER`], so [`Gene::index`] can address
/// fixed-size per-gene arrays directly.
///
/// # Examples
///
/// ```rust
/// use equigen_core::types::{Gene, GeneCategory};
///
/// let gene: Gene = "champagne".parse()?;
/// assert_eq!(gene, Gene::Champagne);
/// assert_eq!(gene.category(), GeneCategory::Dilution);
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gene {
    Extension,
    Agouti,
    Cream,
    Champagne,
    Dun,
    Silver,
    Overo,
    Tobiano,
    Roan,
    Flaxen,
    Sooty,
    Pangare,
}

/// Declared gene iteration order: base color, dilutions, patterns, modifiers.
///
/// The Cartesian product is enumerated in this order, which makes any
/// output ordering that depends on generation sequence deterministic.
pub const GENE_ORDER: [Gene; GENE_COUNT] = [
    Gene::Extension,
    Gene::Agouti,
    Gene::Cream,
    Gene::Champagne,
    Gene::Dun,
    Gene::Silver,
    Gene::Overo,
    Gene::Tobiano,
    Gene::Roan,
    Gene::Flaxen,
    Gene::Sooty,
    Gene::Pangare,
];

impl Gene {
    /// Position of this gene in [`GENE_ORDER`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case identifier used in input files and form keys
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Agouti => "agouti",
            Self::Cream => "cream",
            Self::Champagne => "champagne",
            Self::Dun => "dun",
            Self::Silver => "silver",
            Self::Overo => "overo",
            Self::Tobiano => "tobiano",
            Self::Roan => "roan",
            Self::Flaxen => "flaxen",
            Self::Sooty => "sooty",
            Self::Pangare => "pangare",
        }
    }

    #[must_use]
    pub const fn category(self) -> GeneCategory {
        match self {
            Self::Extension | Self::Agouti => GeneCategory::BaseColor,
            Self::Cream | Self::Champagne | Self::Dun | Self::Silver => GeneCategory::Dilution,
            Self::Overo | Self::Tobiano | Self::Roan => GeneCategory::Pattern,
            Self::Flaxen | Self::Sooty | Self::Pangare => GeneCategory::Modifier,
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gene {
    type Err = EquigenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GENE_ORDER
            .into_iter()
            .find(|gene| gene.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EquigenError::UnknownGene(wanted.to_string()))
    }
}

/// A two-allele genotype for one gene, e.g. `CR/n`.
///
/// Allele order is kept as written. Matching helpers such as
/// [`Genotype::is`] ignore order, because a Punnett cross yields both
/// `CR/n` and `n/CR`.
///
/// # Examples
///
/// ```rust
/// use equigen_core::types::Genotype;
///
/// let genotype: Genotype = "n/CR".parse()?;
/// assert!(genotype.is("CR", "n"));
/// assert_eq!(genotype.to_string(), "n/CR");
/// assert_eq!(genotype.standardized().to_string(), "CR/n");
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Genotype {
    first: String,
    second: String,
}

impl Genotype {
    /// Build a genotype from two allele tokens without validation
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    #[must_use]
    pub fn alleles(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }

    /// Unordered equality against an allele pair
    #[must_use]
    pub fn is(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    #[must_use]
    pub fn is_homozygous_for(&self, allele: &str) -> bool {
        self.first == allele && self.second == allele
    }

    /// `n/n`: tested, carries nothing
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.is_homozygous_for(NORMAL_ALLELE)
    }

    /// Same alleles in dominance-ranked display order
    #[must_use]
    pub fn standardized(&self) -> Self {
        standardize_genotype(&self.first, &self.second)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, ALLELE_SEPARATOR, self.second)
    }
}

impl FromStr for Genotype {
    type Err = EquigenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = split_alleles(s)?;
        Ok(Self::new(first, second))
    }
}

impl TryFrom<String> for Genotype {
    type Error = EquigenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genotype> for String {
    fn from(genotype: Genotype) -> Self {
        genotype.to_string()
    }
}

/// One parent's genotypes, keyed by gene.
///
/// A missing entry is the "no genotype" sentinel: the gene is not under
/// consideration for this parent. Empty strings in the input mean the same.
///
/// # Examples
///
/// ```rust
/// use equigen_core::types::{Gene, ParentalGenotypes};
///
/// let dam = ParentalGenotypes::from_strings([
///     ("extension", "E/e"),
///     ("agouti", "A/a"),
///     ("cream", ""),
/// ])?;
/// assert_eq!(dam.get(Gene::Extension).map(ToString::to_string).as_deref(), Some("E/e"));
/// assert!(dam.get(Gene::Cream).is_none());
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Option<String>>",
    into = "BTreeMap<String, String>"
)]
pub struct ParentalGenotypes {
    genotypes: [Option<Genotype>; GENE_COUNT],
}

impl ParentalGenotypes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `(gene name, genotype)` pairs; empty genotype strings are absent.
    ///
    /// # Errors
    ///
    /// [`EquigenError::UnknownGene`] for an unrecognised gene name and
    /// [`EquigenError::MalformedGenotype`] for a genotype that does not split
    /// into exactly two alleles.
    pub fn from_strings<I, K, V>(pairs: I) -> Result<Self, EquigenError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut parent = Self::new();
        for (gene, genotype) in pairs {
            let gene: Gene = gene.as_ref().parse()?;
            parent.set(gene, crate::genotype::parse_genotype(Some(genotype.as_ref()))?);
        }
        Ok(parent)
    }

    #[must_use]
    pub fn get(&self, gene: Gene) -> Option<&Genotype> {
        self.genotypes[gene.index()].as_ref()
    }

    pub fn set(&mut self, gene: Gene, genotype: Option<Genotype>) {
        self.genotypes[gene.index()] = genotype;
    }

    /// Builder form of [`ParentalGenotypes::set`] that parses the genotype.
    ///
    /// # Errors
    ///
    /// [`EquigenError::MalformedGenotype`] if `genotype` is not `a/b`.
    pub fn with(mut self, gene: Gene, genotype: &str) -> Result<Self, EquigenError> {
        self.set(gene, crate::genotype::parse_genotype(Some(genotype))?);
        Ok(self)
    }

    /// All genes in declared order with their genotype, if any
    pub fn iter(&self) -> impl Iterator<Item = (Gene, Option<&Genotype>)> {
        GENE_ORDER
            .into_iter()
            .map(move |gene| (gene, self.get(gene)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genotypes.iter().all(Option::is_none)
    }

    /// Genes present in `other` replace ours; the rest are kept
    #[must_use]
    pub fn overlay(mut self, other: &ParentalGenotypes) -> Self {
        for (gene, genotype) in other.iter() {
            if let Some(genotype) = genotype {
                self.set(gene, Some(genotype.clone()));
            }
        }
        self
    }
}

impl TryFrom<BTreeMap<String, Option<String>>> for ParentalGenotypes {
    type Error = EquigenError;

    fn try_from(map: BTreeMap<String, Option<String>>) -> Result<Self, Self::Error> {
        Self::from_strings(
            map.into_iter()
                .map(|(gene, genotype)| (gene, genotype.unwrap_or_default())),
        )
    }
}

impl From<ParentalGenotypes> for BTreeMap<String, String> {
    fn from(parent: ParentalGenotypes) -> Self {
        parent
            .iter()
            .filter_map(|(gene, genotype)| {
                genotype.map(|genotype| (gene.name().to_string(), genotype.to_string()))
            })
            .collect()
    }
}

/// Both parents of a planned breeding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cross {
    pub dam: ParentalGenotypes,
    pub sire: ParentalGenotypes,
}

impl Cross {
    #[must_use]
    pub const fn new(dam: ParentalGenotypes, sire: ParentalGenotypes) -> Self {
        Self { dam, sire }
    }
}

/// Error types surfaced by the engine and its input/output helpers
#[derive(Error, Debug)]
pub enum EquigenError {
    /// Genotype text does not split into exactly two allele tokens
    #[error("Malformed genotype: {0:?} (expected two alleles separated by '/')")]
    MalformedGenotype(String),
    /// Gene name outside the fixed gene set
    #[error("Unknown gene: {0}")]
    UnknownGene(String),
    /// Structurally invalid input, e.g. a gene assignment without '='
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON input could not be read or results could not be serialised
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The rayon pool could not be configured
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
