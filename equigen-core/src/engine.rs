use std::ops::Range;
use std::path::Path;

use tracing::{debug, debug_span, warn};

use crate::aggregate::PhenotypeTally;
use crate::config::EquigenConfig;
use crate::cross::CombinationSpace;
use crate::genotype::io::{parse_cross_json, read_cross_json};
use crate::phenotype::derive_phenotype;
use crate::results::{AggregatedResult, CrossResults, CrossSummary, GeneBranching};
use crate::types::{Cross, EquigenError};

#[cfg(feature = "parallel")]
use crate::constants::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};

/// Compute the offspring color distribution for a cross.
///
/// Every gene contributes up to four equally likely offspring genotypes;
/// every combination of them is derived into a color label and counted.
/// Combinations missing extension or agouti data are dropped, so a cross
/// where neither parent has base color data yields an empty distribution.
///
/// Entries come back in the order each label was first produced. Calling
/// this twice on the same cross gives the same result.
///
/// # Examples
///
/// ```rust
/// use equigen_core::compute_phenotype_distribution;
/// use equigen_core::types::{Cross, ParentalGenotypes};
///
/// let dam = ParentalGenotypes::from_strings([
///     ("extension", "e/e"),
///     ("agouti", "A/a"),
///     ("cream", "n/n"),
/// ])?;
/// let sire = ParentalGenotypes::from_strings([
///     ("extension", "E/e"),
///     ("agouti", "a/a"),
///     ("cream", "CR/n"),
/// ])?;
///
/// let results = compute_phenotype_distribution(&Cross::new(dam, sire));
/// let total: usize = results.iter().map(|r| r.count).sum();
/// assert_eq!(total, 4 * 4 * 4);
/// assert!(results.iter().any(|r| r.phenotype == "Palomino"));
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[must_use]
pub fn compute_phenotype_distribution(cross: &Cross) -> Vec<AggregatedResult> {
    let space = CombinationSpace::from_cross(cross);
    tally_sequential(&space).finalize()
}

fn tally_range(space: &CombinationSpace, range: Range<usize>) -> PhenotypeTally {
    space
        .iter_range(range)
        .filter_map(|combination| derive_phenotype(&combination))
        .collect()
}

fn tally_sequential(space: &CombinationSpace) -> PhenotypeTally {
    tally_range(space, 0..space.len())
}

/// Fixed-size index chunks, tallied on the rayon pool and merged in order
#[cfg(feature = "parallel")]
fn tally_parallel(space: &CombinationSpace) -> PhenotypeTally {
    use rayon::prelude::*;

    let len = space.len();
    (0..len.div_ceil(PARALLEL_CHUNK_SIZE))
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * PARALLEL_CHUNK_SIZE;
            tally_range(space, start..(start + PARALLEL_CHUNK_SIZE).min(len))
        })
        .reduce(PhenotypeTally::new, PhenotypeTally::merge)
}

/// High-level cross analyzer.
///
/// Wraps [`compute_phenotype_distribution`] with configuration, bookkeeping
/// and input loading. Large crosses are split across the rayon pool when
/// `config.parallel` is set; the result is identical to a sequential run.
///
/// # Examples
///
/// ## Analyze a cross
///
/// ```rust
/// use equigen_core::{CrossAnalyzer, config::EquigenConfig};
/// use equigen_core::types::{Cross, ParentalGenotypes};
///
/// let parent = ParentalGenotypes::from_strings([("extension", "E/e"), ("agouti", "A/a")])?;
/// let analyzer = CrossAnalyzer::new(EquigenConfig::default());
/// let results = analyzer.analyze(&Cross::new(parent.clone(), parent))?;
///
/// assert_eq!(results.summary.total_combinations, 16);
/// assert_eq!(results.summary.rejected_combinations, 0);
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
///
/// ## Analyze a JSON file
///
/// ```rust,no_run
/// use equigen_core::{CrossAnalyzer, config::EquigenConfig};
///
/// let analyzer = CrossAnalyzer::new(EquigenConfig::default());
/// let results = analyzer.analyze_json_file("cross.json")?;
///
/// for phenotype in &results.phenotypes {
///     println!("{}: {}%", phenotype.phenotype, phenotype.percentage_label());
/// }
/// # Ok::<(), equigen_core::types::EquigenError>(())
/// ```
#[derive(Debug, Default)]
pub struct CrossAnalyzer {
    /// Configuration options for analysis
    pub config: EquigenConfig,

    /// Pool sized by `config.num_threads`; the global pool when `None`
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl CrossAnalyzer {
    /// Creates an analyzer on the global rayon pool, ignoring `num_threads`.
    pub const fn new(config: EquigenConfig) -> Self {
        Self {
            config,
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Creates an analyzer with its own pool of `config.num_threads` workers.
    ///
    /// The pool belongs to this analyzer, so any number of analyzers with
    /// different thread counts can live in one process.
    ///
    /// # Errors
    ///
    /// Returns [`EquigenError::ThreadPool`] if the pool cannot be built.
    pub fn with_config(config: EquigenConfig) -> Result<Self, EquigenError> {
        #[cfg(feature = "parallel")]
        if let Some(num_threads) = config.num_threads {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| {
                    EquigenError::ThreadPool(format!("Failed to configure thread pool: {}", e))
                })?;
            debug!(num_threads, "built analyzer thread pool");
            return Ok(Self {
                config,
                pool: Some(pool),
            });
        }

        Ok(Self::new(config))
    }

    /// Analyzes one cross.
    ///
    /// # Errors
    ///
    /// Infallible for any parsed [`Cross`]; the `Result` keeps the signature
    /// in line with the loading methods.
    pub fn analyze(&self, cross: &Cross) -> Result<CrossResults, EquigenError> {
        let span = debug_span!("cross");
        let _enter = span.enter();

        let space = CombinationSpace::from_cross(cross);
        let total_combinations = space.len();
        let branching: Vec<GeneBranching> = space
            .branching()
            .map(|(gene, outcomes)| GeneBranching::new(gene, outcomes))
            .collect();
        debug!(total_combinations, "expanded cross");

        let tally = self.tally(&space);
        let viable_combinations = tally.total();
        let rejected_combinations = total_combinations - viable_combinations;
        debug!(
            viable_combinations,
            rejected_combinations,
            phenotypes = tally.len(),
            "aggregated phenotypes"
        );
        if viable_combinations == 0 {
            warn!("every combination lacks extension or agouti data; distribution is empty");
        }

        Ok(CrossResults {
            summary: CrossSummary {
                total_combinations,
                viable_combinations,
                rejected_combinations,
                branching,
            },
            phenotypes: tally.finalize(),
        })
    }

    /// Loads a `{ "dam": {...}, "sire": {...} }` file and analyzes it.
    ///
    /// # Errors
    ///
    /// Returns [`EquigenError`] if the file cannot be read, is not valid
    /// JSON, names an unknown gene or holds a malformed genotype.
    pub fn analyze_json_file<P: AsRef<Path>>(&self, path: P) -> Result<CrossResults, EquigenError> {
        let cross = read_cross_json(path)?;
        self.analyze(&cross)
    }

    /// Same as [`Self::analyze_json_file`] for in-memory JSON
    pub fn analyze_json_str(&self, json: &str) -> Result<CrossResults, EquigenError> {
        let cross = parse_cross_json(json)?;
        self.analyze(&cross)
    }

    fn tally(&self, space: &CombinationSpace) -> PhenotypeTally {
        #[cfg(feature = "parallel")]
        if self.config.parallel && space.len() > PARALLEL_THRESHOLD {
            debug!(chunk_size = PARALLEL_CHUNK_SIZE, "tallying in parallel");
            return match &self.pool {
                Some(pool) => pool.install(|| tally_parallel(space)),
                None => tally_parallel(space),
            };
        }

        tally_sequential(space)
    }
}
