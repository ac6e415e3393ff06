use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

use equigen_core::config::{EquigenConfig, OutputFormat};
use equigen_core::engine::CrossAnalyzer;
use equigen_core::genotype::io::read_cross_json;
use equigen_core::output::write_results;
use equigen_core::results::AggregatedResult;
use equigen_core::types::{Cross, EquigenError, ParentalGenotypes};

/// Options for configuring a cross analysis
#[pyclass]
#[derive(Clone)]
pub struct EquigenOptions {
    #[pyo3(get, set)]
    /// Output format: "text", "summary" (text without genotypes), "tsv", "json"
    pub format: String,

    #[pyo3(get, set)]
    /// Split large crosses across threads
    pub parallel: bool,

    #[pyo3(get, set)]
    /// Number of threads to use (None for default)
    pub num_threads: Option<usize>,

    #[pyo3(get, set)]
    /// Suppress informational output
    pub quiet: bool,
}

impl Default for EquigenOptions {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            parallel: true,
            num_threads: None,
            quiet: true,
        }
    }
}

#[pymethods]
impl EquigenOptions {
    #[new]
    #[pyo3(signature = (format="text", parallel=true, num_threads=None, quiet=true))]
    fn new(format: &str, parallel: bool, num_threads: Option<usize>, quiet: bool) -> Self {
        EquigenOptions {
            format: format.to_string(),
            parallel,
            num_threads,
            quiet,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "EquigenOptions(format='{}', parallel={}, num_threads={:?}, quiet={})",
            self.format, self.parallel, self.num_threads, self.quiet
        )
    }
}

/// One offspring color with its share of the cross
#[pyclass]
#[derive(Clone)]
pub struct Phenotype {
    #[pyo3(get)]
    /// Color label, e.g. "Tobiano Palomino"
    pub phenotype: String,

    #[pyo3(get)]
    /// Distinct genotype strings that produced this label
    pub genotypes: Vec<String>,

    #[pyo3(get)]
    /// Number of combinations with this label
    pub count: usize,

    #[pyo3(get)]
    /// Percentage of viable combinations, one decimal, e.g. "25.0"
    pub percentage: String,
}

#[pymethods]
impl Phenotype {
    fn __repr__(&self) -> String {
        format!(
            "Phenotype(phenotype='{}', count={}, percentage='{}')",
            self.phenotype, self.count, self.percentage
        )
    }
}

impl From<AggregatedResult> for Phenotype {
    fn from(result: AggregatedResult) -> Self {
        Phenotype {
            percentage: result.percentage_label(),
            phenotype: result.phenotype,
            genotypes: result.genotypes,
            count: result.count,
        }
    }
}

/// Result from a cross analysis
#[pyclass]
pub struct CrossResult {
    #[pyo3(get)]
    /// The formatted report
    pub output: String,

    #[pyo3(get)]
    /// Distribution in the order labels were first produced
    pub phenotypes: Vec<Phenotype>,

    #[pyo3(get)]
    /// Total number of offspring combinations enumerated
    pub combination_count: usize,

    #[pyo3(get)]
    /// Combinations dropped for missing extension or agouti data
    pub rejected_count: usize,
}

#[pymethods]
impl CrossResult {
    fn __repr__(&self) -> String {
        format!(
            "CrossResult(phenotype_count={}, combination_count={}, rejected_count={})",
            self.phenotypes.len(),
            self.combination_count,
            self.rejected_count
        )
    }
}

fn to_py_err(error: EquigenError) -> PyErr {
    match error {
        EquigenError::Io(e) => PyIOError::new_err(format!("I/O error: {}", e)),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Convert EquigenOptions to EquigenConfig
fn options_to_config(options: &EquigenOptions) -> PyResult<EquigenConfig> {
    let output_format: OutputFormat = options.format.parse().map_err(|_| {
        PyValueError::new_err(
            "Invalid output format. Must be one of: text, summary, tsv, json",
        )
    })?;

    Ok(EquigenConfig {
        output_format,
        quiet: options.quiet,
        parallel: options.parallel,
        num_threads: options.num_threads,
    })
}

fn run_analysis(cross: &Cross, options: Option<EquigenOptions>) -> PyResult<CrossResult> {
    let config = options_to_config(&options.unwrap_or_default())?;
    let analyzer = CrossAnalyzer::with_config(config).map_err(to_py_err)?;

    let results = analyzer.analyze(cross).map_err(to_py_err)?;

    let mut output = Vec::new();
    write_results(&mut output, &results, analyzer.config.output_format).map_err(to_py_err)?;
    let output = String::from_utf8(output)
        .map_err(|e| PyValueError::new_err(format!("UTF-8 conversion error: {}", e)))?;

    Ok(CrossResult {
        output,
        combination_count: results.summary.total_combinations,
        rejected_count: results.summary.rejected_combinations,
        phenotypes: results.phenotypes.into_iter().map(Phenotype::from).collect(),
    })
}

/// Compute the offspring color distribution of a cross
///
/// Args:
///     dam (dict[str, str]): Gene name to genotype, e.g. {"extension": "E/e"}
///     sire (dict[str, str]): Same for the sire
///     options (EquigenOptions, optional): Configuration options for the analysis
///
/// Returns:
///     CrossResult: Object containing the formatted report and the distribution
///
/// Example:
///     >>> import equigen
///     >>> result = equigen.compute_distribution(
///     ...     {"extension": "e/e", "agouti": "A/a", "cream": "CR/n"},
///     ...     {"extension": "e/e", "agouti": "a/a", "cream": "n/n"},
///     ... )
///     >>> [(p.phenotype, p.percentage) for p in result.phenotypes]
///     [('Palomino', '50.0'), ('Red', '50.0')]
#[pyfunction]
#[pyo3(signature = (dam, sire, options=None))]
fn compute_distribution(
    dam: HashMap<String, String>,
    sire: HashMap<String, String>,
    options: Option<EquigenOptions>,
) -> PyResult<CrossResult> {
    let dam = ParentalGenotypes::from_strings(dam).map_err(to_py_err)?;
    let sire = ParentalGenotypes::from_strings(sire).map_err(to_py_err)?;
    run_analysis(&Cross::new(dam, sire), options)
}

/// Analyze a cross from a JSON file
///
/// Args:
///     file_path (str): Path to a `{"dam": {...}, "sire": {...}}` JSON file
///     options (EquigenOptions, optional): Configuration options for the analysis
///
/// Returns:
///     CrossResult: Object containing the formatted report and the distribution
///
/// Example:
///     >>> import equigen
///     >>> result = equigen.analyze_file("cross.json")
///     >>> print(result.output)
#[pyfunction]
#[pyo3(signature = (file_path, options=None))]
fn analyze_file(file_path: &str, options: Option<EquigenOptions>) -> PyResult<CrossResult> {
    let cross = read_cross_json(file_path).map_err(|e| match e {
        EquigenError::Io(e) => {
            PyIOError::new_err(format!("Failed to read file '{}': {}", file_path, e))
        }
        other => to_py_err(other),
    })?;
    run_analysis(&cross, options)
}

/// Equigen - Horse coat color cross calculator
///
/// This module provides Python bindings for equigen, which predicts the
/// distribution of offspring coat colors from both parents' genotypes.
#[pymodule]
fn equigen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<EquigenOptions>()?;
    m.add_class::<Phenotype>()?;
    m.add_class::<CrossResult>()?;
    m.add_function(wrap_pyfunction!(compute_distribution, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_file, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Horse coat color cross calculator")?;

    Ok(())
}
